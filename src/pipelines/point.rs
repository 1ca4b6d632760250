use cgmath::Matrix4;

use crate::{
    context::Context,
    data_structures::{
        uniform::UniformArray,
        vertex::{PointInstance, Vertex},
    },
    pipelines::{PipelineOptions, basic::mk_render_pipeline, wgsl},
};

const SHADER: &str = include_str!("point.wgsl");

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniform {
    model_view_projection: [[f32; 4]; 4],
    params: [f32; 4],
}

impl PointUniform {
    /// # Arguments
    ///
    /// * `viewport` is the [width, height] of the target viewport in pixels
    /// * `point_size` is the edge length of every point in pixels
    pub fn new(model_view_projection: Matrix4<f32>, viewport: [f32; 2], point_size: f32) -> Self {
        Self {
            model_view_projection: model_view_projection.into(),
            params: [viewport[0], viewport[1], point_size, 0.0],
        }
    }
}

pub fn mk_point_pipeline(ctx: &Context, uniforms: &UniformArray<PointUniform>) -> wgpu::RenderPipeline {
    let layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Pipeline Layout"),
            bind_group_layouts: &[uniforms.layout()],
            push_constant_ranges: &[],
        });

    mk_render_pipeline(
        &ctx.device,
        &layout,
        ctx.config.format,
        Some(wgpu::BlendState::REPLACE),
        ctx.depth_format(),
        &[PointInstance::desc()],
        wgsl("Point Shader", SHADER),
        PipelineOptions {
            label: "Point Pipeline",
            ..Default::default()
        },
    )
}

/// Draw `count` points from the instance buffer bound at slot 0.
pub fn draw_points(render_pass: &mut wgpu::RenderPass<'_>, instances: &wgpu::Buffer, range: std::ops::Range<u32>) {
    if range.is_empty() {
        return;
    }
    render_pass.set_vertex_buffer(0, instances.slice(..));
    render_pass.draw(0..PointInstance::VERTICES, range);
}
