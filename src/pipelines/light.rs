use crate::{
    context::Context,
    data_structures::{
        light::{LightingUniform, ObjectUniform},
        uniform::UniformArray,
        vertex::{Vertex, VertexNormal},
    },
    pipelines::{PipelineOptions, basic::mk_render_pipeline, wgsl},
};

const SHADER: &str = include_str!("lighting.wgsl");

/// Where and how often the reflection model is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingModel {
    /// Once per vertex, the first vertex's colour fills the whole triangle.
    Flat,
    /// Once per vertex, colours interpolated across the triangle.
    Gouraud,
    /// Once per fragment with interpolated normals.
    Phong,
    /// Phong shading with a cone shaped, attenuated light.
    Spot,
}

impl ShadingModel {
    fn entry_points(self) -> (&'static str, &'static str) {
        match self {
            ShadingModel::Flat => ("vs_flat", "fs_flat"),
            ShadingModel::Gouraud => ("vs_gouraud", "fs_gouraud"),
            ShadingModel::Phong => ("vs_phong", "fs_phong"),
            ShadingModel::Spot => ("vs_phong", "fs_spot"),
        }
    }
}

pub fn mk_light_pipeline(
    ctx: &Context,
    objects: &UniformArray<ObjectUniform>,
    lighting: &UniformArray<LightingUniform>,
    model: ShadingModel,
    topology: wgpu::PrimitiveTopology,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    let layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Light Pipeline Layout"),
            bind_group_layouts: &[objects.layout(), lighting.layout()],
            push_constant_ranges: &[],
        });
    let (vs_entry, fs_entry) = model.entry_points();

    mk_render_pipeline(
        &ctx.device,
        &layout,
        ctx.config.format,
        Some(wgpu::BlendState::REPLACE),
        ctx.depth_format(),
        &[VertexNormal::desc()],
        wgsl("Light Shader", SHADER),
        PipelineOptions {
            label: "Light Pipeline",
            topology,
            polygon_mode,
            vs_entry,
            fs_entry,
        },
    )
}
