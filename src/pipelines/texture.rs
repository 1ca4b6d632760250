use crate::{
    context::Context,
    data_structures::vertex::{Vertex, VertexTex},
    pipelines::{PipelineOptions, basic::mk_render_pipeline, wgsl},
};

const SHADER: &str = include_str!("texture.wgsl");

pub fn mk_texture_pipeline(
    ctx: &Context,
    texture_layout: &wgpu::BindGroupLayout,
    topology: wgpu::PrimitiveTopology,
    polygon_mode: wgpu::PolygonMode,
) -> wgpu::RenderPipeline {
    let layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Texture Pipeline Layout"),
            bind_group_layouts: &[texture_layout],
            push_constant_ranges: &[],
        });

    mk_render_pipeline(
        &ctx.device,
        &layout,
        ctx.config.format,
        Some(wgpu::BlendState::REPLACE),
        ctx.depth_format(),
        &[VertexTex::desc()],
        wgsl("Texture Shader", SHADER),
        PipelineOptions {
            label: "Texture Pipeline",
            topology,
            polygon_mode,
            ..Default::default()
        },
    )
}
