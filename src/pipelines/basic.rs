use cgmath::{Matrix4, SquareMatrix};

use crate::{
    context::Context,
    data_structures::{
        uniform::UniformArray,
        vertex::{ColorAttribute, Vertex, VertexColor, VertexPosition},
    },
    pipelines::{PipelineOptions, wgsl},
};

const SHADER: &str = include_str!("basic.wgsl");

/// Per-draw data of the unlit shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    model_view_projection: [[f32; 4]; 4],
    color: [f32; 4],
}

impl DrawUniform {
    pub fn new(model_view_projection: Matrix4<f32>) -> Self {
        Self {
            model_view_projection: model_view_projection.into(),
            color: [1.0; 4],
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = [color[0], color[1], color[2], 1.0];
        self
    }
}

impl Default for DrawUniform {
    fn default() -> Self {
        Self::new(Matrix4::identity())
    }
}

/// How per-vertex colour reaches the shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSource {
    /// Positions only, colour from [`DrawUniform`].
    Uniform,
    /// Interleaved [`VertexColor`] buffer.
    Interleaved,
    /// Positions in slot 0, colours in slot 1.
    Separate,
}

pub fn mk_basic_pipeline(
    ctx: &Context,
    uniforms: &UniformArray<DrawUniform>,
    colors: ColorSource,
    options: PipelineOptions,
) -> wgpu::RenderPipeline {
    let layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Basic Pipeline Layout"),
            bind_group_layouts: &[uniforms.layout()],
            push_constant_ranges: &[],
        });

    let (vs_entry, vertex_layouts) = match colors {
        ColorSource::Uniform => ("vs_uniform_color", vec![VertexPosition::desc()]),
        ColorSource::Interleaved => ("vs_vertex_color", vec![VertexColor::desc()]),
        ColorSource::Separate => (
            "vs_vertex_color",
            vec![VertexPosition::desc(), ColorAttribute::desc()],
        ),
    };

    mk_render_pipeline(
        &ctx.device,
        &layout,
        ctx.config.format,
        Some(wgpu::BlendState::REPLACE),
        ctx.depth_format(),
        &vertex_layouts,
        wgsl("Basic Shader", SHADER),
        PipelineOptions {
            vs_entry,
            ..options
        },
    )
}

pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_format: Option<wgpu::TextureFormat>,
    vertex_layouts: &[wgpu::VertexBufferLayout],
    shader: wgpu::ShaderModuleDescriptor,
    options: PipelineOptions,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(shader);

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some(options.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(options.vs_entry),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(options.fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: options.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // both faces are visible, as with a default GL context
            cull_mode: None,
            polygon_mode: options.polygon_mode,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}
