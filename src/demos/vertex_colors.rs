//! Two triangles whose positions and colours live in separate vertex buffers.

use crate::{
    context::{Context, DemoConfig},
    data_structures::{
        uniform::UniformArray,
        vertex::{ColorAttribute, VertexPosition},
    },
    flow::Demo,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
};

const POSITIONS: [VertexPosition; 6] = [
    VertexPosition::new(-0.8, -0.3, 0.0),
    VertexPosition::new(-0.2, -0.3, 0.0),
    VertexPosition::new(-0.5, 0.3, 0.0),
    VertexPosition::new(0.2, -0.3, 0.0),
    VertexPosition::new(0.8, -0.3, 0.0),
    VertexPosition::new(0.5, 0.3, 0.0),
];

const COLORS: [ColorAttribute; 6] = [
    ColorAttribute { color: [1.0, 0.0, 0.0] },
    ColorAttribute { color: [0.0, 1.0, 0.0] },
    ColorAttribute { color: [0.0, 0.0, 1.0] },
    ColorAttribute { color: [1.0, 0.0, 1.0] },
    ColorAttribute { color: [1.0, 1.0, 0.0] },
    ColorAttribute { color: [0.0, 1.0, 1.0] },
];

pub struct VertexColors {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    positions: Mesh,
    colors: Mesh,
}

impl Demo for VertexColors {
    fn config() -> DemoConfig {
        DemoConfig::new("Vertex Colours", 800, 600)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Vertex Colour Uniforms");
        uniforms.write(&ctx.queue, 0, &DrawUniform::default());
        let pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Separate,
            PipelineOptions {
                label: "Vertex Colour Pipeline",
                ..Default::default()
            },
        );

        Ok(Self {
            pipeline,
            uniforms,
            positions: Mesh::new(&ctx.device, "Positions", &POSITIONS),
            colors: Mesh::new(&ctx.device, "Colours", &COLORS),
        })
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        render_pass.set_vertex_buffer(1, self.colors.vertex_buffer().slice(..));
        self.positions.draw(render_pass);
    }
}
