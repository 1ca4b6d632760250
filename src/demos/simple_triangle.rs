use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::VertexPosition},
    flow::Demo,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
};

const VERTICES: [VertexPosition; 3] = [
    VertexPosition::new(0.0, 0.5, 0.0),
    VertexPosition::new(0.5, -0.5, 0.0),
    VertexPosition::new(-0.5, -0.5, 0.0),
];

pub struct SimpleTriangle {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    triangle: Mesh,
}

impl Demo for SimpleTriangle {
    fn config() -> DemoConfig {
        DemoConfig::new("Simple Triangle", 800, 600)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Triangle Uniforms");
        uniforms.write(&ctx.queue, 0, &DrawUniform::default());
        let pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Uniform,
            PipelineOptions {
                label: "Triangle Pipeline",
                ..Default::default()
            },
        );

        Ok(Self {
            pipeline,
            uniforms,
            triangle: Mesh::new(&ctx.device, "Triangle", &VERTICES),
        })
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        self.triangle.draw(render_pass);
    }
}
