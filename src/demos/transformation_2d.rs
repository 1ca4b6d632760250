use cgmath::{Matrix4, Vector3};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::VertexColor},
    flow::Demo,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

const VERTICES: [VertexColor; 6] = [
    VertexColor::new([-0.2, 0.2, 0.0], RED),
    VertexColor::new([-0.2, -0.2, 0.0], RED),
    VertexColor::new([0.2, 0.2, 0.0], RED),
    VertexColor::new([0.2, 0.2, 0.0], GREEN),
    VertexColor::new([-0.2, -0.2, 0.0], GREEN),
    VertexColor::new([0.2, -0.2, 0.0], GREEN),
];

/// Angle advanced every frame, independent of the frame time.
pub const ANGLE_STEP: f32 = 0.05;

/// The model matrix for a given animation angle.
pub fn model_matrix(angle: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(angle.sin() * 0.5, 0.0, 0.0))
}

pub struct Transformation2d {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    quad: Mesh,
    angle: f32,
}

impl Demo for Transformation2d {
    fn config() -> DemoConfig {
        DemoConfig::new("2D Transformation", 800, 800)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Transformation Uniforms");
        let pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Interleaved,
            PipelineOptions {
                label: "Transformation Pipeline",
                ..Default::default()
            },
        );

        Ok(Self {
            pipeline,
            uniforms,
            quad: Mesh::new(&ctx.device, "Quad", &VERTICES),
            angle: 0.0,
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        self.angle += ANGLE_STEP;
        self.uniforms
            .write(&ctx.queue, 0, &DrawUniform::new(model_matrix(self.angle)));
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        self.quad.draw(render_pass);
    }
}
