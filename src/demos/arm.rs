//! A three segment arm and its mirror image, steered with the keyboard.
//!
//! | Keys | Effect |
//! |---|---|
//! | Z / C | rotate the base |
//! | A / D | rotate the first joint |
//! | Q / E | rotate the second joint |
//! | arrows | move the base |

use winit::keyboard::KeyCode;

use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::VertexColor},
    flow::Demo,
    input::InputState,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
    transform::{ArmMatrices, ArmPose},
};

const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

const SEGMENT: [VertexColor; 3] = [
    VertexColor::new([0.0, 0.2, 0.0], GREEN),
    VertexColor::new([-0.05, -0.2, 0.0], BLUE),
    VertexColor::new([0.05, -0.2, 0.0], GREEN),
];

const NODES: u32 = ArmMatrices::NAMES.len() as u32;

/// Joint directions (-1, 0, 1) from the held keys.
pub fn joint_input(input: &InputState) -> [f32; 3] {
    [
        input.axis(KeyCode::KeyC, KeyCode::KeyZ),
        input.axis(KeyCode::KeyD, KeyCode::KeyA),
        input.axis(KeyCode::KeyE, KeyCode::KeyQ),
    ]
}

pub fn movement_input(input: &InputState) -> [f32; 2] {
    [
        input.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
        input.axis(KeyCode::ArrowDown, KeyCode::ArrowUp),
    ]
}

pub struct Arm {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    segment: Mesh,
    pub pose: ArmPose,
}

impl Demo for Arm {
    fn config() -> DemoConfig {
        DemoConfig::new("2D Arm", 800, 800)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, NODES, "Arm Uniforms");
        let pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Interleaved,
            PipelineOptions {
                label: "Arm Pipeline",
                ..Default::default()
            },
        );

        Ok(Self {
            pipeline,
            uniforms,
            segment: Mesh::new(&ctx.device, "Arm Segment", &SEGMENT),
            pose: ArmPose::default(),
        })
    }

    fn on_update(&mut self, ctx: &Context, dt: instant::Duration) {
        self.pose.advance(
            joint_input(&ctx.input),
            movement_input(&ctx.input),
            dt.as_secs_f32(),
        );
        let uniforms = self.pose.evaluate().to_array().map(DrawUniform::new);
        self.uniforms.write_all(&ctx.queue, &uniforms);
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        for slot in 0..NODES {
            self.uniforms.bind(render_pass, 0, slot);
            self.segment.draw(render_pass);
        }
    }
}
