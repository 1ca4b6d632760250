use winit::{event::WindowEvent, keyboard::KeyCode};

use crate::{
    context::{Context, DemoConfig},
    data_structures::uniform::UniformArray,
    flow::Demo,
    geometry::{circle, fan_indices},
    input::pressed_key,
    pipelines::{
        PipelineOptions, PolygonPipelines,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const RADIUS: f32 = 0.5;
const MIN_SLICES: u32 = 8;
const MAX_SLICES: u32 = 32;

pub struct DrawCircle {
    pipelines: PolygonPipelines,
    uniforms: UniformArray<DrawUniform>,
    circle: Mesh,
    slices: u32,
    wireframe: bool,
}

fn mk_circle(device: &wgpu::Device, slices: u32) -> Mesh {
    let vertices = circle(RADIUS, slices, HEIGHT as f32 / WIDTH as f32);
    Mesh::indexed(
        device,
        "Circle",
        &vertices,
        &fan_indices(vertices.len() as u32),
    )
}

/// The slice count after `delta` Up (positive) or Down (negative) presses,
/// kept within 8..=32.
pub fn step_slices(current: u32, delta: i32) -> u32 {
    (current as i64 + delta as i64).clamp(MIN_SLICES as i64, MAX_SLICES as i64) as u32
}

impl DrawCircle {
    fn set_slices(&mut self, ctx: &Context, delta: i32) {
        let slices = step_slices(self.slices, delta);
        if slices == self.slices {
            return;
        }
        self.slices = slices;
        self.circle = mk_circle(&ctx.device, slices);
        log::info!("Circle slices: {}", slices);
    }
}

impl Demo for DrawCircle {
    fn config() -> DemoConfig {
        DemoConfig::new("Draw Circle", WIDTH, HEIGHT)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Circle Uniforms");
        uniforms.write(&ctx.queue, 0, &DrawUniform::default());
        let pipelines = PolygonPipelines::new(ctx, |polygon_mode| {
            mk_basic_pipeline(
                ctx,
                &uniforms,
                ColorSource::Uniform,
                PipelineOptions {
                    label: "Circle Pipeline",
                    polygon_mode,
                    ..Default::default()
                },
            )
        });

        Ok(Self {
            pipelines,
            uniforms,
            circle: mk_circle(&ctx.device, MIN_SLICES),
            slices: MIN_SLICES,
            wireframe: false,
        })
    }

    fn on_window_event(&mut self, ctx: &Context, event: &WindowEvent) {
        match pressed_key(event) {
            Some(KeyCode::ArrowUp) => self.set_slices(ctx, 1),
            Some(KeyCode::ArrowDown) => self.set_slices(ctx, -1),
            Some(KeyCode::KeyW) => {
                if !ctx.wireframe_supported {
                    log::warn!("Wireframe rendering is not supported by this adapter");
                }
                self.wireframe = true;
            }
            Some(KeyCode::KeyS) => self.wireframe = false,
            _ => {}
        }
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(self.pipelines.get(self.wireframe));
        self.uniforms.bind(render_pass, 0, 0);
        self.circle.draw(render_pass);
    }
}
