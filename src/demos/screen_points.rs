use cgmath::Point3;

use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::PointInstance},
    flow::Demo,
    pipelines::point::{PointUniform, draw_points, mk_point_pipeline},
    render::GrowableBuffer,
    transform::{look_at_origin, ortho},
};

const POINT_SIZE: f32 = 5.0;

/// Window pixel position (origin top left) to the bottom left origin the
/// pixel projection uses.
pub fn to_screen_point(cursor: [f64; 2], height: u32) -> [f32; 3] {
    [cursor[0] as f32, height as f32 - cursor[1] as f32, 0.0]
}

pub struct ScreenPoints {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<PointUniform>,
    points: GrowableBuffer<PointInstance>,
}

impl Demo for ScreenPoints {
    fn config() -> DemoConfig {
        DemoConfig::new("Screen Points", 800, 600).with_clear_colour(wgpu::Color::BLACK)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Screen Point Uniforms");
        let pipeline = mk_point_pipeline(ctx, &uniforms);

        Ok(Self {
            pipeline,
            uniforms,
            points: GrowableBuffer::new(&ctx.device, "Screen Points", 1024),
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        let [width, height] = ctx.size();
        if ctx.input.left_button {
            let cursor = ctx.input.cursor;
            self.points.push(PointInstance::new(
                to_screen_point([cursor.x, cursor.y], height),
                rand::random::<[f32; 3]>(),
            ));
            self.points.sync(&ctx.device, &ctx.queue);
        }

        let (width, height) = (width as f32, height as f32);
        let view_projection =
            ortho(0.0, width, 0.0, height, 0.01, 10.0) * look_at_origin(Point3::new(0.0, 0.0, 3.0));
        self.uniforms.write(
            &ctx.queue,
            0,
            &PointUniform::new(view_projection, [width, height], POINT_SIZE),
        );
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        draw_points(render_pass, self.points.buffer(), 0..self.points.len() as u32);
    }
}
