use cgmath::{Deg, Matrix4, Point3, Rad, Vector3};

use crate::{
    context::{Context, DemoConfig},
    data_structures::uniform::UniformArray,
    flow::Demo,
    geometry::colour_cube,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::Mesh,
    transform::{look_at_origin, perspective},
    ui,
};

/// Model matrices of the spinning cube and of the half size cube orbiting it.
///
/// The orbiting cube cancels the orbit rotation so that its own spin only
/// depends on `rotation[1]`. Angles are in radians.
pub fn orbit_matrices(orbit: f32, rotation: [f32; 2]) -> [Matrix4<f32>; 2] {
    let object1 = Matrix4::from_angle_y(Rad(rotation[0]));
    let object2 = Matrix4::from_angle_y(Rad(orbit))
        * Matrix4::from_translation(Vector3::new(2.0, 0.0, 0.0))
        * Matrix4::from_angle_y(Rad(rotation[1] - orbit))
        * Matrix4::from_scale(0.5);
    [object1, object2]
}

pub struct Orbit {
    pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    cube: Mesh,
    orbit_angle: f32,
    rotation_angles: [f32; 2],
    /// Radians per second.
    pub orbit_speed: f32,
    pub rotation_speeds: [f32; 2],
}

impl Demo for Orbit {
    fn config() -> DemoConfig {
        DemoConfig::new("3D Orbit", 800, 600)
            .with_depth_test()
            .with_tweak_bar(250.0, 200.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 2, "Orbit Uniforms");
        let pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Interleaved,
            PipelineOptions {
                label: "Orbit Pipeline",
                ..Default::default()
            },
        );
        let (vertices, indices) = colour_cube();

        Ok(Self {
            pipeline,
            uniforms,
            cube: Mesh::indexed(&ctx.device, "Cube", &vertices, &indices),
            orbit_angle: 0.0,
            rotation_angles: [0.0; 2],
            orbit_speed: 0.5,
            rotation_speeds: [1.0, 1.0],
        })
    }

    fn on_update(&mut self, ctx: &Context, dt: instant::Duration) {
        let dt = dt.as_secs_f32();
        self.orbit_angle += self.orbit_speed * dt;
        for (angle, speed) in self.rotation_angles.iter_mut().zip(self.rotation_speeds) {
            *angle += speed * dt;
        }

        let view_projection = perspective(Deg(45.0), ctx.aspect(), 0.1, 10.0)
            * look_at_origin(Point3::new(0.0, 0.0, 5.0));
        let uniforms = orbit_matrices(self.orbit_angle, self.rotation_angles)
            .map(|model| DrawUniform::new(view_projection * model));
        self.uniforms.write_all(&ctx.queue, &uniforms);
    }

    fn on_ui(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui::frame_stats(ui, &ctx.stats);
        ui::group(ui, "Object 1", |ui| {
            ui.add(
                egui::Slider::new(&mut self.rotation_speeds[0], -2.0..=2.0)
                    .step_by(0.01)
                    .text("Rotation speed 1"),
            );
        });
        ui::group(ui, "Object 2", |ui| {
            ui.add(
                egui::Slider::new(&mut self.orbit_speed, -1.0..=1.0)
                    .step_by(0.01)
                    .text("Orbit speed"),
            );
            ui.add(
                egui::Slider::new(&mut self.rotation_speeds[1], -2.0..=2.0)
                    .step_by(0.01)
                    .text("Rotation speed 2"),
            );
        });
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        for slot in 0..2 {
            self.uniforms.bind(render_pass, 0, slot);
            self.cube.draw(render_pass);
        }
    }
}
