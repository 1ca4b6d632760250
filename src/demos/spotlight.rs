//! A floor lit by a single spot light with distance attenuation.

use cgmath::{Deg, Matrix4, Point3, SquareMatrix};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{
        light::{Light, LightingUniform, Material, ObjectUniform},
        uniform::UniformArray,
    },
    flow::Demo,
    geometry::floor_plane,
    pipelines::{
        PolygonPipelines,
        light::{ShadingModel, mk_light_pipeline},
    },
    render::Mesh,
    transform::{look_at_origin, perspective},
    ui,
};

const VIEWPOINT: [f32; 3] = [0.0, 2.0, 4.0];

pub struct Spotlight {
    pipelines: PolygonPipelines,
    objects: UniformArray<ObjectUniform>,
    lighting: UniformArray<LightingUniform>,
    floor: Mesh,
    pub light: Light,
    pub material: Material,
    pub wireframe: bool,
}

impl Demo for Spotlight {
    fn config() -> DemoConfig {
        DemoConfig::new("Spotlight", 800, 600)
            .with_depth_test()
            .with_tweak_bar(250.0, 500.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let objects = UniformArray::new(&ctx.device, 1, "Floor Uniforms");
        let lighting = UniformArray::new(&ctx.device, 1, "Spot Light Uniforms");
        let pipelines = PolygonPipelines::new(ctx, |polygon_mode| {
            mk_light_pipeline(
                ctx,
                &objects,
                &lighting,
                ShadingModel::Spot,
                wgpu::PrimitiveTopology::TriangleStrip,
                polygon_mode,
            )
        });

        Ok(Self {
            pipelines,
            objects,
            lighting,
            floor: Mesh::new(&ctx.device, "Floor", &floor_plane()),
            light: Light {
                position: [0.0, 1.0, 0.0],
                direction: [0.0, -1.0, 0.0],
                ambient: [0.0; 3],
                diffuse: [1.0, 1.0, 0.0],
                specular: [1.0, 1.0, 0.0],
                attenuation: [1.0, 0.0, 0.0],
                inner_angle: 15.0,
                outer_angle: 45.0,
            },
            material: Material {
                ambient: [0.4; 3],
                diffuse: [1.0; 3],
                specular: [1.0; 3],
                shininess: 40.0,
            },
            wireframe: false,
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        let view_projection =
            perspective(Deg(45.0), ctx.aspect(), 0.1, 10.0) * look_at_origin(Point3::from(VIEWPOINT));

        self.objects.write(
            &ctx.queue,
            0,
            &ObjectUniform::new(view_projection, Matrix4::identity()),
        );
        self.lighting.write(
            &ctx.queue,
            0,
            &LightingUniform::new(&self.light, &self.material, VIEWPOINT),
        );
    }

    fn on_ui(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui::frame_stats(ui, &ctx.stats);
        ui::group(ui, "Controls", |ui| {
            ui::wireframe(ui, ctx, &mut self.wireframe);
        });

        let light = &mut self.light;
        ui::group(ui, "Light", |ui| {
            ui::vec3_sliders(ui, "Pos:", &mut light.position, -5.0..=5.0, 0.1);
            ui::vec3_sliders(ui, "Direction", &mut light.direction, -1.0..=1.0, 0.01);
            ui::colour(ui, "La", &mut light.ambient);
            ui::colour(ui, "Ld", &mut light.diffuse);
            ui::colour(ui, "Ls", &mut light.specular);
            for (value, label) in light
                .attenuation
                .iter_mut()
                .zip(["Constant", "Linear", "Quadratic"])
            {
                ui.add(egui::Slider::new(value, 0.0..=1.0).step_by(0.01).text(label));
            }
            ui.add(
                egui::Slider::new(&mut light.inner_angle, 0.0..=90.0)
                    .step_by(1.0)
                    .text("InnerAngle"),
            );
            ui.add(
                egui::Slider::new(&mut light.outer_angle, 0.0..=90.0)
                    .step_by(1.0)
                    .text("OuterAngle"),
            );
        });

        let material = &mut self.material;
        ui::group(ui, "Material", |ui| {
            ui::colour(ui, "Ka", &mut material.ambient);
            ui::colour(ui, "Kd", &mut material.diffuse);
            ui::colour(ui, "Ks", &mut material.specular);
            ui.add(
                egui::Slider::new(&mut material.shininess, 1.0..=255.0)
                    .step_by(1.0)
                    .text("Shininess"),
            );
        });
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(self.pipelines.get(self.wireframe));
        self.objects.bind(render_pass, 0, 0);
        self.lighting.bind(render_pass, 1, 0);
        self.floor.draw(render_pass);
    }
}
