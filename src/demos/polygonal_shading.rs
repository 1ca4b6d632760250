//! One sphere, three reflection models side by side.
//!
//! The upper right viewport shades flat, the lower left one per vertex
//! (Gouraud) and the lower right one per fragment (Phong).

use cgmath::{Deg, Matrix4, Point3};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{
        light::{Light, LightingUniform, Material, ObjectUniform},
        uniform::UniformArray,
    },
    flow::Demo,
    pipelines::{
        PolygonPipelines,
        light::{ShadingModel, mk_light_pipeline},
    },
    render::{Mesh, Viewport},
    resources::mesh::load_obj_or_sphere,
    transform::{look_at_origin, perspective},
    ui,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const VIEWPOINT: [f32; 3] = [0.0, 0.0, 3.0];

const FLAT: Viewport = Viewport::new(400.0, 300.0, 400.0, 300.0);
const GOURAUD: Viewport = Viewport::new(0.0, 0.0, 400.0, 300.0);
const PHONG: Viewport = Viewport::new(400.0, 0.0, 400.0, 300.0);

const VIEWPORTS: [(Viewport, ShadingModel); 3] = [
    (FLAT, ShadingModel::Flat),
    (GOURAUD, ShadingModel::Gouraud),
    (PHONG, ShadingModel::Phong),
];

pub struct PolygonalShading {
    /// In the order of [`VIEWPORTS`].
    pipelines: [PolygonPipelines; 3],
    objects: UniformArray<ObjectUniform>,
    lighting: UniformArray<LightingUniform>,
    sphere: Mesh,
    pub light: Light,
    pub material: Material,
    pub wireframe: bool,
    /// Degrees about the Y axis.
    pub rotation: f32,
}

impl Demo for PolygonalShading {
    fn config() -> DemoConfig {
        DemoConfig::new("Polygonal Shading", WIDTH, HEIGHT)
            .with_depth_test()
            .with_tweak_bar(250.0, 220.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let objects = UniformArray::new(&ctx.device, 1, "Sphere Uniforms");
        let lighting = UniformArray::new(&ctx.device, 1, "Lighting Uniforms");
        let pipelines = VIEWPORTS.map(|(_, model)| {
            PolygonPipelines::new(ctx, |polygon_mode| {
                mk_light_pipeline(
                    ctx,
                    &objects,
                    &lighting,
                    model,
                    wgpu::PrimitiveTopology::TriangleList,
                    polygon_mode,
                )
            })
        });

        let mesh = load_obj_or_sphere("models/sphere.obj").await;
        let sphere = Mesh::indexed(&ctx.device, "Sphere", &mesh.vertices, &mesh.indices);

        Ok(Self {
            pipelines,
            objects,
            lighting,
            sphere,
            light: Light {
                position: [0.0, 0.0, 4.0],
                ambient: [1.0; 3],
                diffuse: [0.0, 0.5, 1.0],
                specular: [0.0, 0.5, 1.0],
                ..Default::default()
            },
            material: Material {
                ambient: [0.4; 3],
                diffuse: [0.2, 0.7, 1.0],
                specular: [0.2, 0.7, 1.0],
                shininess: 40.0,
            },
            wireframe: false,
            rotation: 0.0,
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        // Every viewport is 400x300, so they share one projection.
        let view_projection = perspective(Deg(45.0), FLAT.aspect(), 0.1, 10.0)
            * look_at_origin(Point3::from(VIEWPOINT));
        let model = Matrix4::from_angle_y(Deg(self.rotation));

        self.objects
            .write(&ctx.queue, 0, &ObjectUniform::new(view_projection, model));
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
            ui.add(
                egui::Slider::new(&mut self.rotation, -360.0..=360.0)
                    .step_by(1.0)
                    .text("RotationY"),
            );
        });
        ui::group(ui, "Light", |ui| {
            ui::vec3_sliders(ui, "Pos:", &mut self.light.position, -5.0..=5.0, 0.1);
        });
    }

    fn on_render(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        for ((viewport, _), pipelines) in VIEWPORTS.iter().zip(&self.pipelines) {
            if viewport.apply(ctx, render_pass) {
                render_pass.set_pipeline(pipelines.get(self.wireframe));
                self.objects.bind(render_pass, 0, 0);
                self.lighting.bind(render_pass, 1, 0);
                self.sphere.draw(render_pass);
            }
        }
    }
}
