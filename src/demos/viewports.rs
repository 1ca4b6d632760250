//! The same cube seen through an orthographic and a perspective viewport.

use cgmath::{Deg, Matrix4, Point3};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::VertexColor},
    flow::Demo,
    geometry::colour_cube,
    pipelines::{
        PipelineOptions, PolygonPipelines,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
    },
    render::{Mesh, Viewport},
    transform::{look_at_origin, ortho, perspective},
    ui,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const LEFT: Viewport = Viewport::new(0.0, 0.0, 400.0, 400.0);
const RIGHT: Viewport = Viewport::new(400.0, 0.0, 400.0, 400.0);
const MAIN: Viewport = Viewport::new(0.0, 0.0, WIDTH as f32, HEIGHT as f32);

const WHITE: [f32; 3] = [1.0; 3];
const DIVIDERS: [VertexColor; 4] = [
    VertexColor::new([0.0, 400.0, 0.0], WHITE),
    VertexColor::new([800.0, 400.0, 0.0], WHITE),
    VertexColor::new([400.0, 0.0, 0.0], WHITE),
    VertexColor::new([400.0, 400.0, 0.0], WHITE),
];

const LEFT_SLOT: u32 = 0;
const RIGHT_SLOT: u32 = 1;
const MAIN_SLOT: u32 = 2;

pub struct Viewports {
    cube_pipelines: PolygonPipelines,
    line_pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    cube: Mesh,
    dividers: Mesh,
    pub wireframe: bool,
    pub distance: f32,
    /// Degrees about the Y axis.
    pub rotation: f32,
}

impl Demo for Viewports {
    fn config() -> DemoConfig {
        DemoConfig::new("Multiple Viewports", WIDTH, HEIGHT)
            .with_depth_test()
            .with_tweak_bar(250.0, 120.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 3, "Viewport Uniforms");
        let cube_pipelines = PolygonPipelines::new(ctx, |polygon_mode| {
            mk_basic_pipeline(
                ctx,
                &uniforms,
                ColorSource::Interleaved,
                PipelineOptions {
                    label: "Cube Pipeline",
                    polygon_mode,
                    ..Default::default()
                },
            )
        });
        let line_pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Interleaved,
            PipelineOptions {
                label: "Divider Pipeline",
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
        );
        let (vertices, indices) = colour_cube();

        Ok(Self {
            cube_pipelines,
            line_pipeline,
            uniforms,
            cube: Mesh::indexed(&ctx.device, "Cube", &vertices, &indices),
            dividers: Mesh::new(&ctx.device, "Dividers", &DIVIDERS),
            wireframe: false,
            distance: 3.0,
            rotation: 0.0,
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        let view = look_at_origin(Point3::new(0.0, 0.0, self.distance));
        let model = Matrix4::from_angle_y(Deg(self.rotation));

        let left = ortho(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
        let right = perspective(Deg(45.0), RIGHT.aspect(), 0.1, 10.0);
        let main = ortho(0.0, WIDTH as f32, 0.0, HEIGHT as f32, 0.1, 10.0);

        self.uniforms.write_all(
            &ctx.queue,
            &[
                DrawUniform::new(left * view * model),
                DrawUniform::new(right * view * model),
                DrawUniform::new(main * view),
            ],
        );
    }

    fn on_ui(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui::group(ui, "Controls", |ui| {
            ui::wireframe(ui, ctx, &mut self.wireframe);
            ui.add(
                egui::Slider::new(&mut self.distance, 1.0..=10.0)
                    .step_by(0.1)
                    .text("Camera Distance"),
            );
            ui.add(
                egui::Slider::new(&mut self.rotation, -360.0..=360.0)
                    .step_by(1.0)
                    .text("Rotation"),
            );
        });
    }

    fn on_render(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(self.cube_pipelines.get(self.wireframe));
        for (viewport, slot) in [(LEFT, LEFT_SLOT), (RIGHT, RIGHT_SLOT)] {
            if viewport.apply(ctx, render_pass) {
                self.uniforms.bind(render_pass, 0, slot);
                self.cube.draw(render_pass);
            }
        }

        if MAIN.apply(ctx, render_pass) {
            render_pass.set_pipeline(&self.line_pipeline);
            self.uniforms.bind(render_pass, 0, MAIN_SLOT);
            self.dividers.draw(render_pass);
        }
    }
}
