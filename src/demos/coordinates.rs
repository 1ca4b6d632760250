//! Normalised device coordinates: axes, a 0.1 grid and a movable point.

use cgmath::{Matrix4, SquareMatrix};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{uniform::UniformArray, vertex::PointInstance},
    flow::Demo,
    geometry::{axes, grid},
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
        point::{PointUniform, draw_points, mk_point_pipeline},
    },
    render::Mesh,
    ui,
};

const AXES_SLOT: u32 = 0;
const GRID_SLOT: u32 = 1;

pub struct Coordinates {
    line_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    point_uniforms: UniformArray<PointUniform>,
    axes: Mesh,
    grid: Mesh,
    point: Mesh,
    pub position: [f32; 2],
    pub color: [f32; 3],
    pub point_size: u32,
    pub show_axes: bool,
    pub show_grid: bool,
}

impl Demo for Coordinates {
    fn config() -> DemoConfig {
        DemoConfig::new("Coordinates", 800, 600)
            .resizable()
            .with_tweak_bar(220.0, 300.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 2, "Line Uniforms");
        uniforms.write(&ctx.queue, AXES_SLOT, &DrawUniform::default().with_color([0.8; 3]));
        uniforms.write(&ctx.queue, GRID_SLOT, &DrawUniform::default().with_color([0.4; 3]));
        let point_uniforms = UniformArray::new(&ctx.device, 1, "Point Uniforms");

        let line_pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Uniform,
            PipelineOptions {
                label: "Line Pipeline",
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
        );
        let point_pipeline = mk_point_pipeline(ctx, &point_uniforms);

        Ok(Self {
            line_pipeline,
            point_pipeline,
            uniforms,
            point_uniforms,
            axes: Mesh::new(&ctx.device, "Axes", &axes()),
            grid: Mesh::new(&ctx.device, "Grid", &grid()),
            point: Mesh::new(&ctx.device, "Point", &[PointInstance::default()]),
            position: [0.0; 2],
            color: [1.0, 0.0, 0.0],
            point_size: 10,
            show_axes: true,
            show_grid: true,
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        let [width, height] = ctx.size();
        self.point_uniforms.write(
            &ctx.queue,
            0,
            &PointUniform::new(
                Matrix4::identity(),
                [width as f32, height as f32],
                self.point_size as f32,
            ),
        );
        let centre = [self.position[0], self.position[1], 0.0];
        self.point
            .write(&ctx.queue, &[PointInstance::new(centre, self.color)]);
    }

    fn on_ui(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui::group(ui, "Cursor", |ui| {
            let cursor = ctx.input.cursor;
            ui.label(format!("Coord: x {}", cursor.x as i32));
            ui.label(format!("Coord: y {}", cursor.y as i32));
        });
        ui::group(ui, "Position", |ui| {
            for (value, label) in self.position.iter_mut().zip(["Pos: x", "Pos: y"]) {
                ui.add(egui::Slider::new(value, -1.0..=1.0).step_by(0.01).text(label));
            }
        });
        ui::group(ui, "Display", |ui| {
            ui.checkbox(&mut self.show_axes, "Axes");
            ui.checkbox(&mut self.show_grid, "Grid");
            ui.add(egui::Slider::new(&mut self.point_size, 1..=50).text("Point Size"));
            ui::colour(ui, "Point Color", &mut self.color);
        });
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.line_pipeline);
        if self.show_axes {
            self.uniforms.bind(render_pass, 0, AXES_SLOT);
            self.axes.draw(render_pass);
        }
        if self.show_grid {
            self.uniforms.bind(render_pass, 0, GRID_SLOT);
            self.grid.draw(render_pass);
        }

        render_pass.set_pipeline(&self.point_pipeline);
        self.point_uniforms.bind(render_pass, 0, 0);
        draw_points(render_pass, self.point.vertex_buffer(), 0..1);
    }
}
