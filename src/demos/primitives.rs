//! Points, lines and a line loop drawn from one list of positions.

use cgmath::{Matrix4, SquareMatrix};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{
        uniform::UniformArray,
        vertex::{PointInstance, VertexPosition},
    },
    flow::Demo,
    geometry::close_loop,
    pipelines::{
        PipelineOptions,
        basic::{ColorSource, DrawUniform, mk_basic_pipeline},
        point::{PointUniform, draw_points, mk_point_pipeline},
    },
    render::Mesh,
};

#[rustfmt::skip]
const VERTICES: [VertexPosition; 13] = [
    VertexPosition::new(-0.7, 0.8, 0.0),  // point 1
    VertexPosition::new(-0.5, 0.6, 0.0),  // line 1
    VertexPosition::new(-0.6, -0.6, 0.0),
    VertexPosition::new(-0.2, -0.5, 0.0), // point 2
    VertexPosition::new(0.0, -0.4, 0.0),  // point 3
    VertexPosition::new(0.0, 0.5, 0.0),   // line loop
    VertexPosition::new(0.5, 0.6, 0.0),
    VertexPosition::new(0.1, -0.1, 0.0),
    VertexPosition::new(0.3, 0.8, 0.0),
    VertexPosition::new(0.4, 0.0, 0.0),
    VertexPosition::new(0.5, -0.4, 0.0),  // point 4
    VertexPosition::new(-0.4, -0.8, 0.0), // line 2
    VertexPosition::new(0.8, -0.1, 0.0),
];

const POINTS: [usize; 4] = [0, 3, 4, 10];
const POINT_SIZE: f32 = 10.0;

pub struct Primitives {
    line_pipeline: wgpu::RenderPipeline,
    strip_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    uniforms: UniformArray<DrawUniform>,
    point_uniforms: UniformArray<PointUniform>,
    lines: Mesh,
    line_loop: Mesh,
    points: Mesh,
}

impl Demo for Primitives {
    fn config() -> DemoConfig {
        DemoConfig::new("Primitives", 800, 600)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let uniforms = UniformArray::new(&ctx.device, 1, "Primitive Uniforms");
        uniforms.write(&ctx.queue, 0, &DrawUniform::default());
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
        let strip_pipeline = mk_basic_pipeline(
            ctx,
            &uniforms,
            ColorSource::Uniform,
            PipelineOptions {
                label: "Line Strip Pipeline",
                topology: wgpu::PrimitiveTopology::LineStrip,
                ..Default::default()
            },
        );
        let point_pipeline = mk_point_pipeline(ctx, &point_uniforms);

        let points: Vec<PointInstance> = POINTS
            .iter()
            .map(|i| PointInstance::new(VERTICES[*i].position, [1.0; 3]))
            .collect();

        Ok(Self {
            line_pipeline,
            strip_pipeline,
            point_pipeline,
            uniforms,
            point_uniforms,
            lines: Mesh::new(&ctx.device, "Lines", &VERTICES),
            line_loop: Mesh::new(&ctx.device, "Line Loop", &close_loop(&VERTICES[5..10])),
            points: Mesh::new(&ctx.device, "Points", &points),
        })
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        let [width, height] = ctx.size();
        self.point_uniforms.write(
            &ctx.queue,
            0,
            &PointUniform::new(Matrix4::identity(), [width as f32, height as f32], POINT_SIZE),
        );
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.line_pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        self.lines.draw_range(render_pass, 1..3);
        self.lines.draw_range(render_pass, 11..13);

        render_pass.set_pipeline(&self.strip_pipeline);
        self.uniforms.bind(render_pass, 0, 0);
        self.line_loop.draw(render_pass);

        render_pass.set_pipeline(&self.point_pipeline);
        self.point_uniforms.bind(render_pass, 0, 0);
        draw_points(render_pass, self.points.vertex_buffer(), 0..self.points.count());
    }
}
