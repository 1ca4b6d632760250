//! A checker textured quad whose texture coordinates are edited live.
//!
//! Coordinates outside [0, 1] repeat the image. R puts them back.

use winit::{event::WindowEvent, keyboard::KeyCode};

use crate::{
    context::{Context, DemoConfig},
    data_structures::{
        texture::{self, SamplerOptions},
        vertex::VertexTex,
    },
    flow::Demo,
    geometry::{reset_tex_coords, textured_quad},
    input::pressed_key,
    pipelines::{PolygonPipelines, texture::mk_texture_pipeline},
    render::Mesh,
    resources::texture::load_texture,
    ui,
};

const IMAGE: &str = "images/check.bmp";

/// Tweak bar label and index into the strip ordered quad of every corner.
const CORNERS: [(&str, usize); 4] = [
    ("Top-left", 2),
    ("Top-right", 3),
    ("Bottom-left", 0),
    ("Bottom-right", 1),
];

pub struct TextureCoordinates {
    pipelines: PolygonPipelines,
    bind_group: wgpu::BindGroup,
    mesh: Mesh,
    pub quad: [VertexTex; 4],
    pub wireframe: bool,
}

impl TextureCoordinates {
    pub fn reset(&mut self) {
        reset_tex_coords(&mut self.quad);
        log::info!("Texture coordinates reset");
    }
}

impl Demo for TextureCoordinates {
    fn config() -> DemoConfig {
        DemoConfig::new("Texture Coordinates", 800, 800).with_tweak_bar(250.0, 250.0)
    }

    async fn new(ctx: &Context) -> anyhow::Result<Self> {
        let image = load_texture(
            IMAGE,
            true,
            SamplerOptions::default(),
            &ctx.device,
            &ctx.queue,
        )
        .await?;
        let layout = texture::mk_bind_group_layout(&ctx.device);
        let bind_group = image.bind_group(&ctx.device, &layout)?;
        let pipelines = PolygonPipelines::new(ctx, |polygon_mode| {
            mk_texture_pipeline(
                ctx,
                &layout,
                wgpu::PrimitiveTopology::TriangleStrip,
                polygon_mode,
            )
        });
        let quad = textured_quad();

        Ok(Self {
            pipelines,
            bind_group,
            mesh: Mesh::new(&ctx.device, "Textured Quad", &quad),
            quad,
            wireframe: false,
        })
    }

    fn on_window_event(&mut self, _ctx: &Context, event: &WindowEvent) {
        if pressed_key(event) == Some(KeyCode::KeyR) {
            self.reset();
        }
    }

    fn on_update(&mut self, ctx: &Context, _dt: instant::Duration) {
        self.mesh.write(&ctx.queue, &self.quad);
    }

    fn on_ui(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui::group(ui, "Controls", |ui| {
            ui::wireframe(ui, ctx, &mut self.wireframe);
        });
        ui::group(ui, "Texture Coordinates", |ui| {
            for (corner, index) in CORNERS {
                let [s, t] = &mut self.quad[index].tex_coord;
                for (value, axis) in [(s, "S"), (t, "T")] {
                    ui.add(
                        egui::Slider::new(value, -2.0..=2.0)
                            .step_by(0.1)
                            .text(format!("{corner}: {axis}")),
                    );
                }
            }
        });
    }

    fn on_render(&self, _ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(self.pipelines.get(self.wireframe));
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        self.mesh.draw(render_pass);
    }
}
