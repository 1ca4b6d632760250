//! The tweak bar: an egui window drawn on top of the scene.
//!
//! [`Gui`] glues egui to winit (input) and wgpu (painting). The free functions
//! are widget groups several demos share.

use std::ops::RangeInclusive;

use winit::{event::WindowEvent, window::Window};

use crate::{context::Context, flow::FrameStats};

pub struct Gui {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Gui {
    pub fn new(ctx: &Context, window: &Window) -> Self {
        let egui_ctx = egui::Context::default();
        let max_texture_side = ctx.device.limits().max_texture_dimension_2d as usize;
        let state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(max_texture_side),
        );
        let renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1, false);

        Self {
            ctx: egui_ctx,
            state,
            renderer,
        }
    }

    /// Returns true if the event was meant for the tweak bar only.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn run(&mut self, window: &Window, run_ui: impl FnMut(&egui::Context)) -> egui::FullOutput {
        let raw_input = self.state.take_egui_input(window);
        let mut output = self.ctx.run(raw_input, run_ui);
        let platform_output = std::mem::take(&mut output.platform_output);
        self.state.handle_platform_output(window, platform_output);
        output
    }

    /// Record the egui draw calls into `view` without clearing it.
    ///
    /// Returns the command buffers egui prepared for its own buffer uploads, they
    /// have to be submitted before `encoder`.
    pub fn paint(
        &mut self,
        ctx: &Context,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        output: egui::FullOutput,
    ) -> Vec<wgpu::CommandBuffer> {
        let pixels_per_point = output.pixels_per_point;
        let paint_jobs = self.ctx.tessellate(output.shapes, pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: ctx.size(),
            pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(&ctx.device, &ctx.queue, *id, delta);
        }
        let commands = self.renderer.update_buffers(
            &ctx.device,
            &ctx.queue,
            encoder,
            &paint_jobs,
            &screen,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Tweak Bar Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();
            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
        commands
    }
}

/// A named, initially open group of widgets.
pub fn group(ui: &mut egui::Ui, name: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::CollapsingHeader::new(name)
        .default_open(true)
        .show(ui, add_contents);
}

/// Read-only frame rate and frame time.
pub fn frame_stats(ui: &mut egui::Ui, stats: &FrameStats) {
    group(ui, "Frame Stats", |ui| {
        ui.label(format!("Frame Rate: {:.1} fps", stats.fps()));
        ui.label(format!("Frame Time: {:.2} ms", stats.frame_time() * 1000.0));
    });
}

/// One slider per component, labelled `"{label} x"`, `"{label} y"` and `"{label} z"`.
pub fn vec3_sliders(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut [f32; 3],
    range: RangeInclusive<f32>,
    step: f64,
) {
    for (component, axis) in value.iter_mut().zip(["x", "y", "z"]) {
        ui.add(
            egui::Slider::new(component, range.clone())
                .step_by(step)
                .text(format!("{label} {axis}")),
        );
    }
}

pub fn colour(ui: &mut egui::Ui, label: &str, value: &mut [f32; 3]) {
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(value);
        ui.label(label);
    });
}

/// The wireframe toggle, disabled if the adapter cannot draw lines.
pub fn wireframe(ui: &mut egui::Ui, ctx: &Context, wireframe: &mut bool) {
    ui.add_enabled(
        ctx.wireframe_supported,
        egui::Checkbox::new(wireframe, "Wireframe"),
    );
}
