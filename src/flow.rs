//! Demo lifecycle and the application event loop.
//!
//! A demo is a type implementing [`Demo`]. [`run`] opens its window, builds the
//! GPU [`Context`] from [`Demo::config`], constructs the demo and then drives
//! the frame loop until the window closes or Escape is pressed outside the
//! tweak bar.
//!
//! # Lifecycle
//!
//! Each frame runs these steps in order:
//! 1. Window events are offered to the tweak bar, then to [`InputState`](crate::input::InputState)
//!    and [`Demo::on_window_event`] unless the tweak bar consumed them
//! 2. [`Demo::on_update`] with the measured frame time
//! 3. [`Demo::on_ui`] builds the tweak bar
//! 4. [`Demo::on_render`] records the scene into a pass that clears colour and depth
//! 5. The tweak bar is drawn on top and the frame is presented

use std::{iter, sync::Arc};

use anyhow::Context as _;
use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    context::{Context, DemoConfig},
    input::is_exit_request,
    ui::Gui,
};

/// A self-contained demo program.
#[allow(async_fn_in_trait)]
pub trait Demo: Sized {
    /// Window and context settings. Called once before anything else.
    fn config() -> DemoConfig;

    /// Create the GPU resources of the demo. Errors abort the program.
    async fn new(ctx: &Context) -> anyhow::Result<Self>;

    /// Window events the tweak bar did not consume.
    fn on_window_event(&mut self, _ctx: &Context, _event: &WindowEvent) {}

    /// Advance the simulation and upload per-frame data.
    fn on_update(&mut self, _ctx: &Context, _dt: Duration) {}

    /// Widgets of the tweak bar. Only called when the config has one.
    fn on_ui(&mut self, _ctx: &Context, _ui: &mut egui::Ui) {}

    /// Record the draw calls of the scene. The pass is already cleared.
    fn on_render(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>);
}

/// Frame rate and frame time averaged over roughly one second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    frames: u32,
    elapsed: Duration,
    fps: f32,
    frame_time: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            frames: 0,
            elapsed: Duration::ZERO,
            fps: 60.0,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl FrameStats {
    const WINDOW: Duration = Duration::from_secs(1);

    /// Account for one frame that took `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= Self::WINDOW {
            let seconds = self.elapsed.as_secs_f32();
            self.fps = self.frames as f32 / seconds;
            self.frame_time = seconds / self.frames as f32;
            self.frames = 0;
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Average frame time in seconds.
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }
}

struct Running<D> {
    ctx: Context,
    gui: Option<Gui>,
    demo: D,
    last_frame: Instant,
}

pub struct App<D> {
    runtime: tokio::runtime::Runtime,
    config: DemoConfig,
    running: Option<Running<D>>,
    error: Option<anyhow::Error>,
}

impl<D: Demo> App<D> {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime")?;
        Ok(Self {
            runtime,
            config: D::config(),
            running: None,
            error: None,
        })
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create the window")?,
        );

        let config = &self.config;
        let (ctx, demo) = self.runtime.block_on(async {
            let ctx = Context::new(window.clone(), config).await?;
            let demo = D::new(&ctx)
                .await
                .with_context(|| format!("Failed to initialise \"{}\"", config.title))?;
            anyhow::Ok((ctx, demo))
        })?;
        let gui = config.tweak_bar.map(|_| Gui::new(&ctx, &window));

        log::info!("Started \"{}\"", config.title);
        window.request_redraw();
        self.running = Some(Running {
            ctx,
            gui,
            demo,
            last_frame: Instant::now(),
        });
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.error = Some(error);
        event_loop.exit();
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };
        let Some(window) = running.ctx.window.clone() else {
            return;
        };

        let consumed = match &mut running.gui {
            Some(gui) => gui.on_window_event(&window, &event),
            None => false,
        };
        // releases always reach the input state so no key stays held
        let released = matches!(
            event,
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    state: ElementState::Released,
                    ..
                },
                ..
            } | WindowEvent::MouseInput {
                state: ElementState::Released,
                ..
            }
        );
        if !consumed || released {
            running.ctx.input.handle(&event);
        }
        if !consumed {
            running.demo.on_window_event(&running.ctx, &event);
        }

        if is_exit_request(&event, consumed) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => running.ctx.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                window.request_redraw();

                let now = Instant::now();
                let dt = now - running.last_frame;
                running.last_frame = now;

                match running.frame(&window, dt, self.config.tweak_bar) {
                    Ok(()) => {}
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = window.inner_size();
                        running.ctx.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

impl<D: Demo> Running<D> {
    fn frame(
        &mut self,
        window: &Window,
        dt: Duration,
        tweak_bar: Option<[f32; 2]>,
    ) -> Result<(), wgpu::SurfaceError> {
        let Running { ctx, gui, demo, .. } = self;
        ctx.stats.advance(dt);
        let ctx: &Context = ctx;
        demo.on_update(ctx, dt);

        let ui_output = match (gui.as_mut(), tweak_bar) {
            (Some(gui), Some(size)) => Some(gui.run(window, |egui_ctx| {
                egui::Window::new("User Interface")
                    .default_size(size)
                    .show(egui_ctx, |ui| demo.on_ui(ctx, ui));
            })),
            _ => None,
        };

        let Some(surface) = &ctx.surface else {
            return Ok(());
        };
        let output = surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        encode_scene(ctx, demo, &mut encoder, &view);
        let ui_commands = match (gui.as_mut(), ui_output) {
            (Some(gui), Some(ui_output)) => gui.paint(ctx, &mut encoder, &view, ui_output),
            _ => Vec::new(),
        };

        ctx.queue
            .submit(ui_commands.into_iter().chain(iter::once(encoder.finish())));
        window.pre_present_notify();
        output.present();
        Ok(())
    }
}

/// Clear the target and let the demo record its draw calls.
pub(crate) fn encode_scene<D: Demo>(
    ctx: &Context,
    demo: &D,
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Scene Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(ctx.clear_colour),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: ctx.depth_texture.as_ref().map(|depth| {
            wgpu::RenderPassDepthStencilAttachment {
                view: &depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }
        }),
        occlusion_query_set: None,
        timestamp_writes: None,
    });
    demo.on_render(ctx, &mut render_pass);
}

pub fn run<D: Demo>() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new().context("Failed to create an event loop")?;
    let mut app = App::<D>::new()?;
    event_loop
        .run_app(&mut app)
        .context("The event loop terminated abnormally")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Render `frames` frames of a demo without a window and read the last one back.
///
/// Every frame calls [`Demo::on_update`] with a zero frame time before drawing.
#[cfg(feature = "integration-tests")]
pub fn render_offscreen<D: Demo>(frames: u32) -> anyhow::Result<image::RgbaImage> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let config = D::config();
        let ctx = Context::headless(&config).await?;
        let mut demo = D::new(&ctx).await?;
        let [width, height] = ctx.size();

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ctx.config.format,
            usage: ctx.config.usage,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        for _ in 0..frames.max(1) {
            demo.on_update(&ctx, Duration::ZERO);
            let mut encoder = ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Offscreen Encoder"),
                });
            encode_scene(&ctx, &demo, &mut encoder, &view);
            ctx.queue.submit(iter::once(encoder.finish()));
        }

        let u32_size = std::mem::size_of::<u32>() as u32;
        let unpadded_row = u32_size * width;
        let padded_row = unpadded_row.div_ceil(wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
            * wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let output_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            size: (padded_row * height) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            label: Some("Offscreen Readback"),
            mapped_at_creation: false,
        });
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Readback Encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &output_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            texture.size(),
        );
        ctx.queue.submit(iter::once(encoder.finish()));

        let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
        let buffer_slice = output_buffer.slice(..);
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            tx.send(result).ok();
        });
        ctx.device
            .poll(wgpu::PollType::Wait)
            .context("Waiting for the readback failed")?;
        rx.receive()
            .await
            .context("The readback channel closed")??;

        let data = buffer_slice.get_mapped_range();
        let pixels: Vec<u8> = data
            .chunks(padded_row as usize)
            .flat_map(|row| &row[..unpadded_row as usize])
            .copied()
            .collect();
        drop(data);
        output_buffer.unmap();

        image::RgbaImage::from_raw(width, height, pixels)
            .context("Readback has an unexpected size")
    })
}
