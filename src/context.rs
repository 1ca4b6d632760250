//! Window and GPU context shared by every demo.
//!
//! A [`Context`] owns the wgpu device and queue, the surface configuration and
//! the depth buffer, plus the small amount of per-window state the demos read
//! (input, frame statistics). It is built from a demo's [`DemoConfig`] either
//! for a window ([`Context::new`]) or without one ([`Context::headless`]).

use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{data_structures::texture, flow::FrameStats, input::InputState};

/// Grey used by nearly every demo as background.
pub const DEFAULT_CLEAR_COLOUR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

/// Static description of a demo window.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub title: &'static str,
    /// Window size in physical pixels. Viewports are laid out against this size.
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    pub depth_test: bool,
    pub resizable: bool,
    /// Initial size of the tweak bar; `None` hides it.
    pub tweak_bar: Option<[f32; 2]>,
}

impl DemoConfig {
    pub fn new(title: &'static str, width: u32, height: u32) -> Self {
        Self {
            title,
            width,
            height,
            clear_colour: DEFAULT_CLEAR_COLOUR,
            depth_test: false,
            resizable: false,
            tweak_bar: None,
        }
    }

    pub fn with_clear_colour(mut self, clear_colour: wgpu::Color) -> Self {
        self.clear_colour = clear_colour;
        self
    }

    pub fn with_depth_test(mut self) -> Self {
        self.depth_test = true;
        self
    }

    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    pub fn with_tweak_bar(mut self, width: f32, height: f32) -> Self {
        self.tweak_bar = Some([width, height]);
        self
    }
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Option<Arc<Window>>,
    pub(crate) surface: Option<wgpu::Surface<'static>>,
    pub(crate) depth_texture: Option<texture::Texture>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub clear_colour: wgpu::Color,
    /// Whether the adapter can rasterise polygons as lines.
    pub wireframe_supported: bool,
    pub input: InputState,
    pub stats: FrameStats,
    design_size: [u32; 2],
}

impl Context {
    pub async fn new(window: Arc<Window>, demo: &DemoConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup for \"{}\"", demo.title);
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create a surface for the window")?;
        let (adapter, device, queue, wireframe_supported) =
            request_device(&instance, Some(&surface)).await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colours are written as-is, like a default GL framebuffer, so prefer a linear format.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface is not compatible with the selected adapter")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = demo
            .depth_test
            .then(|| texture::Texture::create_depth_texture(&device, [config.width, config.height], "depth_texture"));

        Ok(Self {
            window: Some(window),
            surface: Some(surface),
            depth_texture,
            device,
            queue,
            config,
            clear_colour: demo.clear_colour,
            wireframe_supported,
            input: InputState::default(),
            stats: FrameStats::default(),
            design_size: [demo.width, demo.height],
        })
    }

    /// A context without window or surface. Frames are rendered into textures of
    /// the demo's configured size, which is what the image tests read back.
    pub async fn headless(demo: &DemoConfig) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let (_, device, queue, wireframe_supported) = request_device(&instance, None).await?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            format: wgpu::TextureFormat::Rgba8Unorm,
            width: demo.width.max(1),
            height: demo.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        let depth_texture = demo
            .depth_test
            .then(|| texture::Texture::create_depth_texture(&device, [config.width, config.height], "depth_texture"));

        Ok(Self {
            window: None,
            surface: None,
            depth_texture,
            device,
            queue,
            config,
            clear_colour: demo.clear_colour,
            wireframe_supported,
            input: InputState::default(),
            stats: FrameStats::default(),
            design_size: [demo.width, demo.height],
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
        if self.depth_texture.is_some() {
            self.depth_texture = Some(texture::Texture::create_depth_texture(
                &self.device,
                [width, height],
                "depth_texture",
            ));
        }
    }

    /// Current render target size in pixels.
    pub fn size(&self) -> [u32; 2] {
        [self.config.width, self.config.height]
    }

    /// The size the demo was laid out for, see [`DemoConfig::width`].
    pub fn design_size(&self) -> [u32; 2] {
        self.design_size
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_texture
            .as_ref()
            .map(|_| texture::Texture::DEPTH_FORMAT)
    }
}

async fn request_device(
    instance: &wgpu::Instance,
    surface: Option<&wgpu::Surface<'_>>,
) -> anyhow::Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue, bool)> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: surface,
            force_fallback_adapter: false,
        })
        .await
        .context("No suitable GPU adapter found")?;
    log::info!("Using adapter {:?}", adapter.get_info().name);

    let wireframe_supported = adapter
        .features()
        .contains(wgpu::Features::POLYGON_MODE_LINE);
    if !wireframe_supported {
        log::warn!("Adapter cannot draw polygons as lines, wireframe toggles fall back to filled polygons");
    }

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: if wireframe_supported {
                wgpu::Features::POLYGON_MODE_LINE
            } else {
                wgpu::Features::empty()
            },
            required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .context("Failed to create the GPU device")?;

    Ok((adapter, device, queue, wireframe_supported))
}
