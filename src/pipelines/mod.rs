//! Render pipeline definitions.
//!
//! - `basic`: unlit geometry coloured by a uniform or per vertex, plus the generic
//!   [`basic::mk_render_pipeline`] every other pipeline is built with
//! - `point`: sized points rendered as instanced quads
//! - `light`: flat, Gouraud, Phong and spot light shading
//! - `texture`: textured geometry

pub mod basic;
pub mod light;
pub mod point;
pub mod texture;

use crate::context::Context;

/// Fixed-function state that differs between the demos' pipelines.
#[derive(Clone, Copy, Debug)]
pub struct PipelineOptions<'a> {
    pub label: &'a str,
    pub topology: wgpu::PrimitiveTopology,
    pub polygon_mode: wgpu::PolygonMode,
    pub vs_entry: &'a str,
    pub fs_entry: &'a str,
}

impl Default for PipelineOptions<'_> {
    fn default() -> Self {
        Self {
            label: "Render Pipeline",
            topology: wgpu::PrimitiveTopology::TriangleList,
            polygon_mode: wgpu::PolygonMode::Fill,
            vs_entry: "vs_main",
            fs_entry: "fs_main",
        }
    }
}

/// A filled pipeline plus, when the adapter can rasterise lines, its wireframe twin.
#[derive(Debug)]
pub struct PolygonPipelines {
    pub fill: wgpu::RenderPipeline,
    pub line: Option<wgpu::RenderPipeline>,
}

impl PolygonPipelines {
    pub fn new(ctx: &Context, build: impl Fn(wgpu::PolygonMode) -> wgpu::RenderPipeline) -> Self {
        let fill = build(wgpu::PolygonMode::Fill);
        let line = if ctx.wireframe_supported {
            Some(build(wgpu::PolygonMode::Line))
        } else {
            None
        };
        Self { fill, line }
    }

    /// The wireframe pipeline if requested and available, the filled one otherwise.
    pub fn get(&self, wireframe: bool) -> &wgpu::RenderPipeline {
        match (&self.line, wireframe) {
            (Some(line), true) => line,
            _ => &self.fill,
        }
    }
}

pub(crate) fn wgsl(label: &'static str, source: &'static str) -> wgpu::ShaderModuleDescriptor<'static> {
    wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    }
}
