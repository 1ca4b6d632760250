//! Draw helpers shared by the demos.
//!
//! # Key types
//!
//! - [`Viewport`] is a rectangle of the window in bottom-left origin pixels
//! - [`Mesh`] is a vertex buffer with an optional index buffer
//! - [`GrowableBuffer`] is a vertex or instance buffer that grows as elements are pushed

use std::{mem, ops::Range};

use wgpu::util::DeviceExt;

use crate::context::Context;

/// A rectangle of the render target.
///
/// Coordinates are pixels of the demo's configured window size with the origin in
/// the lower left corner. They are scaled to the actual surface size and flipped
/// to wgpu's top-left origin when applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0.0 {
            return 1.0;
        }
        self.width / self.height
    }

    /// `[x, y, width, height]` in surface pixels with the origin in the upper left
    /// corner, clipped to the surface. `None` if nothing of the rectangle is visible.
    ///
    /// # Arguments
    ///
    /// * `design` is the size the rectangle was laid out for
    /// * `surface` is the size of the render target
    pub fn to_surface(&self, design: [u32; 2], surface: [u32; 2]) -> Option<[f32; 4]> {
        let scale_x = surface[0] as f32 / design[0].max(1) as f32;
        let scale_y = surface[1] as f32 / design[1].max(1) as f32;
        let (surface_w, surface_h) = (surface[0] as f32, surface[1] as f32);

        let left = (self.x * scale_x).max(0.0);
        let right = ((self.x + self.width) * scale_x).min(surface_w);
        let top = (surface_h - (self.y + self.height) * scale_y).max(0.0);
        let bottom = (surface_h - self.y * scale_y).min(surface_h);

        if right <= left || bottom <= top {
            return None;
        }
        Some([left, top, right - left, bottom - top])
    }

    /// Restrict the following draws to this rectangle. Returns false if it is not
    /// visible, callers should then skip their draws.
    pub fn apply(&self, ctx: &Context, render_pass: &mut wgpu::RenderPass<'_>) -> bool {
        match self.to_surface(ctx.design_size(), ctx.size()) {
            Some([x, y, width, height]) => {
                render_pass.set_viewport(x, y, width, height, 0.0, 1.0);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug)]
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl Mesh {
    pub fn new<V: bytemuck::Pod>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Self {
        Self {
            vertex_buffer: mk_vertex_buffer(device, label, vertices),
            index_buffer: None,
            count: vertices.len() as u32,
        }
    }

    pub fn indexed<V: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer: mk_vertex_buffer(device, label, vertices),
            index_buffer: Some(index_buffer),
            count: indices.len() as u32,
        }
    }

    /// Number of vertices, or indices for an indexed mesh.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    /// Overwrite the vertices from the start of the buffer.
    pub fn write<V: bytemuck::Pod>(&self, queue: &wgpu::Queue, vertices: &[V]) {
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        self.draw_range(render_pass, 0..self.count);
    }

    /// Draw a sub range of the vertices (or indices) in slot 0.
    pub fn draw_range(&self, render_pass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        if range.is_empty() {
            return;
        }
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(index_buffer) => {
                render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(range, 0, 0..1);
            }
            None => render_pass.draw(range, 0..1),
        }
    }
}

fn mk_vertex_buffer<V: bytemuck::Pod>(device: &wgpu::Device, label: &str, vertices: &[V]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} Vertex Buffer")),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// CPU side elements mirrored into a vertex buffer that is reallocated with
/// twice the capacity whenever it runs full.
#[derive(Debug)]
pub struct GrowableBuffer<V> {
    elements: Vec<V>,
    buffer: wgpu::Buffer,
    capacity: usize,
    /// Number of elements already uploaded.
    synced: usize,
    label: String,
}

impl<V: bytemuck::Pod> GrowableBuffer<V> {
    pub fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            elements: Vec::with_capacity(capacity),
            buffer: Self::allocate(device, label, capacity),
            capacity,
            synced: 0,
            label: label.to_string(),
        }
    }

    fn allocate(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * mem::size_of::<V>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn push(&mut self, element: V) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Upload the elements pushed since the last call.
    pub fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.elements.len() > self.capacity {
            while self.capacity < self.elements.len() {
                self.capacity *= 2;
            }
            log::debug!("Growing {} to {} elements", self.label, self.capacity);
            self.buffer = Self::allocate(device, &self.label, self.capacity);
            self.synced = 0;
        }
        if self.synced < self.elements.len() {
            queue.write_buffer(
                &self.buffer,
                (self.synced * mem::size_of::<V>()) as wgpu::BufferAddress,
                bytemuck::cast_slice(&self.elements[self.synced..]),
            );
            self.synced = self.elements.len();
        }
    }
}
