//! Uniform buffers with one slot per draw call.
//!
//! Queue writes are applied before a submitted command buffer runs, never between
//! two draws of the same render pass. Scenes that draw the same mesh several times
//! with different matrices therefore keep one slot per draw in a single buffer
//! and select the slot with a dynamic offset when binding.

use std::{marker::PhantomData, mem, num::NonZeroU64};

/// Round `size` up to the next multiple of `alignment`.
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

#[derive(Debug)]
pub struct UniformArray<T> {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    layout: wgpu::BindGroupLayout,
    stride: u64,
    capacity: u32,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformArray<T> {
    pub fn new(device: &wgpu::Device, capacity: u32, label: &str) -> Self {
        let capacity = capacity.max(1);
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = aligned_stride(mem::size_of::<T>() as u64, alignment);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let layout = mk_bind_group_layout::<T>(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(mem::size_of::<T>() as u64),
                }),
            }],
            label: Some(label),
        });

        Self {
            buffer,
            bind_group,
            layout,
            stride,
            capacity,
            _marker: PhantomData,
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn write(&self, queue: &wgpu::Queue, slot: u32, value: &T) {
        if slot >= self.capacity {
            log::warn!(
                "Uniform slot {} is out of range (capacity {}), write ignored",
                slot,
                self.capacity
            );
            return;
        }
        queue.write_buffer(
            &self.buffer,
            slot as u64 * self.stride,
            bytemuck::bytes_of(value),
        );
    }

    pub fn write_all(&self, queue: &wgpu::Queue, values: &[T]) {
        values
            .iter()
            .enumerate()
            .for_each(|(slot, value)| self.write(queue, slot as u32, value));
    }

    /// Bind `slot` at bind group index `group`.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>, group: u32, slot: u32) {
        let offset = (slot.min(self.capacity - 1) as u64 * self.stride) as wgpu::DynamicOffset;
        render_pass.set_bind_group(group, &self.bind_group, &[offset]);
    }
}

pub fn mk_bind_group_layout<T>(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: NonZeroU64::new(mem::size_of::<T>() as u64),
            },
            count: None,
        }],
        label: Some("uniform_array_bind_group_layout"),
    })
}
