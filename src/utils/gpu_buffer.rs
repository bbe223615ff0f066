use crate::renderer::wgpu_context::WgpuContext;
use wgpu::Buffer;

/// A GPU buffer mirrored by a CPU-side `Vec`.
#[derive(Debug)]
pub struct GpuBuffer<T> {
    data: Vec<T>,
    buffer: wgpu::Buffer,
    usage: wgpu::BufferUsages,
    label: &'static str,
}

impl<T: bytemuck::Pod> GpuBuffer<T> {
    pub fn new(wgpu_context: &WgpuContext, data: Vec<T>, usage: wgpu::BufferUsages, label: &'static str) -> Self {
        let usage = usage | wgpu::BufferUsages::COPY_DST;
        let buffer = Self::allocate(wgpu_context, data.capacity().max(1), usage, label);
        if !data.is_empty() {
            wgpu_context.get_queue().write_buffer(&buffer, 0, bytemuck::cast_slice(&data));
        }
        Self { data, buffer, usage, label }
    }

    /// Creates an empty buffer with room for `capacity` elements.
    pub fn with_capacity(wgpu_context: &WgpuContext, capacity: usize, usage: wgpu::BufferUsages, label: &'static str) -> Self {
        Self::new(wgpu_context, Vec::with_capacity(capacity), usage, label)
    }

    fn allocate(wgpu_context: &WgpuContext, elements: usize, usage: wgpu::BufferUsages, label: &'static str) -> Buffer {
        wgpu_context.get_device().create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (elements * size_of::<T>().max(1)) as u64,
            usage,
            mapped_at_creation: false,
        })
    }

    /// Overwrites the whole content, growing the GPU buffer if it is too small.
    pub fn replace<I: IntoIterator<Item = T>>(&mut self, values: I, wgpu_context: &WgpuContext) {
        self.data.clear();
        self.data.extend(values);

        let needed_bytes = (self.data.len() * size_of::<T>()) as u64;
        if needed_bytes > self.buffer.size() {
            // Old contents are rewritten below, so no copy is needed.
            log::debug!("Growing {} to {} elements", self.label, self.data.len() * 2);
            self.buffer = Self::allocate(wgpu_context, self.data.len() * 2, self.usage, self.label);
        }

        if !self.data.is_empty() {
            wgpu_context.get_queue().write_buffer(&self.buffer, 0, bytemuck::cast_slice(&self.data));
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }
}
