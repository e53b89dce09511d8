use wgpu::{BindGroupEntry, BindGroupLayoutEntry, BindingType, Buffer, BufferAddress, BufferBindingType, BufferUsages, Device, Queue, ShaderStages};

pub struct GPUBuffer {
    buffer: Buffer,
    usage: BufferUsages,
    binding_idx: u32,
}

impl GPUBuffer {
    pub fn new(device: &Device, usage: BufferUsages, size: BufferAddress, binding_idx: u32, label: Option<&str>)
               -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label,
            size,
            usage: usage | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            usage,
            binding_idx
        }
    }

    pub fn size(&self) -> BufferAddress {
        self.buffer.size()
    }

    // data must be a multiple of four bytes and fit the buffer
    pub fn queue_for_gpu(&self, queue: &Queue, data: &[u8]) {
        debug_assert!(data.len() as BufferAddress <= self.size());
        debug_assert_eq!(data.len() % 4, 0);
        queue.write_buffer(&self.buffer, 0, data);
    }

    pub fn layout(&self, visibility: ShaderStages, read_only: bool) -> BindGroupLayoutEntry {
        let buffer_binding_type = if self.usage.contains(BufferUsages::STORAGE) {
            BufferBindingType::Storage { read_only }
        } else {
            BufferBindingType::Uniform
        };
        BindGroupLayoutEntry {
            binding: self.binding_idx,
            visibility,
            ty: BindingType::Buffer {
                ty: buffer_binding_type,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }

    pub fn binding(&self) -> BindGroupEntry<'_> {
        BindGroupEntry {
            binding: self.binding_idx,
            resource: self.buffer.as_entire_binding(),
        }
    }
}
