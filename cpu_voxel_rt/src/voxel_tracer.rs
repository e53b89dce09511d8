use std::sync::Arc;
use wgpu::{BufferAddress, BufferUsages};
use winit::window::Window;
use voxel_common::camera::Camera;
use voxel_common::gpu_buffer::GPUBuffer;
use voxel_common::gpu_structs::{padded_pixel_bytes, GPUFrameBuffer};
use voxel_common::parameters::RenderParameters;
use voxel_common::volume::VoxelVolume;
use voxel_common::wgpu_state::{DisplayError, WgpuState};
use crate::display::DisplayKernel;
use crate::frame_renderer::FrameRenderer;

/// Renders the volume on the cpu and hands each finished frame to the
/// display kernel.
pub struct VoxelTracer {
    wgpu_state: WgpuState,
    image_buffer: GPUBuffer,
    frame_buffer: GPUBuffer,
    display_kernel: DisplayKernel,
    frame_renderer: FrameRenderer,
    render_parameters: RenderParameters,
    frame: u32,
}

impl VoxelTracer {
    pub fn new(window: Arc<Window>,
               max_window_size: u32,
               rp: &RenderParameters) -> Result<Self, DisplayError> {
        let wgpu_state = WgpuState::new(window)?;
        let render_parameters = *rp;
        let (width, height) = render_parameters.viewport_size();

        // sized for the largest monitor so a resize rarely needs a new buffer
        let max_pixels = (max_window_size as usize).max(width as usize * height as usize);
        let image_buffer = Self::create_image_buffer(wgpu_state.device(), max_pixels);

        let frame_buffer = GPUBuffer::new(wgpu_state.device(),
                                          BufferUsages::UNIFORM,
                                          16 as BufferAddress,
                                          1u32,
                                          Some("frame buffer"));

        let display_kernel = DisplayKernel::new(wgpu_state.device(),
                                                &image_buffer,
                                                &frame_buffer,
                                                wgpu_state.surface_config().format);

        let frame_renderer = FrameRenderer::new(width, height);

        Ok(Self {
            wgpu_state,
            image_buffer,
            frame_buffer,
            display_kernel,
            frame_renderer,
            render_parameters,
            frame: 0,
        })
    }

    fn create_image_buffer(device: &wgpu::Device, num_pixels: usize) -> GPUBuffer {
        GPUBuffer::new(device,
                       BufferUsages::STORAGE,
                       padded_pixel_bytes(num_pixels) as BufferAddress,
                       0u32,
                       Some("image buffer"))
    }

    pub fn resize(&mut self, rp: RenderParameters) {
        let (width, height) = rp.viewport_size();
        self.render_parameters = rp;
        self.wgpu_state.resize((width, height));
        self.frame_renderer.resize(width, height);

        let needed = self.frame_renderer.padded_pixels().len() as BufferAddress;
        if needed > self.image_buffer.size() {
            log::debug!("growing image buffer to {} bytes", needed);
            self.image_buffer = Self::create_image_buffer(self.wgpu_state.device(),
                                                          width as usize * height as usize);
            self.display_kernel = DisplayKernel::new(self.wgpu_state.device(),
                                                     &self.image_buffer,
                                                     &self.frame_buffer,
                                                     self.wgpu_state.surface_config().format);
        }
    }

    pub fn run(&mut self, camera: &Camera, volume: &VoxelVolume) -> Result<(), DisplayError> {
        self.render(camera, volume);
        self.present()
    }

    pub fn render(&mut self, camera: &Camera, volume: &VoxelVolume) {
        if self.render_parameters.parallel() {
            self.frame_renderer.render_parallel(camera, volume.voxels(), volume.dim());
        } else {
            self.frame_renderer.render(camera, volume.voxels(), volume.dim());
        }
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn present(&mut self) -> Result<(), DisplayError> {
        let (width, height) = self.frame_renderer.size();
        let gpu_frame_buffer = GPUFrameBuffer::new(width, height, self.frame);
        let queue = self.wgpu_state.queue();
        self.frame_buffer.queue_for_gpu(queue, bytemuck::cast_slice(&gpu_frame_buffer.into_array()));
        self.image_buffer.queue_for_gpu(queue, self.frame_renderer.padded_pixels());

        match self.display_kernel.run(&self.wgpu_state) {
            Err(DisplayError::Texture(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("surface lost or outdated, reconfiguring");
                self.wgpu_state.reconfigure();
                Ok(())
            }
            Err(DisplayError::Texture(wgpu::SurfaceError::Timeout)) => {
                log::warn!("surface timed out, skipping frame {}", self.frame);
                Ok(())
            }
            result => result,
        }
    }
}
