#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GPUFrameBuffer {
    width: u32,
    height: u32,
    frame: u32,
    _buffer: u32
}

// read by the display shader to unpack the tightly packed rgb buffer
impl GPUFrameBuffer {
    pub fn new(width: u32, height: u32, frame: u32) -> Self {
        Self {
            width,
            height,
            frame,
            _buffer: 0u32
        }
    }
    pub fn into_array(&self) -> [u32; 4] {
        [self.width, self.height, self.frame, self._buffer]
    }
}

// storage buffers are read as u32 words, so the byte length is rounded up
pub fn padded_pixel_bytes(num_pixels: usize) -> usize {
    (num_pixels * 3 + 3) & !3
}
