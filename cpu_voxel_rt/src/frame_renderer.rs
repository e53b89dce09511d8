use glam::Vec3;
use rayon::prelude::*;
use voxel_common::camera::{Camera, PortCorner};
use voxel_common::gpu_structs::padded_pixel_bytes;
use voxel_common::ray::Ray;
use voxel_common::traversal::get_intersection;
use voxel_common::voxel::Voxel;

/// Colour written for rays that leave the volume without a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Background {
    Black,
    // -x red, -y green, -z blue
    Directional,
}

impl Background {
    pub fn color(self, direction: Vec3) -> [u8; 3] {
        match self {
            Background::Black => [0, 0, 0],
            Background::Directional => [
                if direction.x < 0.0 { 255 } else { 0 },
                if direction.y < 0.0 { 255 } else { 0 },
                if direction.z < 0.0 { 255 } else { 0 },
            ],
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        if cfg!(feature = "directional-background") {
            Background::Directional
        } else {
            Background::Black
        }
    }
}

// camera snapshot for one frame, shared read-only by every row
#[derive(Copy, Clone)]
struct ViewPort {
    origin: Vec3,
    upper_left: Vec3,
    upper_right: Vec3,
    left_delta: Vec3,
    right_delta: Vec3,
    inv_width: f32,
}

impl ViewPort {
    fn new(camera: &Camera, width: u32, height: u32) -> Self {
        // the only normalisation per frame: rays are interpolated from these
        let normal = |corner| (camera.port_vector(corner) + camera.direction()).normalize();
        let upper_left = normal(PortCorner::UpperLeft);
        let upper_right = normal(PortCorner::UpperRight);
        let lower_left = normal(PortCorner::LowerLeft);
        let lower_right = normal(PortCorner::LowerRight);

        let inv_height = 1.0 / height as f32;
        Self {
            origin: camera.position(),
            upper_left,
            upper_right,
            left_delta: (lower_left - upper_left) * inv_height,
            right_delta: (lower_right - upper_right) * inv_height,
            inv_width: 1.0 / width as f32,
        }
    }

    fn render_row(&self, row: &mut [u8], y: usize, background: Background, volume: &[Voxel], dim: i32) {
        let left_normal = self.upper_left + self.left_delta * y as f32;
        let right_normal = self.upper_right + self.right_delta * y as f32;
        let normal_x_delta = (right_normal - left_normal) * self.inv_width;

        let mut ray = Ray::new(self.origin, left_normal);
        for pixel in row.chunks_exact_mut(3) {
            let collision_info = get_intersection(&ray, volume, dim);
            let color = if collision_info.is_hit() {
                collision_info.voxel.shaded(collision_info.side)
            } else {
                background.color(ray.direction)
            };
            pixel.copy_from_slice(&color);

            ray.direction += normal_x_delta;
        }
    }
}

/// Owns the rgb pixel buffer (3 bytes per pixel, row-major, top row first)
/// and fills it with one ray per pixel.
pub struct FrameRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    background: Background,
}

impl FrameRenderer {
    // a zero sized frame has no rows to split, callers validate the viewport
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        let num_pixels = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![0u8; padded_pixel_bytes(num_pixels)],
            background: Background::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug_assert!(width > 0 && height > 0);
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        let num_pixels = width as usize * height as usize;
        self.pixels = vec![0u8; padded_pixel_bytes(num_pixels)];
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels[..self.frame_len()]
    }

    // whole buffer including the word alignment tail, for upload
    pub fn padded_pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = 3 * (y as usize * self.width as usize + x as usize);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    pub fn render(&mut self, camera: &Camera, volume: &[Voxel], dim: i32) {
        let view = ViewPort::new(camera, self.width, self.height);
        let background = self.background;
        let row_len = self.width as usize * 3;
        let frame_len = self.frame_len();

        for (y, row) in self.pixels[..frame_len].chunks_exact_mut(row_len).enumerate() {
            view.render_row(row, y, background, volume, dim);
        }
    }

    // rows only share the read-only view and volume, each owns its slice
    pub fn render_parallel(&mut self, camera: &Camera, volume: &[Voxel], dim: i32) {
        let view = ViewPort::new(camera, self.width, self.height);
        let background = self.background;
        let row_len = self.width as usize * 3;
        let frame_len = self.frame_len();

        self.pixels[..frame_len]
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| view.render_row(row, y, background, volume, dim));
    }

    fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}
