use glam::Vec3;
use thiserror::Error;
use crate::camera_controller::CameraController;
use crate::volume::VoxelVolume;

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("viewport must be at least 1x1, got {0}x{1}")]
    InvalidViewport(u32, u32),
    #[error("volume dimension must be in 1..={max}, got {0}", max = VoxelVolume::MAX_DIM)]
    InvalidDimension(i32),
    #[error("move speed must be finite, got {0}")]
    InvalidSpeed(f32),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderParameters {
    camera_controller: CameraController,
    viewport_size: (u32, u32),
    fullscreen: bool,
    parallel: bool,
    volume_dim: i32,
    seed: Option<u64>,
    resized: bool,
}

impl RenderParameters {
    pub fn new(camera_controller: CameraController,
               viewport_size: (u32, u32),
               volume_dim: i32) -> Result<Self, ParameterError> {
        if viewport_size.0 == 0 || viewport_size.1 == 0 {
            return Err(ParameterError::InvalidViewport(viewport_size.0, viewport_size.1));
        }
        if !VoxelVolume::valid_dim(volume_dim) {
            return Err(ParameterError::InvalidDimension(volume_dim));
        }
        if !camera_controller.speed().is_finite() {
            return Err(ParameterError::InvalidSpeed(camera_controller.speed()));
        }
        Ok(Self {
            camera_controller,
            viewport_size,
            fullscreen: false,
            parallel: true,
            volume_dim,
            seed: None,
            resized: false,
        })
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn fullscreen(&self) -> bool { self.fullscreen }
    pub fn parallel(&self) -> bool { self.parallel }
    pub fn volume_dim(&self) -> i32 { self.volume_dim }
    pub fn seed(&self) -> Option<u64> { self.seed }

    // the middle of the volume, where the camera starts
    pub fn start_position(&self) -> Vec3 {
        Vec3::splat(self.volume_dim as f32 / 2.0)
    }

    pub fn resized(&self) -> bool {
        self.resized
    }

    // a minimised window reports 0x0, which is ignored
    pub fn set_viewport(&mut self, size: (u32, u32)) {
        if size.0 == 0 || size.1 == 0 || size == self.viewport_size {
            return;
        }
        self.viewport_size = size;
        self.resized = true;
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport_size
    }

    pub fn reset(&mut self) {
        self.resized = false;
    }

    pub fn camera_controller(&self) -> &CameraController {
        &self.camera_controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_viewport_and_volume() {
        let cc = CameraController::default();
        assert_eq!(RenderParameters::new(cc, (0, 600), 16).err(),
                   Some(ParameterError::InvalidViewport(0, 600)));
        assert_eq!(RenderParameters::new(cc, (800, 600), 0).err(),
                   Some(ParameterError::InvalidDimension(0)));
        assert_eq!(RenderParameters::new(cc, (800, 600), 1291).err(),
                   Some(ParameterError::InvalidDimension(1291)));
        assert!(RenderParameters::new(cc, (800, 600), VoxelVolume::MAX_DIM).is_ok());
        assert!(matches!(RenderParameters::new(CameraController::new(f32::NAN, 0.01), (8, 8), 4),
                         Err(ParameterError::InvalidSpeed(_))));
    }

    #[test]
    fn resize_is_tracked_until_reset() {
        let mut rp = RenderParameters::new(CameraController::default(), (800, 600), 16).unwrap();
        rp.set_viewport((0, 0));
        assert!(!rp.resized());
        rp.set_viewport((1024, 768));
        assert!(rp.resized());
        assert_eq!(rp.viewport_size(), (1024, 768));
        rp.reset();
        assert!(!rp.resized());
    }

    #[test]
    fn camera_starts_in_the_middle() {
        let rp = RenderParameters::new(CameraController::default(), (800, 600), 16).unwrap();
        assert_eq!(rp.start_position(), Vec3::splat(8.0));
        assert!(rp.parallel());
        assert!(!rp.fullscreen());
    }
}
