use thiserror::Error;
use winit::error::{EventLoopError, OsError};
use voxel_common::parameters::ParameterError;
use voxel_common::volume::VolumeError;
use voxel_common::wgpu_state::DisplayError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
    #[error("invalid volume: {0}")]
    Volume(#[from] VolumeError),
}
