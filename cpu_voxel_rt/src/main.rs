mod app;
mod cli;
mod display;
mod error;
mod frame_renderer;
mod voxel_tracer;

use clap::Parser;
use voxel_common::volume::VoxelVolume;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::cli::Cli;
use crate::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    let render_parameters = cli.render_parameters()?;
    log::info!("viewport {:?}, fullscreen {}, parallel rows {}",
               render_parameters.viewport_size(),
               render_parameters.fullscreen(),
               render_parameters.parallel());

    let volume = VoxelVolume::demo(render_parameters.volume_dim(), render_parameters.seed())?;
    log::info!("total voxel volume: {}, in bytes {}", volume.len(), volume.size_in_bytes());

    let event_loop = EventLoop::new()?;

    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(volume, render_parameters);
    event_loop.run_app(&mut app)?;
    app.into_result()
}
