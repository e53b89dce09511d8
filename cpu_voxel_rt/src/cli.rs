//! Command line arguments for the voxel ray tracer.

use clap::{ArgAction, Parser};
use voxel_common::camera_controller::CameraController;
use voxel_common::parameters::{ParameterError, RenderParameters};

/// Fly through a procedurally filled voxel volume, rendered on the cpu.
///
/// W/S move forward and back, A/D strafe, Q/E move down and up, the mouse
/// turns and Esc quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "cpu_voxel_rt", version, disable_help_flag = true)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, short = 'w', default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, short = 'h', default_value_t = 600)]
    pub height: u32,

    /// Open a borderless fullscreen window
    #[arg(long, short = 'f')]
    pub fullscreen: bool,

    /// Side length of the cubic volume, in voxels (1 to 1290)
    #[arg(long, default_value_t = 16)]
    pub dim: i32,

    /// Seed for the pillar layout; random when omitted
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Distance moved per frame while a movement key is held
    #[arg(long, default_value_t = CameraController::DEFAULT_SPEED)]
    pub speed: f32,

    /// Radians turned per pixel of mouse motion
    #[arg(long, default_value_t = CameraController::DEFAULT_SENSITIVITY)]
    pub sensitivity: f32,

    /// Let vertical mouse motion pitch the camera. Pitch turns about the
    /// world x axis, so after a heading turn it also rolls the view
    #[arg(long)]
    pub mouse_pitch: bool,

    /// Render rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    pub fn render_parameters(&self) -> Result<RenderParameters, ParameterError> {
        let camera_controller = CameraController::new(self.speed, self.sensitivity)
            .with_mouse_pitch(self.mouse_pitch);
        Ok(RenderParameters::new(camera_controller, (self.width, self.height), self.dim)?
            .with_fullscreen(self.fullscreen)
            .with_parallel(!self.sequential)
            .with_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["cpu_voxel_rt"]).unwrap();
        assert_eq!((cli.width, cli.height, cli.dim), (800, 600, 16));
        assert!(!cli.fullscreen);
        assert_eq!(cli.seed, None);

        let rp = cli.render_parameters().unwrap();
        assert_eq!(rp.viewport_size(), (800, 600));
        assert!(rp.parallel());
        assert_eq!(rp.camera_controller().speed(), CameraController::DEFAULT_SPEED);
    }

    #[test]
    fn short_flags_include_height() {
        let cli = Cli::try_parse_from(["cpu_voxel_rt", "-w", "1024", "-h", "768", "-f"]).unwrap();
        let rp = cli.render_parameters().unwrap();
        assert_eq!(rp.viewport_size(), (1024, 768));
        assert!(rp.fullscreen());
    }

    #[test]
    fn long_options() {
        let cli = Cli::try_parse_from([
            "cpu_voxel_rt", "--dim", "32", "--seed", "7", "--speed", "0.5", "--sequential",
        ]).unwrap();
        let rp = cli.render_parameters().unwrap();
        assert_eq!(rp.volume_dim(), 32);
        assert_eq!(rp.seed(), Some(7));
        assert!(!rp.parallel());
        assert_eq!(rp.camera_controller().speed(), 0.5);
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let cli = Cli::try_parse_from(["cpu_voxel_rt", "--width", "0"]).unwrap();
        assert_eq!(cli.render_parameters().err(), Some(ParameterError::InvalidViewport(0, 600)));

        let cli = Cli::try_parse_from(["cpu_voxel_rt", "--dim", "0"]).unwrap();
        assert_eq!(cli.render_parameters().err(), Some(ParameterError::InvalidDimension(0)));

        let cli = Cli::try_parse_from(["cpu_voxel_rt", "--dim", "5000"]).unwrap();
        assert_eq!(cli.render_parameters().err(), Some(ParameterError::InvalidDimension(5000)));
    }

    #[test]
    fn help_is_long_only() {
        let err = Cli::try_parse_from(["cpu_voxel_rt", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
