use glam::Vec3;
use crate::camera::Camera;
use crate::volume::VoxelVolume;

/// Turns held keys and pointer motion into one `move_by`/`turn` per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraController {
    amount_forward: f32,
    amount_backward: f32,
    amount_right: f32,
    amount_left: f32,
    amount_up: f32,
    amount_down: f32,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    speed: f32,
    sensitivity: f32,
    mouse_pitch: bool,
}

impl CameraController {
    pub const DEFAULT_SPEED: f32 = 1.0;
    pub const DEFAULT_SENSITIVITY: f32 = 0.01;

    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_forward: 0.0,
            amount_backward: 0.0,
            amount_right: 0.0,
            amount_left: 0.0,
            amount_up: 0.0,
            amount_down: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            speed,
            sensitivity,
            mouse_pitch: false,
        }
    }

    pub fn with_mouse_pitch(mut self, enabled: bool) -> Self {
        self.mouse_pitch = enabled;
        self
    }

    pub fn speed(&self) -> f32 { self.speed }
    pub fn sensitivity(&self) -> f32 { self.sensitivity }

    pub fn process_mouse(&mut self, delta: [f32; 2]) {
        self.rotate_horizontal += delta[0];
        self.rotate_vertical += delta[1];
    }

    pub fn move_forward(&mut self, pressed: bool) {
        self.amount_forward = if pressed { 1.0 } else { 0.0 };
    }

    pub fn move_backward(&mut self, pressed: bool) {
        self.amount_backward = if pressed { 1.0 } else { 0.0 };
    }

    pub fn move_left(&mut self, pressed: bool) {
        self.amount_left = if pressed { 1.0 } else { 0.0 };
    }

    pub fn move_right(&mut self, pressed: bool) {
        self.amount_right = if pressed { 1.0 } else { 0.0 };
    }

    pub fn move_up(&mut self, pressed: bool) {
        self.amount_up = if pressed { 1.0 } else { 0.0 };
    }

    pub fn move_down(&mut self, pressed: bool) {
        self.amount_down = if pressed { 1.0 } else { 0.0 };
    }

    /// (forward, side, vertical) for this frame. Down is world +y.
    pub fn motion(&self) -> (f32, f32, f32) {
        (
            (self.amount_forward - self.amount_backward) * self.speed,
            (self.amount_left - self.amount_right) * self.speed,
            (self.amount_down - self.amount_up) * self.speed,
        )
    }

    /// Applies this frame's turn and motion. A move that would take the camera
    /// outside the volume is undone; returns whether the camera moved.
    pub fn update_camera(&mut self, camera: &mut Camera, volume: &VoxelVolume) -> bool {
        if self.rotate_horizontal != 0.0 || self.rotate_vertical != 0.0 {
            // pointer up is -y on screen, which is world -y as well
            let pitch = if self.mouse_pitch { self.rotate_vertical * self.sensitivity } else { 0.0 };
            camera.turn(-self.rotate_horizontal * self.sensitivity, pitch);
        }
        // pointer motion is consumed every frame, held keys are not
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        let (forward, side, vertical) = self.motion();
        if forward == 0.0 && side == 0.0 && vertical == 0.0 {
            return false;
        }
        let previous = camera.position();
        camera.move_by(forward, side, vertical);
        contain(camera, previous, volume)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED, Self::DEFAULT_SENSITIVITY)
    }
}

// rays must start inside the volume, so a position outside it is reverted
pub fn contain(camera: &mut Camera, previous: Vec3, volume: &VoxelVolume) -> bool {
    if volume.contains(camera.position()) {
        true
    } else {
        camera.set_position(previous);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PortCorner;

    fn setup() -> (Camera, VoxelVolume) {
        let mut camera = Camera::new(800, 600);
        camera.set_position(Vec3::splat(8.0));
        (camera, VoxelVolume::empty(16).unwrap())
    }

    #[test]
    fn held_keys_map_to_signed_axes() {
        let mut controller = CameraController::default();
        controller.move_forward(true);
        controller.move_left(true);
        controller.move_down(true);
        assert_eq!(controller.motion(), (1.0, 1.0, 1.0));

        controller.move_forward(false);
        controller.move_backward(true);
        controller.move_left(false);
        controller.move_right(true);
        controller.move_down(false);
        controller.move_up(true);
        assert_eq!(controller.motion(), (-1.0, -1.0, -1.0));

        controller.move_forward(true);
        assert_eq!(controller.motion().0, 0.0);
    }

    #[test]
    fn speed_scales_motion() {
        let mut controller = CameraController::new(0.25, 0.01);
        controller.move_forward(true);
        assert_eq!(controller.motion(), (0.25, 0.0, 0.0));
    }

    #[test]
    fn forward_key_moves_along_direction() {
        let (mut camera, volume) = setup();
        let mut controller = CameraController::default();
        controller.move_forward(true);

        assert!(controller.update_camera(&mut camera, &volume));
        assert_eq!(camera.position(), Vec3::new(8.0, 8.0, 7.0));
        // keys stay held across frames
        assert!(controller.update_camera(&mut camera, &volume));
        assert_eq!(camera.position(), Vec3::new(8.0, 8.0, 6.0));
    }

    #[test]
    fn leaving_the_volume_reverts_the_move() {
        let (mut camera, volume) = setup();
        camera.set_position(Vec3::new(8.0, 8.0, 0.5));
        let mut controller = CameraController::default();
        controller.move_forward(true);

        assert!(!controller.update_camera(&mut camera, &volume));
        assert_eq!(camera.position(), Vec3::new(8.0, 8.0, 0.5));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let (mut camera, volume) = setup();
        camera.set_position(Vec3::new(8.0, 15.0, 8.0));
        let mut controller = CameraController::default();
        controller.move_down(true);

        assert!(!controller.update_camera(&mut camera, &volume));
        assert_eq!(camera.position().y, 15.0);
    }

    #[test]
    fn mouse_motion_turns_once() {
        let (mut camera, volume) = setup();
        let mut controller = CameraController::default();
        controller.process_mouse([-50.0, 30.0]);
        controller.process_mouse([-107.0, 0.0]);
        controller.update_camera(&mut camera, &volume);

        let mut expected = Camera::new(800, 600);
        expected.turn(1.57, 0.0);
        assert!((camera.direction() - expected.direction()).length() < 1e-5);
        assert_eq!(camera.direction().y, 0.0);

        let before = camera.direction();
        controller.update_camera(&mut camera, &volume);
        assert_eq!(camera.direction(), before);
    }

    #[test]
    fn vertical_motion_pitches_when_enabled() {
        let (mut camera, volume) = setup();
        let mut controller = CameraController::default().with_mouse_pitch(true);
        controller.process_mouse([0.0, -20.0]);
        controller.update_camera(&mut camera, &volume);
        assert!(camera.direction().y < 0.0);
    }

    #[test]
    fn pitch_after_a_heading_turn_rolls_about_world_x() {
        let (mut camera, volume) = setup();
        camera.turn(std::f32::consts::FRAC_PI_2, 0.0);
        let before = camera.port_vector(PortCorner::UpperLeft);

        let mut controller = CameraController::default().with_mouse_pitch(true);
        controller.process_mouse([0.0, -20.0]);
        controller.update_camera(&mut camera, &volume);

        // facing -x, a turn about world x leaves the direction alone
        assert!((camera.direction() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        let after = camera.port_vector(PortCorner::UpperLeft);
        assert!((after.y - before.y).abs() > 0.1);
    }
}
