use glam::{Mat3, Vec3};
use crate::rotation_matrix::RotationMatrix;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortCorner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl PortCorner {
    pub const ALL: [PortCorner; 4] = [
        PortCorner::UpperLeft,
        PortCorner::UpperRight,
        PortCorner::LowerLeft,
        PortCorner::LowerRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A pinhole camera described by a direction and the four corners of its
/// view port.
///
/// The corners are offsets relative to the camera, lying in the view plane;
/// a ray through a corner is `corner + direction`, which places the port one
/// unit in front of the camera. That fixes the horizontal field of view at 90
/// degrees. World +y points toward the bottom of the port.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    port: [Vec3; 4],
    orientation: Mat3,
}

impl Camera {
    pub const UP_VECTOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            direction: Self::FORWARD,
            port: [Vec3::ZERO; 4],
            orientation: Mat3::IDENTITY,
        };
        camera.set_port_vectors(viewport_width, viewport_height);
        camera
    }

    // horizontal extent is [-1, 1], vertical [-ratio, ratio]
    pub fn set_port_vectors(&mut self, viewport_width: u32, viewport_height: u32) {
        let ratio = viewport_height as f32 / viewport_width as f32;
        let corners = [
            Vec3::new(-1.0, -ratio, 0.0),
            Vec3::new(1.0, -ratio, 0.0),
            Vec3::new(-1.0, ratio, 0.0),
            Vec3::new(1.0, ratio, 0.0),
        ];
        if self.orientation == Mat3::IDENTITY {
            self.port = corners;
        } else {
            self.port = corners.map(|c| self.orientation * c);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn port_vector(&self, corner: PortCorner) -> Vec3 {
        self.port[corner.index()]
    }

    // the corners are rotated together with the direction so both keep
    // describing the same orientation
    pub fn turn(&mut self, heading: f32, pitch: f32) {
        let m = RotationMatrix::new(heading, pitch, 0.0).euler();
        for corner in self.port.iter_mut() {
            *corner = m * *corner;
        }
        self.direction = (m * self.direction).normalize();
        self.orientation = m * self.orientation;
    }

    // sideways motion is perpendicular to world up and the view direction,
    // not the camera's own right axis
    pub fn move_by(&mut self, forward: f32, side: f32, up: f32) {
        self.position += self.direction * forward + Self::UP_VECTOR * up;
        self.position += Self::UP_VECTOR.cross(self.direction) * side;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).abs().max_element() < eps, "{a} != {b}");
    }

    #[test]
    fn port_corners_follow_aspect_ratio() {
        let camera = Camera::new(800, 600);
        let ratio = 600.0 / 800.0;

        let ul = camera.port_vector(PortCorner::UpperLeft);
        let ur = camera.port_vector(PortCorner::UpperRight);
        let ll = camera.port_vector(PortCorner::LowerLeft);
        let lr = camera.port_vector(PortCorner::LowerRight);

        assert_eq!((ul.x, ul.y), (-1.0, -ratio));
        assert_eq!((ur.x, ur.y), (1.0, -ratio));
        assert_eq!((ll.x, ll.y), (-1.0, ratio));
        assert_eq!((lr.x, lr.y), (1.0, ratio));
    }

    #[test]
    fn starts_at_origin_looking_down_negative_z() {
        let camera = Camera::new(640, 480);
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn zero_turn_changes_nothing() {
        let mut camera = Camera::new(800, 600);
        camera.turn(0.3, 0.0);
        let before = camera;
        camera.turn(0.0, 0.0);

        assert_close(camera.direction(), before.direction(), 1e-7);
        for corner in PortCorner::ALL {
            assert_eq!(camera.port_vector(corner), before.port_vector(corner));
        }
    }

    #[test]
    fn heading_round_trip() {
        let mut camera = Camera::new(800, 600);
        let start = camera;
        camera.turn(0.8, 0.0);
        assert!((camera.direction() - start.direction()).length() > 0.1);
        camera.turn(-0.8, 0.0);

        assert_close(camera.direction(), start.direction(), 1e-5);
        for corner in PortCorner::ALL {
            assert_close(camera.port_vector(corner), start.port_vector(corner), 1e-5);
        }
    }

    #[test]
    fn pitch_round_trip() {
        let mut camera = Camera::new(800, 600);
        camera.turn(1.1, 0.0);
        let start = camera;
        camera.turn(0.0, 0.4);
        camera.turn(0.0, -0.4);
        assert_close(camera.direction(), start.direction(), 1e-5);
    }

    #[test]
    fn positive_heading_turns_toward_negative_x() {
        let mut camera = Camera::new(800, 600);
        camera.turn(std::f32::consts::FRAC_PI_2, 0.0);
        assert_close(camera.direction(), Vec3::new(-1.0, 0.0, 0.0), 1e-6);
        assert!((camera.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn move_uses_world_up_cross_direction_for_side() {
        let mut camera = Camera::new(800, 600);
        camera.set_position(Vec3::splat(8.0));
        camera.move_by(1.0, 0.0, 0.0);
        assert_eq!(camera.position(), Vec3::new(8.0, 8.0, 7.0));

        camera.move_by(0.0, 1.0, 0.0);
        assert_eq!(camera.position(), Vec3::new(7.0, 8.0, 7.0));

        camera.move_by(0.0, 0.0, -2.0);
        assert_eq!(camera.position(), Vec3::new(7.0, 6.0, 7.0));
    }

    #[test]
    fn side_motion_while_pitched_stays_horizontal() {
        let mut camera = Camera::new(800, 600);
        camera.turn(0.0, 0.5);
        camera.move_by(0.0, 1.0, 0.0);
        let p = camera.position();
        assert_eq!(p.y, 0.0);
        // shorter than a unit step because the direction is tilted
        assert!(p.length() < 1.0);
    }

    #[test]
    fn resize_keeps_orientation() {
        let mut camera = Camera::new(800, 600);
        camera.turn(0.6, 0.0);
        camera.set_port_vectors(800, 400);

        let mut expected = Camera::new(800, 400);
        expected.turn(0.6, 0.0);
        for corner in PortCorner::ALL {
            assert_close(camera.port_vector(corner), expected.port_vector(corner), 1e-6);
        }
    }
}
