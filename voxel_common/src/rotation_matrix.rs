use glam::{Mat3, Vec3};

pub struct RotationMatrix {
    heading_rad: f32,
    pitch_rad: f32,
    roll_rad: f32
}

impl RotationMatrix {
    pub fn new(heading_rad: f32, pitch_rad: f32, roll_rad: f32) -> Self {
        Self {
            heading_rad,
            pitch_rad,
            roll_rad
        }
    }

    // heading turns about world up (y), pitch about x, roll about z
    // with roll at zero this is rot_x(pitch) * rot_y(heading)
    pub fn euler(&self) -> Mat3 {
        let (sin_h, cos_h) = self.heading_rad.sin_cos();
        let (sin_p, cos_p) = self.pitch_rad.sin_cos();
        let (sin_r, cos_r) = self.roll_rad.sin_cos();

        let rows = [
            [cos_r * cos_h - sin_r * sin_p * sin_h, -sin_r * cos_p, cos_r * sin_h + sin_r * sin_p * cos_h],
            [sin_r * cos_h + cos_r * sin_p * sin_h, cos_r * cos_p, sin_r * sin_h - cos_r * sin_p * cos_h],
            [-cos_p * sin_h, sin_p, cos_p * cos_h]
        ];

        // glam stores columns, the rows above are written the way they are read
        Mat3::from_cols_array_2d(&rows).transpose()
    }

    pub fn rotate(&self, v: Vec3) -> Vec3 {
        self.euler() * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).abs().max_element() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn zero_angles_give_identity() {
        assert_eq!(RotationMatrix::new(0.0, 0.0, 0.0).euler(), Mat3::IDENTITY);
    }

    #[test]
    fn heading_matches_rotation_about_y() {
        let h = 0.7;
        let m = RotationMatrix::new(h, 0.0, 0.0).euler();
        let expected = Mat3::from_rotation_y(h);
        assert!(m.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn heading_and_pitch_compose_pitch_after_heading() {
        let (h, p) = (0.4, -0.3);
        let m = RotationMatrix::new(h, p, 0.0).euler();
        let expected = Mat3::from_rotation_x(p) * Mat3::from_rotation_y(h);
        assert!(m.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn positive_heading_turns_forward_toward_negative_x() {
        let v = RotationMatrix::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0)
            .rotate(Vec3::new(0.0, 0.0, -1.0));
        assert_close(v, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn roll_turns_x_toward_y() {
        let v = RotationMatrix::new(0.0, 0.0, std::f32::consts::FRAC_PI_2)
            .rotate(Vec3::X);
        assert_close(v, Vec3::Y);
    }
}
