//! View rotation helpers.
//!
//! The 3D view is a flat projection: points are rotated in data space and
//! their x/y taken as plot coordinates.

use nalgebra::{Matrix3, Vector3};

pub fn rotate_point(x: f64, y: f64, z: f64, rot: &Matrix3<f64>) -> (f64, f64, f64) {
    let v = rot * Vector3::new(x, y, z);
    (v.x, v.y, v.z)
}

/// Incremental view rotation from a mouse drag, yaw about y then pitch
/// about x.
pub fn rotation_from_drag(dx: f64, dy: f64) -> Matrix3<f64> {
    let rot_y = Matrix3::new(
        dx.cos(), 0.0, dx.sin(),
        0.0, 1.0, 0.0,
        -dx.sin(), 0.0, dx.cos(),
    );
    let rot_x = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, dy.cos(), -dy.sin(),
        0.0, dy.sin(), dy.cos(),
    );
    rot_x * rot_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn identity_rotation_is_a_no_op() {
        let (x, y, z) = rotate_point(1.0, -2.0, 3.0, &Matrix3::identity());
        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(y, -2.0);
        assert_relative_eq!(z, 3.0);
    }

    #[test]
    fn zero_drag_is_identity() {
        assert_relative_eq!(rotation_from_drag(0.0, 0.0), Matrix3::identity());
    }

    #[test]
    fn drag_rotation_is_orthonormal() {
        let r = rotation_from_drag(0.3, -0.7);
        assert_relative_eq!(r * r.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn half_turn_yaw_flips_x_and_z() {
        let r = rotation_from_drag(PI, 0.0);
        let (x, y, z) = rotate_point(1.0, 2.0, 3.0, &r);
        assert_relative_eq!(x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(z, -3.0, epsilon = 1e-12);
    }
}
