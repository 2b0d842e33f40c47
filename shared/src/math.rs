//! Camera-relative vector helpers
//!
//! In Bevy: +X is right, +Y is up, -Z is forward. Angles are radians.

use bevy::prelude::*;

/// Horizontal forward vector for the given yaw. Ignores pitch and roll.
pub fn forward(yaw: f32, distance: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Vec3::NEG_Z * distance
}

/// Horizontal right vector for the given yaw.
pub fn right(yaw: f32, distance: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * Vec3::X * distance
}

/// Full look direction (yaw, then pitch, then roll) scaled to `distance`.
pub fn facing(yaw: f32, pitch: f32, roll: f32, distance: f32) -> Vec3 {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll) * Vec3::NEG_Z * distance
}

/// Convert a packed (yaw, pitch, roll) triple into a rotation.
pub fn euler_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::YXZ, rotation.x, rotation.y, rotation.z)
}

/// Angle of `direction` above the horizontal plane.
///
/// Returns `None` for a zero or non-finite vector.
pub fn elevation(direction: Vec3) -> Option<f32> {
    let dir = direction.try_normalize()?;
    Some(dir.y.clamp(-1.0, 1.0).asin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_forward_at_zero_yaw_is_neg_z() {
        assert!(forward(0.0, 2.0).abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPS));
        assert!(right(0.0, 1.0).abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_positive_yaw_turns_left() {
        // A quarter turn to the left faces -X.
        assert!(forward(FRAC_PI_2, 1.0).abs_diff_eq(Vec3::NEG_X, EPS));
        assert!(right(FRAC_PI_2, 1.0).abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn test_forward_ignores_look_angles() {
        let f = forward(0.7, 3.0);
        assert_eq!(f.y, 0.0);
        assert!((f.length() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_facing_pitch_looks_up() {
        let dir = facing(0.0, 0.5, 0.0, 1.0);
        assert!(dir.y > 0.0);
        assert!((dir.length() - 1.0).abs() < EPS);
        assert!((dir.y - 0.5_f32.sin()).abs() < EPS);
    }

    #[test]
    fn test_facing_roll_does_not_change_direction() {
        let a = facing(0.3, 0.2, 0.0, 1.0);
        let b = facing(0.3, 0.2, 1.1, 1.0);
        assert!(a.abs_diff_eq(b, EPS));
    }

    #[test]
    fn test_facing_matches_forward_when_level() {
        assert!(facing(1.2, 0.0, 0.0, 4.0).abs_diff_eq(forward(1.2, 4.0), EPS));
    }

    #[test]
    fn test_elevation_of_zero_vector_is_none() {
        assert_eq!(elevation(Vec3::ZERO), None);
        assert_eq!(elevation(Vec3::splat(f32::NAN)), None);
    }

    #[test]
    fn test_elevation_of_straight_up() {
        let angle = elevation(Vec3::new(0.0, 10.0, 0.0)).unwrap();
        assert!((angle - FRAC_PI_2).abs() < EPS);
        let level = elevation(Vec3::new(3.0, 0.0, -4.0)).unwrap();
        assert!(level.abs() < EPS);
    }

    #[test]
    fn test_euler_quat_uses_yaw_pitch_roll_order() {
        let q = euler_quat(Vec3::new(0.4, -0.2, 0.0));
        let dir = q * Vec3::NEG_Z;
        assert!(dir.abs_diff_eq(facing(0.4, -0.2, 0.0, 1.0), EPS));
    }
}
