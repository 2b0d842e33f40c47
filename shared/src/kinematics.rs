//! Per-frame kinematic integration shared by the player and every drawable object.

use bevy::prelude::*;

/// Linear and angular motion state.
///
/// `rotation` and `angular_velocity` pack (yaw, pitch, roll) in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinematics {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
}

impl Kinematics {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Step one frame.
    ///
    /// Position advances with the velocity from the *start* of the frame,
    /// then velocity picks up this frame's acceleration.
    pub fn integrate(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.rotation += self.angular_velocity * dt;
    }
}

/// Negative or non-finite frame times collapse to zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}
