//! Player movement rules and spawn helpers
//!
//! Runs once per rendered frame on the client. Everything here is pure so the
//! same rules can be unit tested without an `App`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kinematics::{sanitize_dt, Kinematics};
use crate::math::{facing, forward, right};
use crate::objects::{GameObject, ModelKind};

/// Standard gravity (m/s^2, negative Y).
pub const GRAVITY: f32 = -9.81;

/// Upward velocity applied on jump (m/s).
pub const JUMP_VELOCITY: f32 = 5.0;

/// Height of the eye above the ground plane; also the landing height.
pub const EYE_HEIGHT: f32 = 1.0;

/// Movement tuning, loadable from the settings file.
///
/// Angles are in degrees here since these values are hand-edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Forward/back speed (units per second).
    pub walk_speed: f32,
    /// Left/right speed. Not affected by sprint.
    pub strafe_speed: f32,
    pub sprint_multiplier: f32,
    /// Keyboard turn/look rate.
    pub turn_rate_degrees: f32,
    /// Mouse look, degrees per pixel of motion.
    pub mouse_degrees_per_pixel: f32,
    /// Look up/down is clamped to +/- this angle.
    pub pitch_limit_degrees: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub eye_height: f32,
    /// Camera pull-back while sprinting (negative = behind the eye).
    pub sprint_zoom: f32,
    /// How fast the sprint zoom eases in/out (units per second).
    pub zoom_rate: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 1.0,
            strafe_speed: 1.0,
            sprint_multiplier: 3.0,
            turn_rate_degrees: 90.0,
            mouse_degrees_per_pixel: 0.05,
            pitch_limit_degrees: 70.0,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            eye_height: EYE_HEIGHT,
            sprint_zoom: -0.15,
            zoom_rate: 1.8,
        }
    }
}

impl MovementTuning {
    /// Reject values the movement rules can't work with.
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("walk_speed", self.walk_speed),
            ("strafe_speed", self.strafe_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("turn_rate_degrees", self.turn_rate_degrees),
            ("mouse_degrees_per_pixel", self.mouse_degrees_per_pixel),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("eye_height", self.eye_height),
            ("sprint_zoom", self.sprint_zoom),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("movement.{name} must be finite, got {value}"));
            }
        }
        let non_negative = [
            ("pitch_limit_degrees", self.pitch_limit_degrees),
            ("zoom_rate", self.zoom_rate),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("movement.{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }
}

/// Projectile spawn tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub line_length: f32,
    pub line_speed: f32,
    pub model_spawn_offset: f32,
    pub model_speed: f32,
    pub model_scale: f32,
    /// Model fired by the projectile button.
    pub model: ModelKind,
    /// Seconds before a spawned object is removed.
    pub lifetime: f32,
    /// Spawned objects below this height are removed.
    pub kill_plane_y: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            line_length: 1.0,
            line_speed: 3.0,
            model_spawn_offset: 0.5,
            model_speed: 10.0,
            model_scale: 4.0,
            model: ModelKind::Bullet,
            lifetime: 30.0,
            kill_plane_y: -100.0,
        }
    }
}

impl ProjectileTuning {
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("line_length", self.line_length),
            ("line_speed", self.line_speed),
            ("model_spawn_offset", self.model_spawn_offset),
            ("model_speed", self.model_speed),
            ("model_scale", self.model_scale),
            ("lifetime", self.lifetime),
            ("kill_plane_y", self.kill_plane_y),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(format!("projectiles.{name} must be finite, got {value}"));
            }
        }
        Ok(())
    }
}

/// Clamp bound that is always usable: bad values collapse to zero.
#[inline]
fn bound(value: f32) -> f32 {
    if value.is_finite() {
        value.abs()
    } else {
        0.0
    }
}

/// One frame of player intent, already decoded from keys and mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    /// Edge-triggered: true only on the frame the key went down.
    pub jump: bool,
    pub sprint: bool,
    /// Accumulated mouse motion in pixels.
    pub look_delta: Vec2,
}

/// The local player's body and view.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub kinematics: Kinematics,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub mid_air: bool,
    pub speed_multiplier: f32,
    /// Camera offset along the look direction.
    pub zoom_offset: f32,
}

impl PlayerState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            kinematics: Kinematics::at(Vec3::new(0.0, tuning.eye_height, 0.0)),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            mid_air: false,
            speed_multiplier: 1.0,
            zoom_offset: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.kinematics.position
    }

    /// Look direction scaled to `distance`.
    pub fn facing(&self, distance: f32) -> Vec3 {
        facing(self.yaw, self.pitch, self.roll, distance)
    }

    /// Where the camera sits (pulled back while sprinting).
    pub fn camera_eye(&self) -> Vec3 {
        self.position() + self.facing(self.zoom_offset)
    }

    /// Point one unit in front of the player.
    pub fn camera_target(&self) -> Vec3 {
        self.position() + self.facing(1.0)
    }

    /// Advance one frame.
    pub fn step(&mut self, intent: &PlayerIntent, tuning: &MovementTuning, dt: f32) {
        let dt = sanitize_dt(dt);

        // --- Sprint ---
        self.speed_multiplier = if intent.sprint {
            tuning.sprint_multiplier
        } else {
            1.0
        };

        // --- Look ---
        let turn = tuning.turn_rate_degrees.to_radians() * dt;
        if intent.turn_left {
            self.yaw += turn;
        }
        if intent.turn_right {
            self.yaw -= turn;
        }
        if intent.look_up {
            self.pitch += turn;
        }
        if intent.look_down {
            self.pitch -= turn;
        }
        let per_pixel = tuning.mouse_degrees_per_pixel.to_radians();
        self.yaw -= intent.look_delta.x * per_pixel;
        self.pitch -= intent.look_delta.y * per_pixel;

        let limit = bound(tuning.pitch_limit_degrees.to_radians());
        self.pitch = self.pitch.clamp(-limit, limit);

        // --- Walk ---
        let mut walk = Vec3::ZERO;
        let stride = tuning.walk_speed * self.speed_multiplier * dt;
        if intent.forward {
            walk += forward(self.yaw, stride);
        }
        if intent.backward {
            walk -= forward(self.yaw, stride);
        }
        let strafe = tuning.strafe_speed * dt;
        if intent.right {
            walk += right(self.yaw, strafe);
        }
        if intent.left {
            walk -= right(self.yaw, strafe);
        }
        self.kinematics.position += walk;

        // --- Jump ---
        if intent.jump && !self.mid_air {
            self.mid_air = true;
            self.kinematics.velocity.y = tuning.jump_velocity;
            self.kinematics.acceleration.y = tuning.gravity;
        }

        // --- Integrate + ground clamp ---
        self.kinematics.integrate(dt);
        if self.kinematics.position.y < tuning.eye_height {
            self.kinematics.position.y = tuning.eye_height;
            self.kinematics.velocity.y = 0.0;
            self.kinematics.acceleration.y = 0.0;
            self.mid_air = false;
        }

        // --- Sprint zoom ---
        let target_zoom = if intent.sprint { tuning.sprint_zoom } else { 0.0 };
        let max_step = bound(tuning.zoom_rate) * dt;
        let delta = target_zoom - self.zoom_offset;
        self.zoom_offset += delta.clamp(-max_step, max_step);
    }

    /// Red line shot from the camera eye along the look direction.
    pub fn fire_line(&self, tuning: &ProjectileTuning) -> GameObject {
        let origin = self.camera_eye();
        let mut line = GameObject::line(
            origin,
            origin + self.facing(tuning.line_length),
            Color::srgb(1.0, 0.0, 0.0),
        )
        .with_lifetime(tuning.lifetime);
        line.kinematics.velocity = self.facing(tuning.line_speed);
        line
    }

    /// Ballistic model projectile, launched from just in front of the eye.
    pub fn fire_projectile(&self, projectiles: &ProjectileTuning, movement: &MovementTuning) -> GameObject {
        let kinematics = Kinematics::at(self.position() + self.facing(projectiles.model_spawn_offset))
            .with_velocity(self.facing(projectiles.model_speed))
            .with_acceleration(Vec3::new(0.0, movement.gravity, 0.0))
            .with_rotation(Vec3::new(self.yaw, self.pitch, self.roll));
        GameObject::model(kinematics, projectiles.model, projectiles.model_scale)
            .with_lifetime(projectiles.lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Drawable;

    const DT: f32 = 1.0 / 60.0;

    fn player() -> (PlayerState, MovementTuning) {
        let tuning = MovementTuning::default();
        (PlayerState::new(&tuning), tuning)
    }

    #[test]
    fn test_spawns_at_eye_height() {
        let (p, _) = player();
        assert_eq!(p.position(), Vec3::new(0.0, 1.0, 0.0));
        assert!(!p.mid_air);
    }

    #[test]
    fn test_walk_forward_and_sprint() {
        let (mut p, tuning) = player();
        let intent = PlayerIntent { forward: true, ..default() };
        p.step(&intent, &tuning, 1.0);
        assert!(p.position().abs_diff_eq(Vec3::new(0.0, 1.0, -1.0), 1e-5));

        let sprint = PlayerIntent { forward: true, sprint: true, ..default() };
        p.step(&sprint, &tuning, 1.0);
        assert_eq!(p.speed_multiplier, 3.0);
        assert!(p.position().abs_diff_eq(Vec3::new(0.0, 1.0, -4.0), 1e-5));
    }

    #[test]
    fn test_sprint_does_not_speed_up_strafe() {
        let (mut p, tuning) = player();
        let intent = PlayerIntent { right: true, sprint: true, ..default() };
        p.step(&intent, &tuning, 1.0);
        assert!(p.position().abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn test_turn_keys() {
        let (mut p, tuning) = player();
        let intent = PlayerIntent { turn_left: true, ..default() };
        p.step(&intent, &tuning, 1.0);
        assert!((p.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_look_and_pitch_clamp() {
        let (mut p, tuning) = player();
        let intent = PlayerIntent { look_delta: Vec2::new(20.0, -20.0), ..default() };
        p.step(&intent, &tuning, DT);
        // 20 px * 0.05 deg = 1 degree
        assert!((p.yaw + 1.0_f32.to_radians()).abs() < 1e-5);
        assert!((p.pitch - 1.0_f32.to_radians()).abs() < 1e-5);

        let big = PlayerIntent { look_delta: Vec2::new(0.0, -100_000.0), ..default() };
        p.step(&big, &tuning, DT);
        assert!((p.pitch - 70.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_jump_arc_and_landing() {
        let (mut p, tuning) = player();
        let jump = PlayerIntent { jump: true, ..default() };
        p.step(&jump, &tuning, DT);
        assert!(p.mid_air);
        assert!(p.position().y > 1.0);

        // Holding jump mid-air does nothing.
        let vy = p.kinematics.velocity.y;
        p.step(&jump, &tuning, 0.0);
        assert_eq!(p.kinematics.velocity.y, vy);

        for _ in 0..120 {
            p.step(&PlayerIntent::default(), &tuning, DT);
        }
        assert!(!p.mid_air);
        assert_eq!(p.position().y, 1.0);
        assert_eq!(p.kinematics.velocity.y, 0.0);
        assert_eq!(p.kinematics.acceleration.y, 0.0);
    }

    #[test]
    fn test_sprint_zoom_eases() {
        let (mut p, tuning) = player();
        let sprint = PlayerIntent { sprint: true, ..default() };
        p.step(&sprint, &tuning, DT);
        assert!(p.zoom_offset < 0.0 && p.zoom_offset > -0.15);

        for _ in 0..60 {
            p.step(&sprint, &tuning, DT);
        }
        assert!((p.zoom_offset + 0.15).abs() < 1e-5);
        assert!(p.camera_eye().z > p.position().z);

        for _ in 0..60 {
            p.step(&PlayerIntent::default(), &tuning, DT);
        }
        assert_eq!(p.zoom_offset, 0.0);
        assert_eq!(p.camera_eye(), p.position());
    }

    #[test]
    fn test_fire_line() {
        let (p, _) = player();
        let line = p.fire_line(&ProjectileTuning::default());
        let (a, b, color) = line.line_endpoints().unwrap();
        assert_eq!(a, p.camera_eye());
        assert!(b.abs_diff_eq(p.camera_target(), 1e-5));
        assert_eq!(color, Color::srgb(1.0, 0.0, 0.0));
        assert!(line.kinematics.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-5));
        assert_eq!(line.kinematics.acceleration, Vec3::ZERO);
    }

    #[test]
    fn test_fire_line_starts_behind_player_while_sprinting() {
        let (mut p, _) = player();
        p.zoom_offset = -0.15;
        let line = p.fire_line(&ProjectileTuning::default());
        let (a, _, _) = line.line_endpoints().unwrap();
        assert!(a.abs_diff_eq(p.camera_eye(), 1e-5));
        assert!((a.distance(p.position()) - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_fire_projectile_uses_configured_model() {
        let (p, tuning) = player();
        let projectiles = ProjectileTuning {
            model: ModelKind::BeachBall,
            ..default()
        };
        let shot = p.fire_projectile(&projectiles, &tuning);
        assert!(matches!(shot.drawable, Drawable::Model { model: ModelKind::BeachBall, .. }));
    }

    #[test]
    fn test_fire_projectile() {
        let (mut p, tuning) = player();
        p.yaw = 0.5;
        let shot = p.fire_projectile(&ProjectileTuning::default(), &tuning);
        assert!(matches!(
            shot.drawable,
            Drawable::Model { model: ModelKind::Bullet, scale } if scale == 4.0
        ));
        assert!((shot.kinematics.velocity.length() - 10.0).abs() < 1e-4);
        assert_eq!(shot.kinematics.acceleration, Vec3::new(0.0, GRAVITY, 0.0));
        assert_eq!(shot.kinematics.rotation.x, 0.5);
        assert!(shot.kinematics.position.abs_diff_eq(p.position() + p.facing(0.5), 1e-5));
    }

    #[test]
    fn test_negative_limits_do_not_panic() {
        let tuning = MovementTuning {
            pitch_limit_degrees: -10.0,
            zoom_rate: -1.0,
            ..default()
        };
        let mut p = PlayerState::new(&tuning);
        let intent = PlayerIntent {
            sprint: true,
            look_delta: Vec2::new(0.0, -400.0),
            ..default()
        };
        p.step(&intent, &tuning, DT);
        // Bounds are taken by magnitude.
        assert!((p.pitch - 10.0_f32.to_radians()).abs() < 1e-5);
        assert!(p.zoom_offset < 0.0);

        let nan = MovementTuning {
            pitch_limit_degrees: f32::NAN,
            zoom_rate: f32::NAN,
            ..default()
        };
        p.step(&intent, &nan, DT);
        assert_eq!(p.pitch, 0.0);
        assert!(p.zoom_offset.is_finite());
    }

    #[test]
    fn test_validate_rejects_bad_tuning() {
        assert!(MovementTuning::default().validate().is_ok());
        assert!(ProjectileTuning::default().validate().is_ok());

        let negative_zoom = MovementTuning { zoom_rate: -1.0, ..default() };
        assert!(negative_zoom.validate().unwrap_err().contains("zoom_rate"));

        let negative_pitch = MovementTuning { pitch_limit_degrees: -10.0, ..default() };
        assert!(negative_pitch.validate().unwrap_err().contains("pitch_limit_degrees"));

        let nan_gravity = MovementTuning { gravity: f32::NAN, ..default() };
        assert!(nan_gravity.validate().is_err());

        let bad_shot = ProjectileTuning { lifetime: f32::INFINITY, ..default() };
        assert!(bad_shot.validate().unwrap_err().contains("lifetime"));
    }

    #[test]
    fn test_tuning_fills_missing_fields() {
        let tuning: MovementTuning = ron::from_str("(walk_speed: 2.0)").unwrap();
        assert_eq!(tuning.walk_speed, 2.0);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
    }
}
