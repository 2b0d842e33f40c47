//! Key bindings and input decoding

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::PlayerIntent;

/// Rebindable controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keybinds {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub sprint: KeyCode,
    pub turn_left: KeyCode,
    pub turn_right: KeyCode,
    pub look_up: KeyCode,
    pub look_down: KeyCode,
    pub exit: KeyCode,
    /// Quits from any connected gamepad.
    pub exit_gamepad: GamepadButton,
    pub fire_line: MouseButton,
    pub fire_projectile: MouseButton,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            sprint: KeyCode::ShiftLeft,
            turn_left: KeyCode::ArrowLeft,
            turn_right: KeyCode::ArrowRight,
            look_up: KeyCode::ArrowUp,
            look_down: KeyCode::ArrowDown,
            exit: KeyCode::Escape,
            exit_gamepad: GamepadButton::Select,
            fire_line: MouseButton::Left,
            fire_projectile: MouseButton::Right,
        }
    }
}

impl Keybinds {
    /// Decode this frame's keyboard state into movement intent.
    ///
    /// Jump is edge-triggered so holding the key doesn't bunny-hop.
    pub fn intent(&self, keys: &ButtonInput<KeyCode>, look_delta: Vec2) -> PlayerIntent {
        PlayerIntent {
            forward: keys.pressed(self.forward),
            backward: keys.pressed(self.back),
            left: keys.pressed(self.left),
            right: keys.pressed(self.right),
            turn_left: keys.pressed(self.turn_left),
            turn_right: keys.pressed(self.turn_right),
            look_up: keys.pressed(self.look_up),
            look_down: keys.pressed(self.look_down),
            jump: keys.just_pressed(self.jump),
            sprint: keys.pressed(self.sprint),
            look_delta,
        }
    }
}
