//! Player input handling
//!
//! Keyboard and mouse are decoded once per frame into `InputState`; gameplay
//! systems only ever read that resource.

use bevy::app::AppExit;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use shared::PlayerIntent;

use crate::settings::GameSettings;
use crate::states::GameState;

/// Client-side input state for the current frame
#[derive(Resource, Default, Debug)]
pub struct InputState {
    pub intent: PlayerIntent,
    /// Line shot requested this frame.
    pub fire_line: bool,
    /// Model projectile requested this frame.
    pub fire_projectile: bool,
}

/// Decode keys, buttons and mouse motion into this frame's intent.
pub fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    settings: Res<GameSettings>,
    mut input_state: ResMut<InputState>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }

    let binds = &settings.keybinds;
    input_state.intent = binds.intent(&keyboard, delta);
    input_state.fire_line = mouse_button.just_pressed(binds.fire_line);
    input_state.fire_projectile = mouse_button.just_pressed(binds.fire_projectile);
}

/// Quit on the exit key or the gamepad exit button.
pub fn handle_exit_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    settings: Res<GameSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    let binds = &settings.keybinds;
    let from_gamepad = gamepads
        .iter()
        .any(|gamepad| gamepad.just_pressed(binds.exit_gamepad));
    if keyboard.just_pressed(binds.exit) || from_gamepad {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}

/// Pause as soon as the window stops being focused.
pub fn pause_on_focus_loss(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if !window.focused {
        next_state.set(GameState::Paused);
    }
}

/// Click back into a focused window to resume.
pub fn resume_on_click(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if window.focused && mouse_button.just_pressed(MouseButton::Left) {
        next_state.set(GameState::Playing);
    }
}

/// Lock and hide the cursor for mouse look.
pub fn grab_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
) {
    set_cursor_captured(&windows, &mut cursor_opts, true);
}

pub fn release_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
) {
    set_cursor_captured(&windows, &mut cursor_opts, false);
}

fn set_cursor_captured(
    windows: &Query<Entity, With<PrimaryWindow>>,
    cursor_opts: &mut Query<&mut CursorOptions>,
    captured: bool,
) {
    let Ok(window_entity) = windows.single() else {
        return;
    };
    if let Ok(mut cursor) = cursor_opts.get_mut(window_entity) {
        cursor.grab_mode = if captured {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
        cursor.visible = !captured;
    }
}
