//! Local player systems
//!
//! Spawning, per-frame movement and shooting.

use bevy::prelude::*;
use shared::PlayerState;

use super::objects::{spawn_object, ObjectAssets};
use crate::input::InputState;
use crate::settings::GameSettings;

/// Marker for the entity the camera follows
#[derive(Component)]
pub struct LocalPlayer;

pub fn spawn_player(mut commands: Commands, settings: Res<GameSettings>) {
    let player = PlayerState::new(&settings.movement);
    info!("Spawning player at {:?}", player.position());
    commands.spawn((LocalPlayer, Name::new("Player"), player));
}

/// Apply this frame's intent to the player.
pub fn step_player(
    mut players: Query<&mut PlayerState, With<LocalPlayer>>,
    input_state: Res<InputState>,
    settings: Res<GameSettings>,
    time: Res<Time>,
) {
    let Ok(mut player) = players.single_mut() else {
        return;
    };

    let was_mid_air = player.mid_air;
    player.step(&input_state.intent, &settings.movement, time.delta_secs());

    if !was_mid_air && player.mid_air {
        debug!("Jump from {:?}", player.position());
    } else if was_mid_air && !player.mid_air {
        debug!("Landed at {:?}", player.position());
    }
}

/// Spawn line shots from the camera eye and model projectiles just ahead of the player.
pub fn handle_fire_input(
    mut commands: Commands,
    players: Query<&PlayerState, With<LocalPlayer>>,
    input_state: Res<InputState>,
    settings: Res<GameSettings>,
    assets: Option<Res<ObjectAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(assets) = assets else {
        return;
    };
    let Ok(player) = players.single() else {
        return;
    };

    if input_state.fire_line {
        spawn_object(&mut commands, &assets, &mut meshes, player.fire_line(&settings.projectiles));
    }
    if input_state.fire_projectile {
        let shot = player.fire_projectile(&settings.projectiles, &settings.movement);
        debug!("Projectile launched with velocity {:?}", shot.kinematics.velocity);
        spawn_object(&mut commands, &assets, &mut meshes, shot);
    }
}
