//! First-person camera
//!
//! The camera sits at the player's eye, slides back along the look direction
//! while sprinting, and looks along yaw/pitch/roll.

use bevy::prelude::*;
use shared::math::euler_quat;
use shared::PlayerState;

use crate::systems::LocalPlayer;

/// Camera pose for a player: eye position and look rotation.
pub fn first_person_pose(player: &PlayerState) -> (Vec3, Quat) {
    let rot = euler_quat(Vec3::new(player.yaw, player.pitch, player.roll));
    (player.camera_eye(), rot)
}

/// Update camera to follow local player
pub fn update_camera(
    player_query: Query<&PlayerState, With<LocalPlayer>>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let (pos, rot) = first_person_pose(player);
    camera_transform.translation = pos;
    camera_transform.rotation = rot;
}
