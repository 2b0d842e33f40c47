//! Static world: the grass floor and the axis guides.

use bevy::prelude::*;
use shared::{GameObject, AXIS_LENGTH, GROUND_HALF_EXTENT, UNIT_TILE};

use super::objects::{spawn_object, ObjectAssets};

/// Marker for floor tiles
#[derive(Component)]
pub struct GroundTile;

/// Lay out the floor as a square grid of unit tiles around the origin.
pub fn spawn_ground_grid(
    mut commands: Commands,
    assets: Res<ObjectAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let mut count = 0;
    for x in -GROUND_HALF_EXTENT..=GROUND_HALF_EXTENT {
        for z in -GROUND_HALF_EXTENT..=GROUND_HALF_EXTENT {
            let tile = GameObject::quad(Vec3::new(x as f32, 0.0, z as f32), UNIT_TILE);
            let entity = spawn_object(&mut commands, &assets, &mut meshes, tile);
            commands.entity(entity).insert(GroundTile);
            count += 1;
        }
    }
    info!("Spawned {} ground tiles", count);
}

/// X red, Y green, Z blue.
pub fn draw_world_axes(mut gizmos: Gizmos) {
    let axes = [
        (Vec3::X, Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::Y, Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::Z, Color::srgb(0.0, 0.0, 1.0)),
    ];
    for (axis, color) in axes {
        gizmos.line(-axis * AXIS_LENGTH, axis * AXIS_LENGTH, color);
    }
}
