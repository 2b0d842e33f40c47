//! Rendering systems
//!
//! Lighting, sky colour and camera setup.

use bevy::color::palettes::css::CORNFLOWER_BLUE;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::view::Msaa;

use crate::settings::GameSettings;

/// One-time rendering setup.
pub fn setup_rendering(mut commands: Commands, settings: Res<GameSettings>) {
    commands.insert_resource(ClearColor(CORNFLOWER_BLUE.into()));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let camera = &settings.camera;
    commands.spawn((
        Camera3d::default(),
        Msaa::Sample4,
        Tonemapping::None,
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_xyz(0.0, shared::EYE_HEIGHT, 0.0),
    ));

    info!(
        "Client rendering initialized (fov {:.0} deg, far {:.0})",
        camera.fov_degrees, camera.far
    );
}
