//! Pause overlay shown while the window is unfocused

use bevy::prelude::*;

use super::styles::*;
use crate::input::{grab_cursor, release_cursor};
use crate::states::GameState;

pub struct PauseMenuPlugin;

impl Plugin for PauseMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Paused), (spawn_pause_menu, release_cursor));
        app.add_systems(OnExit(GameState::Paused), despawn_pause_menu);
        app.add_systems(OnEnter(GameState::Playing), grab_cursor);
    }
}

/// Marker for the pause overlay root
#[derive(Component)]
struct PauseMenuRoot;

fn spawn_pause_menu(mut commands: Commands) {
    info!("Paused");
    commands
        .spawn((
            PauseMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(OVERLAY_BACKGROUND),
        ))
        .with_children(|parent| {
            parent.spawn((Text::new("PAUSED"), title_font(), TextColor(TEXT_COLOR)));
            parent.spawn((
                Text::new("Click to resume"),
                hud_font(),
                TextColor(TEXT_COLOR),
            ));
        });
}

fn despawn_pause_menu(mut commands: Commands, roots: Query<Entity, With<PauseMenuRoot>>) {
    info!("Resumed");
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
}
