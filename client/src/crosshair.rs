//! Crosshair overlay
//!
//! Centred dot with four short ticks, shown only while playing.

use bevy::prelude::*;

use crate::states::GameState;

/// Marker component for the crosshair UI root
#[derive(Component)]
pub struct Crosshair;

const TICK_LENGTH: f32 = 6.0;
const TICK_THICKNESS: f32 = 2.0;
const TICK_GAP: f32 = 10.0;
const TICK_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

/// Spawn the crosshair UI
pub fn spawn_crosshair(mut commands: Commands) {
    commands
        .spawn((
            Crosshair,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            // Ensure it doesn't block mouse input
            Pickable::IGNORE,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
                BorderRadius::all(Val::Px(2.0)),
            ));

            // (width, height, top, bottom, left, right)
            let ticks = [
                (TICK_THICKNESS, TICK_LENGTH, Some(-TICK_GAP), None, None, None),
                (TICK_THICKNESS, TICK_LENGTH, None, Some(-TICK_GAP), None, None),
                (TICK_LENGTH, TICK_THICKNESS, None, None, Some(-TICK_GAP), None),
                (TICK_LENGTH, TICK_THICKNESS, None, None, None, Some(-TICK_GAP)),
            ];
            for (w, h, top, bottom, left, right) in ticks {
                let px = |v: Option<f32>| v.map(Val::Px).unwrap_or(Val::Auto);
                parent.spawn((
                    Node {
                        width: Val::Px(w),
                        height: Val::Px(h),
                        position_type: PositionType::Absolute,
                        top: px(top),
                        bottom: px(bottom),
                        left: px(left),
                        right: px(right),
                        ..default()
                    },
                    BackgroundColor(TICK_COLOR),
                ));
            }
        });
}

/// Hide the crosshair while paused.
pub fn update_crosshair_visibility(
    state: Res<State<GameState>>,
    mut crosshair: Query<&mut Visibility, With<Crosshair>>,
) {
    let visible = *state.get() == GameState::Playing;
    for mut visibility in crosshair.iter_mut() {
        *visibility = if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
