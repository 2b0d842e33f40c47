//! Orientation readout (top-left)

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use shared::PlayerState;

use super::styles::*;
use crate::systems::LocalPlayer;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(Update, update_hud);
    }
}

/// Marker for the readout text
#[derive(Component)]
pub struct OrientationText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        OrientationText,
        Text::new(""),
        hud_font(),
        TextColor(HUD_TEXT),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(4.0),
            ..default()
        },
    ));
}

/// Format the readout. Angles are shown in degrees.
pub fn orientation_readout(player: &PlayerState, fps: Option<f64>) -> String {
    let mut text = format!(
        "Yaw: {:.1}\nPitch: {:.1}\nRoll: {:.1}",
        player.yaw.to_degrees(),
        player.pitch.to_degrees(),
        player.roll.to_degrees(),
    );
    if let Some(fps) = fps {
        text.push_str(&format!("\nFPS: {:.0}", fps));
    }
    text
}

fn update_hud(
    players: Query<&PlayerState, With<LocalPlayer>>,
    diagnostics: Res<DiagnosticsStore>,
    mut texts: Query<&mut Text, With<OrientationText>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed());

    let readout = orientation_readout(player, fps);
    for mut text in texts.iter_mut() {
        text.0.clone_from(&readout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MovementTuning;

    #[test]
    fn test_readout_in_degrees() {
        let mut player = PlayerState::new(&MovementTuning::default());
        player.yaw = std::f32::consts::FRAC_PI_2;
        player.pitch = -0.5_f32.to_radians();

        let text = orientation_readout(&player, None);
        assert_eq!(text, "Yaw: 90.0\nPitch: -0.5\nRoll: 0.0");

        let with_fps = orientation_readout(&player, Some(59.7));
        assert!(with_fps.ends_with("FPS: 60"));
    }
}
