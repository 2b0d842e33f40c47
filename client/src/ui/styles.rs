//! Shared UI styles

use bevy::prelude::*;

/// Readout text on the bright sky
pub const HUD_TEXT: Color = Color::srgb(0.0, 0.0, 0.0);

/// Dim overlay behind the pause message
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

pub const TEXT_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);

pub fn hud_font() -> TextFont {
    TextFont {
        font_size: 18.0,
        ..default()
    }
}

pub fn title_font() -> TextFont {
    TextFont {
        font_size: 40.0,
        ..default()
    }
}
