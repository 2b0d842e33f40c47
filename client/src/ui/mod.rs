//! UI module - HUD and pause overlay

mod hud;
mod pause_menu;
mod styles;

pub use hud::HudPlugin;
pub use pause_menu::PauseMenuPlugin;
