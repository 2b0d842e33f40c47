//! Game state machine

use bevy::prelude::*;

/// Top-level game states
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// Window lost focus: simulation frozen, cursor released.
    Paused,
}
