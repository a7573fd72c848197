//! Core domain: game state definitions for the app flow.

use bevy::prelude::*;

/// `Boot` loads tuning, `Run` drives the fixed-step simulation, `Paused` freezes it.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
    Paused,
}
