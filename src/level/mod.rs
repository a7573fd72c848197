//! Level domain: the demo grove the player is tested in.

mod layout;
mod spawn;
#[cfg(test)]
mod tests;

pub use layout::{GROUND_TOP, GustArea, LevelPiece, demo_grove, demo_gusts};
pub use spawn::LevelEntity;

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::{spawn_grove, spawn_player};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        // Leaving Boot happens once; Paused -> Run must not respawn anything.
        app.add_systems(
            OnExit(GameState::Boot),
            (spawn_grove, spawn_player).chain(),
        );
    }
}
