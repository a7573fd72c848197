//! Core domain: app flow state, pause handling and shared frame-delta timers.

mod state;
mod systems;
mod timers;

pub use state::GameState;
pub use timers::{PendingAction, sanitize_delta};

use bevy::prelude::*;

use crate::core::systems::toggle_pause;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Update, toggle_pause);
    }
}
