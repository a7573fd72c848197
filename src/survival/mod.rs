//! Survival domain: lives, invulnerability and stun timing for the player.

mod events;
mod resources;
mod state;
#[cfg(test)]
mod tests;

pub use events::{SurvivalBridge, SurvivalRequest};
pub use resources::SurvivalTuning;
pub use state::{DamageOutcome, SurvivalState, SurvivalTick};

use bevy::prelude::*;

pub struct SurvivalPlugin;

impl Plugin for SurvivalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SurvivalTuning>()
            .add_message::<SurvivalRequest>();
    }
}
