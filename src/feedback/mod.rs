//! Feedback domain: one-way visual feedback driven by the locomotion core.

mod components;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{BarkParticle, PlayerTint, SpriteSquash};
pub use resources::{AnimationFlags, PlayerFeedback};
pub use systems::tinted_color;

use bevy::prelude::*;

use crate::feedback::systems::{
    apply_animation_triggers, apply_player_feedback, emit_climb_particles, update_bark_particles,
};

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerFeedback>()
            .init_resource::<AnimationFlags>()
            .add_systems(
                Update,
                (
                    apply_player_feedback,
                    apply_animation_triggers,
                    emit_climb_particles,
                    update_bark_particles,
                ),
            );
    }
}
