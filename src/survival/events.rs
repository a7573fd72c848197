//! Survival domain: damage/stun requests raised by hazards.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

/// Requests sent to the player's survival bookkeeping by hazard systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurvivalRequest {
    /// Lose a life and be knocked back by `impulse`.
    Damage { impulse: Vec2 },
    /// Stun without losing a life.
    Stun,
}

impl Message for SurvivalRequest {}

/// The narrow contract hazards use to hurt the player.
pub trait SurvivalBridge {
    fn request_damage(&mut self, impulse: Vec2);
    fn request_stun(&mut self);
}

impl SurvivalBridge for MessageWriter<'_, SurvivalRequest> {
    fn request_damage(&mut self, impulse: Vec2) {
        self.write(SurvivalRequest::Damage { impulse });
    }

    fn request_stun(&mut self) {
        self.write(SurvivalRequest::Stun);
    }
}
