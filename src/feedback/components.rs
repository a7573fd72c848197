//! Feedback domain: sprite-side components.

use bevy::prelude::*;

/// Untinted player colour.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerTint {
    pub base: Color,
}

/// Vertical squash/stretch of the sprite, eased back to 1 every frame. Applied to the
/// sprite size, never the transform, so the collider keeps its shape.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpriteSquash {
    pub amount: f32,
    pub base_size: Vec2,
}

impl SpriteSquash {
    pub fn new(base_size: Vec2) -> Self {
        Self {
            amount: 1.0,
            base_size,
        }
    }
}

/// Short-lived bark chip shed while climbing.
#[derive(Component, Debug)]
pub struct BarkParticle {
    pub lifetime: f32,
    pub velocity: Vec2,
}
