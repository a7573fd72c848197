//! Locomotion domain: avian2d adapter for the [`PhysicsBody`] contract.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{AxisFreeze, PhysicsBody};

/// Borrowed view of the player's rigid-body components for one fixed step.
///
/// `collider_enabled` starts from the absence of [`ColliderDisabled`]; the caller turns a
/// change into a command once the step is done.
pub(crate) struct AvianBody<'w> {
    pub transform: &'w mut Transform,
    pub velocity: &'w mut LinearVelocity,
    pub gravity_scale: &'w mut GravityScale,
    pub locked_axes: &'w mut LockedAxes,
    pub collider_enabled: bool,
    pub mass: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse / self.mass();
    }

    fn mass(&self) -> f32 {
        if self.mass > 0.0 { self.mass } else { 1.0 }
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn set_axis_freeze(&mut self, freeze: AxisFreeze) {
        let mut axes = LockedAxes::new();
        if freeze.translation_x {
            axes = axes.lock_translation_x();
        }
        if freeze.translation_y {
            axes = axes.lock_translation_y();
        }
        if freeze.rotation {
            axes = axes.lock_rotation();
        }
        *self.locked_axes = axes;
    }

    fn set_collider_enabled(&mut self, enabled: bool) {
        self.collider_enabled = enabled;
    }
}
