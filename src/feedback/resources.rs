//! Feedback domain: latest values pushed through the effects and animation bridges.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::locomotion::{AnimFlag, AnimTrigger, AnimationBridge, EffectsBridge};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerFeedback {
    pub climb_particle_rate: f32,
    pub fatigue_tint: f32,
    pub shake: f32,
    /// Rumble strength, `None` when stopped.
    pub rumble: Option<f32>,
    pub stun_vfx: bool,
    pub opacity: f32,
}

impl Default for PlayerFeedback {
    fn default() -> Self {
        Self {
            climb_particle_rate: 0.0,
            fatigue_tint: 0.0,
            shake: 0.0,
            rumble: None,
            stun_vfx: false,
            opacity: 1.0,
        }
    }
}

impl EffectsBridge for PlayerFeedback {
    fn set_climb_particle_rate(&mut self, t: f32) {
        self.climb_particle_rate = t.clamp(0.0, 1.0);
    }

    fn set_fatigue_tint(&mut self, t: f32) {
        self.fatigue_tint = t.clamp(0.0, 1.0);
    }

    fn set_shake(&mut self, t: f32) {
        self.shake = t.clamp(0.0, 1.0);
    }

    fn rumble(&mut self, t: f32) {
        self.rumble = Some(t.clamp(0.0, 1.0));
    }

    fn stop_rumble(&mut self) {
        self.rumble = None;
    }

    fn play_stun_vfx(&mut self, on: bool) {
        self.stun_vfx = on;
    }

    fn set_opacity(&mut self, alpha: f32) {
        self.opacity = alpha.clamp(0.0, 1.0);
    }
}

/// Named animation booleans plus triggers waiting to be consumed by rendering.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationFlags {
    flags: HashMap<AnimFlag, bool>,
    triggers: Vec<AnimTrigger>,
}

impl AnimationFlags {
    pub fn flag(&self, flag: AnimFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    pub fn pending_triggers(&self) -> &[AnimTrigger] {
        &self.triggers
    }

    pub fn take_triggers(&mut self) -> Vec<AnimTrigger> {
        std::mem::take(&mut self.triggers)
    }
}

impl AnimationBridge for AnimationFlags {
    fn set_flag(&mut self, flag: AnimFlag, value: bool) {
        self.flags.insert(flag, value);
    }

    fn trigger(&mut self, trigger: AnimTrigger) {
        self.triggers.push(trigger);
    }
}
