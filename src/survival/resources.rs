//! Survival domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalTuning {
    pub max_lives: u32,
    pub invulnerability_duration: f32,
    pub stun_duration: f32,
    /// Delay between losing the last life and the level reload signal.
    pub reload_delay: f32,
    /// Opacity oscillations per second while invulnerable.
    pub flash_frequency: f32,
    /// Lowest opacity reached by the invulnerability flash.
    pub flash_min_opacity: f32,
}

impl Default for SurvivalTuning {
    fn default() -> Self {
        Self {
            max_lives: 3,
            invulnerability_duration: 1.5,
            stun_duration: 0.6,
            reload_delay: 2.0,
            flash_frequency: 6.0,
            flash_min_opacity: 0.25,
        }
    }
}
