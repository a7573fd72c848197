//! Data definitions for the player tuning file.
//!
//! Mirrors the structure of `assets/data/player_tuning.ron`. Every section falls back to
//! its `Default` when omitted, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::locomotion::LocomotionTuning;
use crate::survival::SurvivalTuning;

/// Schema version this build understands.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub schema_version: u32,
    pub locomotion: LocomotionTuning,
    pub survival: SurvivalTuning,
    pub camera: CameraTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            locomotion: LocomotionTuning::default(),
            survival: SurvivalTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}
