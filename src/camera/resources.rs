//! Camera domain: tuning and the forced-zoom arbiter.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::{CameraBridge, ZoomReason};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Exponential follow constant for position.
    pub follow_speed: f32,
    /// Exponential follow constant for zoom.
    pub zoom_speed: f32,
    /// Orthographic scale with no forced zoom active.
    pub default_zoom: f32,
    /// Shake offset in world units at full strength.
    pub max_shake: f32,
    pub shake_frequency: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_speed: 6.0,
            zoom_speed: 3.0,
            default_zoom: 1.0,
            max_shake: 6.0,
            shake_frequency: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    pub reason: ZoomReason,
    pub amount: f32,
}

/// Single active zoom request, tagged by reason so unrelated callers can't cancel each
/// other's request.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ForcedZoom {
    default_zoom: f32,
    active: Option<ZoomRequest>,
}

impl Default for ForcedZoom {
    fn default() -> Self {
        Self::new(CameraTuning::default().default_zoom)
    }
}

impl ForcedZoom {
    pub fn new(default_zoom: f32) -> Self {
        Self {
            default_zoom,
            active: None,
        }
    }

    pub fn active(&self) -> Option<ZoomRequest> {
        self.active
    }

    pub fn set_default_zoom(&mut self, zoom: f32) {
        self.default_zoom = zoom;
    }

    pub fn target_zoom(&self) -> f32 {
        self.active
            .map_or(self.default_zoom, |request| request.amount)
    }
}

impl CameraBridge for ForcedZoom {
    fn start_forced_zoom(&mut self, amount: f32, reason: ZoomReason) {
        if !amount.is_finite() || amount <= 0.0 {
            return;
        }
        self.active = Some(ZoomRequest { reason, amount });
    }

    fn end_forced_zoom(&mut self, reason: ZoomReason) {
        if self.active.is_some_and(|request| request.reason == reason) {
            self.active = None;
        }
    }
}
