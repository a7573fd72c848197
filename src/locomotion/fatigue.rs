//! Locomotion domain: climb fatigue accrual and cubic-ease recovery.

use crate::locomotion::easing::lerp;

const MAX_SNAP_FRACTION: f32 = 1e-4;

/// Single scalar "climb fatigue" in `[0, max]`.
///
/// Rises one unit per second of climbing. Once climbing stops it decays toward zero with
/// `fatigue = lerp(fatigue, 0, recover_rate * t^3 * dt)`, where `t` is the time since the
/// last climb contact, giving a slow-then-fast recovery.
#[derive(Debug, Clone, PartialEq)]
pub struct FatigueModel {
    value: f32,
    max: f32,
    recover_rate: f32,
    since_release: f32,
    climbing: bool,
}

impl FatigueModel {
    pub fn new(max: f32, recover_rate: f32) -> Self {
        Self {
            value: 0.0,
            max: max.max(0.0),
            recover_rate: recover_rate.max(0.0),
            since_release: 0.0,
            climbing: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_climbing(&self) -> bool {
        self.climbing
    }

    /// Normalized fatigue. A zero-length budget counts as fully spent.
    pub fn progress(&self) -> f32 {
        if self.max <= 0.0 {
            1.0
        } else {
            (self.value / self.max).clamp(0.0, 1.0)
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.max <= 0.0 || self.value >= self.max
    }

    pub fn on_climb_start(&mut self) {
        self.climbing = true;
        self.since_release = 0.0;
    }

    /// Accrue `dt` seconds of climbing and return the normalized progress.
    ///
    /// Summed frame deltas land a rounding error short of the budget, so anything within
    /// [`MAX_SNAP_FRACTION`] of `max` counts as maxed.
    pub fn on_climb_tick(&mut self, dt: f32) -> f32 {
        self.value = (self.value + dt).min(self.max);
        if self.max - self.value <= self.max * MAX_SNAP_FRACTION {
            self.value = self.max;
        }
        self.progress()
    }

    /// Freeze accrual; recovery starts on the next [`FatigueModel::tick`].
    pub fn on_climb_end(&mut self) {
        self.climbing = false;
        self.since_release = 0.0;
    }

    /// Per-frame recovery, a no-op while climbing.
    pub fn tick(&mut self, dt: f32) {
        if self.climbing || self.value <= 0.0 {
            return;
        }

        self.since_release += dt;
        let t = self.since_release;
        let factor = (self.recover_rate * t * t * t * dt).clamp(0.0, 1.0);
        self.value = lerp(self.value, 0.0, factor).max(0.0);
    }

    /// Restore directly (used when tests or a checkpoint need a known fatigue level).
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, self.max);
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.since_release = 0.0;
        self.climbing = false;
    }
}
