//! Core domain: deferred actions advanced by simulation delta.

use std::time::Duration;

use bevy::prelude::*;

/// Clamp a frame delta to a finite, non-negative value.
///
/// Degenerate deltas (negative, NaN, infinite) are treated as a paused frame.
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

/// An action that falls due after a fixed amount of simulated time.
///
/// Replaces "wait N seconds then do X" coroutines: the owner ticks it each frame and
/// receives the action exactly once.
#[derive(Debug, Clone)]
pub struct PendingAction<T> {
    timer: Timer,
    action: Option<T>,
}

impl<T> PendingAction<T> {
    pub fn new(delay: f32, action: T) -> Self {
        Self {
            timer: Timer::from_seconds(sanitize_delta(delay), TimerMode::Once),
            action: Some(action),
        }
    }

    /// Advance by `dt` seconds. Returns the action on the tick it falls due, `None` before
    /// and after.
    pub fn tick(&mut self, dt: f32) -> Option<T> {
        if self.action.is_none() {
            return None;
        }

        self.timer.tick(Duration::from_secs_f32(sanitize_delta(dt)));

        if self.timer.remaining_secs() == 0.0 {
            self.action.take()
        } else {
            None
        }
    }

    pub fn remaining(&self) -> f32 {
        self.timer.remaining_secs()
    }

    pub fn is_pending(&self) -> bool {
        self.action.is_some()
    }
}
