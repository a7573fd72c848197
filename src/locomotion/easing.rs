//! Locomotion domain: easing curves and interpolation helpers.

use serde::{Deserialize, Serialize};

/// One key of a piecewise-linear curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

/// An evaluable curve over `[0, 1]`, supplied through tuning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum EasingCurve {
    Linear,
    EaseInQuad,
    #[default]
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Piecewise-linear keys sorted by time. Held flat outside the first/last key.
    Keyframes(Vec<CurveKey>),
}

impl EasingCurve {
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingCurve::Linear => t,
            EasingCurve::EaseInQuad => t * t,
            EasingCurve::EaseInCubic => t * t * t,
            EasingCurve::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingCurve::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingCurve::Keyframes(keys) => evaluate_keys(keys, t),
        }
    }
}

fn evaluate_keys(keys: &[CurveKey], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return t;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.time && t <= b.time {
            let span = b.time - a.time;
            if span <= f32::EPSILON {
                return b.value;
            }
            return lerp(a.value, b.value, (t - a.time) / span);
        }
    }

    last.value
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-rate scaled step toward `target`: `lerp(current, target, rate * dt)` with the
/// factor clamped so a long frame never overshoots.
pub fn ease_towards(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(current, target, (rate * dt).clamp(0.0, 1.0))
}

/// Move `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}
