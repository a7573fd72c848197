//! Range checks for tuning values the locomotion core assumes are sane.

use super::data::{TUNING_SCHEMA_VERSION, TuningFile};
use crate::locomotion::EasingCurve;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value against a condition
macro_rules! check {
    ($errors:expr, $section:expr, $field:expr, $cond:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

fn unit(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Validate every section of a parsed tuning file.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        "file",
        "schema_version",
        file.schema_version == TUNING_SCHEMA_VERSION,
        "expected {}, found {}",
        TUNING_SCHEMA_VERSION,
        file.schema_version
    );

    // Locomotion
    let loco = &file.locomotion;
    let section = "locomotion";
    check!(errors, section, "body_mass", positive(loco.body_mass), "must be > 0, got {}", loco.body_mass);
    check!(errors, section, "jump_impulse", positive(loco.jump_impulse), "must be > 0, got {}", loco.jump_impulse);
    check!(errors, section, "jump_buffer_time", non_negative(loco.jump_buffer_time), "must be >= 0, got {}", loco.jump_buffer_time);
    check!(errors, section, "jump_grace_time", non_negative(loco.jump_grace_time), "must be >= 0, got {}", loco.jump_grace_time);
    check!(errors, section, "ground_normal_min", unit(loco.ground_normal_min), "must be in [0, 1], got {}", loco.ground_normal_min);
    if let Some(ray) = loco.ground_check {
        check!(errors, section, "ground_check.distance", positive(ray.distance), "must be > 0, got {}", ray.distance);
    }
    check!(errors, section, "glide_cap", non_negative(loco.glide_cap), "must be >= 0, got {}", loco.glide_cap);
    check!(errors, section, "glide_vertical_decay", unit(loco.glide_vertical_decay), "must be in [0, 1], got {}", loco.glide_vertical_decay);
    check!(errors, section, "gust_vertical_decay", unit(loco.gust_vertical_decay), "must be in [0, 1], got {}", loco.gust_vertical_decay);
    check!(errors, section, "max_climb_time", non_negative(loco.max_climb_time), "must be >= 0, got {}", loco.max_climb_time);
    check!(errors, section, "fatigue_recover_rate", non_negative(loco.fatigue_recover_rate), "must be >= 0, got {}", loco.fatigue_recover_rate);
    check!(errors, section, "fatigue_warning_threshold", unit(loco.fatigue_warning_threshold), "must be in [0, 1], got {}", loco.fatigue_warning_threshold);
    check!(errors, section, "max_climb_speed", non_negative(loco.max_climb_speed), "must be >= 0, got {}", loco.max_climb_speed);
    check!(errors, section, "climb_snap_factor", unit(loco.climb_snap_factor), "must be in [0, 1], got {}", loco.climb_snap_factor);
    check!(
        errors,
        section,
        "attach_reach",
        loco.attach_reach >= loco.climb_reach,
        "must be >= climb_reach ({}), got {}",
        loco.climb_reach,
        loco.attach_reach
    );
    check!(errors, section, "attach_cooldown", non_negative(loco.attach_cooldown), "must be >= 0, got {}", loco.attach_cooldown);
    check!(errors, section, "hazard_speed_threshold", non_negative(loco.hazard_speed_threshold), "must be >= 0, got {}", loco.hazard_speed_threshold);
    check!(errors, section, "speed_zoom", positive(loco.speed_zoom), "must be > 0, got {}", loco.speed_zoom);
    check!(errors, section, "carrier_zoom", positive(loco.carrier_zoom), "must be > 0, got {}", loco.carrier_zoom);

    if let EasingCurve::Keyframes(keys) = &loco.climb_speed_curve {
        check!(errors, section, "climb_speed_curve", !keys.is_empty(), "keyframe curve has no keys");
        let sorted = keys.windows(2).all(|pair| pair[0].time <= pair[1].time);
        check!(errors, section, "climb_speed_curve", sorted, "keyframes must be sorted by time");
    }

    // Survival
    let survival = &file.survival;
    let section = "survival";
    check!(errors, section, "max_lives", survival.max_lives >= 1, "must be at least 1, got {}", survival.max_lives);
    check!(errors, section, "invulnerability_duration", non_negative(survival.invulnerability_duration), "must be >= 0, got {}", survival.invulnerability_duration);
    check!(errors, section, "stun_duration", non_negative(survival.stun_duration), "must be >= 0, got {}", survival.stun_duration);
    // Damage during a stun would restart it; the i-frames must cover the whole stun.
    check!(
        errors,
        section,
        "invulnerability_duration",
        survival.invulnerability_duration >= survival.stun_duration,
        "must be >= stun_duration ({}), got {}",
        survival.stun_duration,
        survival.invulnerability_duration
    );
    check!(errors, section, "reload_delay", non_negative(survival.reload_delay), "must be >= 0, got {}", survival.reload_delay);
    check!(errors, section, "flash_min_opacity", unit(survival.flash_min_opacity), "must be in [0, 1], got {}", survival.flash_min_opacity);

    // Camera
    let camera = &file.camera;
    let section = "camera";
    check!(errors, section, "default_zoom", positive(camera.default_zoom), "must be > 0, got {}", camera.default_zoom);
    check!(errors, section, "follow_speed", positive(camera.follow_speed), "must be > 0, got {}", camera.follow_speed);
    check!(errors, section, "zoom_speed", positive(camera.zoom_speed), "must be > 0, got {}", camera.zoom_speed);

    errors
}
