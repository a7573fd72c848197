//! Locomotion domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::easing::EasingCurve;

/// Downward ray used to detect standable ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundCheck {
    /// Ray origin relative to the body position (usually the feet).
    pub offset: (f32, f32),
    pub distance: f32,
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self {
            offset: (0.0, -23.0),
            distance: 4.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub body_mass: f32,

    // Ground
    pub ground_speed: f32,
    pub ground_gravity_scale: f32,
    /// `None` disables ray-based ground detection; landing then relies on collisions.
    pub ground_check: Option<GroundCheck>,
    /// Minimum contact normal `y` for a ground collision to count as landing.
    pub ground_normal_min: f32,

    // Jumping
    pub jump_impulse: f32,
    /// Landing is suppressed for this long after a jump executes.
    pub jump_buffer_time: f32,
    /// A jump pressed this long before landing still fires on touchdown.
    pub jump_grace_time: f32,

    // Air
    pub air_speed: f32,
    pub air_control_accel: f32,
    pub rise_gravity_scale: f32,
    pub fall_gravity_scale: f32,
    pub stunned_gravity_scale: f32,

    // Gliding
    pub glide_gravity_scale: f32,
    pub glide_cap: f32,
    pub glide_ease_rate: f32,
    pub gust_ease_rate: f32,
    /// Per-tick multiplier on vertical speed while gliding.
    pub glide_vertical_decay: f32,
    pub gust_vertical_decay: f32,

    // Climbing
    pub max_climb_time: f32,
    pub fatigue_recover_rate: f32,
    /// Fatigue progress above which shake and rumble start.
    pub fatigue_warning_threshold: f32,
    pub max_climb_speed: f32,
    pub climb_speed_curve: EasingCurve,
    pub attach_reach: f32,
    pub climb_reach: f32,
    pub climb_snap_factor: f32,
    pub attach_cooldown: f32,
    pub moss_slip_speed: f32,
    pub slip_acceleration: f32,
    pub tree_leap_multiplier: f32,
    pub tree_leap_impulse: f32,
    /// Climbable contacts faster than this never auto-attach.
    pub auto_attach_max_speed: f32,

    // Hazards
    pub hazard_speed_threshold: f32,
    pub hazard_knockback: f32,

    // Camera requests
    pub zoom_speed_threshold: f32,
    pub speed_zoom: f32,
    pub carrier_zoom: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            body_mass: 1.0,
            ground_speed: 260.0,
            ground_gravity_scale: 1.0,
            ground_check: Some(GroundCheck::default()),
            ground_normal_min: 0.7,
            jump_impulse: 620.0,
            jump_buffer_time: 0.15,
            jump_grace_time: 0.12,
            air_speed: 220.0,
            air_control_accel: 900.0,
            rise_gravity_scale: 1.0,
            fall_gravity_scale: 1.8,
            stunned_gravity_scale: 1.0,
            glide_gravity_scale: 0.2,
            glide_cap: 340.0,
            glide_ease_rate: 2.0,
            gust_ease_rate: 4.0,
            glide_vertical_decay: 0.9,
            gust_vertical_decay: 0.6,
            max_climb_time: 5.0,
            fatigue_recover_rate: 0.8,
            fatigue_warning_threshold: 0.7,
            max_climb_speed: 160.0,
            climb_speed_curve: EasingCurve::EaseInCubic,
            attach_reach: 20.0,
            climb_reach: 6.0,
            climb_snap_factor: 0.2,
            attach_cooldown: 0.35,
            moss_slip_speed: 40.0,
            slip_acceleration: 240.0,
            tree_leap_multiplier: 2.2,
            tree_leap_impulse: 480.0,
            auto_attach_max_speed: 600.0,
            hazard_speed_threshold: 120.0,
            hazard_knockback: 420.0,
            zoom_speed_threshold: 300.0,
            speed_zoom: 1.25,
            carrier_zoom: 1.4,
        }
    }
}

impl LocomotionTuning {
    /// Apex height of a standing jump under `gravity`: `h = v^2 / (2g)`.
    pub fn jump_height(&self, gravity: f32) -> f32 {
        let mass = if self.body_mass > 0.0 { self.body_mass } else { 1.0 };
        let launch = self.jump_impulse / mass;
        let g = gravity * self.rise_gravity_scale;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        launch * launch / (2.0 * g)
    }
}

/// Where the player is placed on spawn and on level reload.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

impl Default for SpawnPoint {
    fn default() -> Self {
        Self(Vec2::new(-360.0, -150.0))
    }
}
