//! Survival domain: lives, invulnerability window, stun timer and delayed reload.

use std::f32::consts::TAU;

use crate::core::PendingAction;
use crate::survival::resources::SurvivalTuning;

/// Result of a damage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable or already dead; nothing changed.
    Ignored,
    Hurt { lives_remaining: u32 },
    /// The last life was lost; a level reload is now pending.
    Killed,
}

/// What happened to survival timers during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurvivalTick {
    pub stun_ended: bool,
    pub invulnerability_ended: bool,
    pub reload_due: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LevelReload;

#[derive(Debug, Clone)]
pub struct SurvivalState {
    tuning: SurvivalTuning,
    lives: u32,
    invulnerability_timer: f32,
    stun_timer: f32,
    flash_elapsed: f32,
    pending_reload: Option<PendingAction<LevelReload>>,
}

impl SurvivalState {
    pub fn new(tuning: SurvivalTuning) -> Self {
        Self {
            lives: tuning.max_lives,
            tuning,
            invulnerability_timer: 0.0,
            stun_timer: 0.0,
            flash_elapsed: 0.0,
            pending_reload: None,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.tuning.max_lives
    }

    pub fn invulnerability_timer(&self) -> f32 {
        self.invulnerability_timer
    }

    pub fn stun_timer(&self) -> f32 {
        self.stun_timer
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability_timer > 0.0
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_timer > 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    pub fn reload_pending(&self) -> bool {
        self.pending_reload
            .as_ref()
            .is_some_and(PendingAction::is_pending)
    }

    /// Lose a life unless invulnerable. Starts the stun and invulnerability windows.
    pub fn damage(&mut self) -> DamageOutcome {
        if self.is_invulnerable() || self.is_dead() {
            return DamageOutcome::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        self.begin_stun();

        if self.lives == 0 {
            self.pending_reload = Some(PendingAction::new(self.tuning.reload_delay, LevelReload));
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hurt {
                lives_remaining: self.lives,
            }
        }
    }

    /// Stun without losing a life. Returns false when invulnerable.
    pub fn stun(&mut self) -> bool {
        if self.is_invulnerable() || self.is_dead() {
            return false;
        }
        self.begin_stun();
        true
    }

    fn begin_stun(&mut self) {
        self.stun_timer = self.tuning.stun_duration.max(0.0);
        self.invulnerability_timer = self.tuning.invulnerability_duration.max(0.0);
        self.flash_elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) -> SurvivalTick {
        let mut report = SurvivalTick::default();

        if self.stun_timer > 0.0 {
            self.stun_timer = (self.stun_timer - dt).max(0.0);
            report.stun_ended = self.stun_timer == 0.0;
        }

        if self.invulnerability_timer > 0.0 {
            self.flash_elapsed += dt;
            self.invulnerability_timer = (self.invulnerability_timer - dt).max(0.0);
            report.invulnerability_ended = self.invulnerability_timer == 0.0;
        }

        if let Some(pending) = self.pending_reload.as_mut() {
            report.reload_due = pending.tick(dt).is_some();
        }

        report
    }

    /// Opacity for the invulnerability flash, `None` when not invulnerable.
    ///
    /// Oscillates between `flash_min_opacity` and 1 starting fully opaque.
    pub fn flash_opacity(&self) -> Option<f32> {
        if !self.is_invulnerable() {
            return None;
        }
        let wave = 0.5 + 0.5 * (TAU * self.tuning.flash_frequency * self.flash_elapsed).cos();
        let min = self.tuning.flash_min_opacity.clamp(0.0, 1.0);
        Some(min + (1.0 - min) * wave)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.tuning.clone());
    }
}
