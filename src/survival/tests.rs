use bevy::prelude::*;

use super::*;

fn tuning() -> SurvivalTuning {
    SurvivalTuning {
        max_lives: 2,
        invulnerability_duration: 1.0,
        stun_duration: 0.5,
        reload_delay: 2.0,
        flash_frequency: 2.0,
        flash_min_opacity: 0.0,
    }
}

// ============================================================================
// Damage and invulnerability
// ============================================================================

#[test]
fn test_damage_costs_one_life_and_starts_windows() {
    let mut survival = SurvivalState::new(tuning());
    assert_eq!(survival.damage(), DamageOutcome::Hurt { lives_remaining: 1 });
    assert_eq!(survival.lives(), 1);
    assert!(survival.is_invulnerable());
    assert!(survival.is_stunned());
}

#[test]
fn test_damage_ignored_while_invulnerable() {
    let mut survival = SurvivalState::new(tuning());
    survival.damage();
    assert_eq!(survival.damage(), DamageOutcome::Ignored);
    assert!(!survival.stun());
    assert_eq!(survival.lives(), 1);
}

#[test]
fn test_damage_allowed_again_after_window() {
    let mut survival = SurvivalState::new(tuning());
    survival.damage();
    survival.tick(0.5);
    survival.tick(0.5);
    assert!(!survival.is_invulnerable());
    assert_eq!(survival.damage(), DamageOutcome::Killed);
}

#[test]
fn test_stun_keeps_lives() {
    let mut survival = SurvivalState::new(tuning());
    assert!(survival.stun());
    assert_eq!(survival.lives(), 2);
    assert!(survival.is_stunned());
    assert!(survival.is_invulnerable());
}

#[test]
fn test_stun_end_reported_once() {
    let mut survival = SurvivalState::new(tuning());
    survival.stun();
    assert!(!survival.tick(0.25).stun_ended);
    assert!(survival.tick(0.25).stun_ended);
    assert!(!survival.tick(0.25).stun_ended);
}

#[test]
fn test_zero_stun_window_has_already_elapsed() {
    let mut survival = SurvivalState::new(SurvivalTuning {
        stun_duration: 0.0,
        ..tuning()
    });
    assert!(survival.stun());
    assert!(!survival.is_stunned());
    assert!(survival.is_invulnerable());
}

// ============================================================================
// Death and delayed reload
// ============================================================================

#[test]
fn test_last_life_schedules_reload_after_delay() {
    let mut survival = SurvivalState::new(SurvivalTuning {
        max_lives: 1,
        ..tuning()
    });
    assert_eq!(survival.damage(), DamageOutcome::Killed);
    assert!(survival.is_dead());
    assert!(survival.reload_pending());

    assert!(!survival.tick(1.0).reload_due);
    assert!(survival.tick(1.0).reload_due);
    assert!(!survival.tick(1.0).reload_due);
    assert!(!survival.reload_pending());
}

#[test]
fn test_zero_delta_freezes_survival_timers() {
    let mut survival = SurvivalState::new(tuning());
    survival.damage();
    let before = (survival.stun_timer(), survival.invulnerability_timer());
    survival.tick(0.0);
    assert_eq!((survival.stun_timer(), survival.invulnerability_timer()), before);
}

#[test]
fn test_reset_restores_lives_and_clears_timers() {
    let mut survival = SurvivalState::new(tuning());
    survival.damage();
    survival.reset();
    assert_eq!(survival.lives(), 2);
    assert!(!survival.is_invulnerable());
    assert!(!survival.is_stunned());
    assert!(!survival.reload_pending());
}

// ============================================================================
// Flash
// ============================================================================

#[test]
fn test_flash_only_while_invulnerable() {
    let mut survival = SurvivalState::new(tuning());
    assert_eq!(survival.flash_opacity(), None);

    survival.damage();
    assert_eq!(survival.flash_opacity(), Some(1.0));

    // Half a period at 2 Hz reaches the minimum.
    survival.tick(0.25);
    let alpha = survival.flash_opacity().unwrap_or(1.0);
    assert!(alpha.abs() < 1e-4);
}

// ============================================================================
// Bridge
// ============================================================================

#[derive(Default)]
struct RecordingBridge(Vec<SurvivalRequest>);

impl SurvivalBridge for RecordingBridge {
    fn request_damage(&mut self, impulse: Vec2) {
        self.0.push(SurvivalRequest::Damage { impulse });
    }

    fn request_stun(&mut self) {
        self.0.push(SurvivalRequest::Stun);
    }
}

fn hazard_contact(bridge: &mut dyn SurvivalBridge, knockback: Vec2) {
    bridge.request_damage(knockback);
    bridge.request_stun();
}

#[test]
fn test_bridge_is_usable_as_trait_object() {
    let mut bridge = RecordingBridge::default();
    hazard_contact(&mut bridge, Vec2::new(0.0, 5.0));
    assert_eq!(
        bridge.0,
        vec![
            SurvivalRequest::Damage {
                impulse: Vec2::new(0.0, 5.0)
            },
            SurvivalRequest::Stun,
        ]
    );
}
