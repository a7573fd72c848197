use bevy::prelude::*;

use super::*;
use crate::locomotion::{AnimFlag, AnimTrigger, AnimationBridge, EffectsBridge};

#[test]
fn test_feedback_values_are_clamped() {
    let mut feedback = PlayerFeedback::default();
    feedback.set_fatigue_tint(3.0);
    feedback.set_shake(-1.0);
    feedback.rumble(2.0);
    feedback.set_opacity(1.5);

    assert_eq!(feedback.fatigue_tint, 1.0);
    assert_eq!(feedback.shake, 0.0);
    assert_eq!(feedback.rumble, Some(1.0));
    assert_eq!(feedback.opacity, 1.0);

    feedback.stop_rumble();
    assert_eq!(feedback.rumble, None);
}

#[test]
fn test_animation_flags_track_latest_value() {
    let mut flags = AnimationFlags::default();
    assert!(!flags.flag(AnimFlag::IsClimbing));

    flags.set_flag(AnimFlag::IsClimbing, true);
    assert!(flags.flag(AnimFlag::IsClimbing));
    flags.set_flag(AnimFlag::IsClimbing, false);
    assert!(!flags.flag(AnimFlag::IsClimbing));
}

#[test]
fn test_animation_triggers_are_consumed_once() {
    let mut flags = AnimationFlags::default();
    flags.trigger(AnimTrigger::Jump);
    flags.trigger(AnimTrigger::Land);

    assert_eq!(flags.take_triggers(), vec![AnimTrigger::Jump, AnimTrigger::Land]);
    assert!(flags.pending_triggers().is_empty());
}

#[test]
fn test_tint_is_identity_when_fresh() {
    let base = Color::srgb(0.9, 0.5, 0.2);
    let tinted = tinted_color(base, &PlayerFeedback::default()).to_srgba();
    let expected = base.to_srgba();

    assert!((tinted.red - expected.red).abs() < 1e-5);
    assert!((tinted.green - expected.green).abs() < 1e-5);
    assert!((tinted.blue - expected.blue).abs() < 1e-5);
    assert_eq!(tinted.alpha, 1.0);
}

#[test]
fn test_full_fatigue_desaturates_and_flash_sets_alpha() {
    let base = Color::srgb(1.0, 0.0, 0.0);
    let feedback = PlayerFeedback {
        fatigue_tint: 1.0,
        opacity: 0.4,
        ..default()
    };
    let tinted = tinted_color(base, &feedback).to_srgba();

    assert!(tinted.red < 1.0);
    assert!(tinted.green > 0.0);
    assert!((tinted.alpha - 0.4).abs() < 1e-5);
}
