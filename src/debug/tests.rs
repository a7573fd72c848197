use std::collections::HashSet;

use bevy::prelude::*;

use super::*;
use crate::locomotion::{LocomotionState, LocomotionStateMachine, LocomotionTuning};
use crate::survival::SurvivalTuning;

fn fresh_snapshot() -> crate::locomotion::LocomotionSnapshot {
    LocomotionStateMachine::new(LocomotionTuning::default(), SurvivalTuning::default()).snapshot()
}

#[test]
fn test_snapshot_json_carries_state_and_lives() {
    let json = snapshot_json(&fresh_snapshot()).unwrap_or_else(|e| panic!("{e}"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(value["state"], "Grounded");
    assert_eq!(value["lives"], 3);
    assert_eq!(value["in_gust"], false);
}

#[test]
fn test_overlay_lists_state_and_status() {
    let text = format_overlay(
        &fresh_snapshot(),
        Vec2::new(12.4, -3.6),
        Vec2::ZERO,
        Some("Stun requested"),
    );

    assert!(text.starts_with("State: Grounded\nPos: (12, -4)"));
    assert!(text.contains("Lives: 3"));
    assert!(text.contains("> Stun requested"));
}

#[test]
fn test_hotkeys_are_unique_and_cover_every_external_target() {
    let keys: HashSet<_> = DEBUG_HOTKEYS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), DEBUG_HOTKEYS.len());

    for target in [
        LocomotionState::RidingCarrier,
        LocomotionState::Swinging,
        LocomotionState::Falling,
    ] {
        assert!(
            DEBUG_HOTKEYS
                .iter()
                .any(|(_, action)| *action == DebugAction::RequestTransition(target))
        );
    }
}

#[test]
fn test_status_message_replaces_previous() {
    let mut state = DebugState::default();
    state.set_message("first", 1.0);
    state.set_message("second", 2.0);
    assert_eq!(state.status_message, Some(("second".to_string(), 2.0)));
}
