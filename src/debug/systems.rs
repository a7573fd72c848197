//! Debug domain: hotkey handling and overlay updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::{DEBUG_HOTKEYS, DebugAction, DebugState};
use crate::debug::ui::{DebugInfoOverlay, format_overlay, spawn_debug_info_overlay};
use crate::locomotion::{ExternalTransitionRequest, LocomotionSnapshot, Player, PlayerLocomotion};
use crate::survival::{SurvivalBridge, SurvivalRequest};

const DEBUG_KNOCKBACK: Vec2 = Vec2::new(-200.0, 300.0);

/// Pretty JSON for a locomotion snapshot.
pub fn snapshot_json(snapshot: &LocomotionSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Handle debug hotkeys
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut transitions: MessageWriter<ExternalTransitionRequest>,
    mut survival: MessageWriter<SurvivalRequest>,
    player_query: Query<&PlayerLocomotion, With<Player>>,
) {
    for (key, action) in DEBUG_HOTKEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }

        match action {
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                let msg = if debug_state.show_info {
                    "Debug Info ON"
                } else {
                    "Debug Info OFF"
                };
                info!("[DEBUG] {}", msg);
            }
            DebugAction::RequestTransition(target) => {
                transitions.write(ExternalTransitionRequest { target });
                debug_state.set_message(format!("Requested {:?}", target), 2.0);
                info!("[DEBUG] External transition to {:?} requested", target);
            }
            DebugAction::Damage => {
                survival.request_damage(DEBUG_KNOCKBACK);
                debug_state.set_message("Damage requested", 2.0);
            }
            DebugAction::Stun => {
                survival.request_stun();
                debug_state.set_message("Stun requested", 2.0);
            }
            DebugAction::DumpSnapshot => {
                let Ok(locomotion) = player_query.single() else {
                    debug_state.set_message("No player to dump", 2.0);
                    continue;
                };
                match snapshot_json(&locomotion.0.snapshot()) {
                    Ok(json) => {
                        info!("[DEBUG] Locomotion snapshot:\n{}", json);
                        debug_state.set_message("Snapshot written to log", 2.0);
                    }
                    Err(e) => {
                        warn!("[DEBUG] Snapshot serialization failed: {}", e);
                    }
                }
            }
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &LinearVelocity, &PlayerLocomotion), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((transform, velocity, locomotion)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str());
        **text = format_overlay(
            &locomotion.0.snapshot(),
            transform.translation.truncate(),
            velocity.0,
            status,
        );
    }
}
