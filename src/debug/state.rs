//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

use crate::locomotion::LocomotionState;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion info overlay is visible
    pub show_info: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Actions bound to debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleInfo,
    /// Stand-in for a carrier or vine sending its takeover/hand-back request.
    RequestTransition(LocomotionState),
    Damage,
    Stun,
    DumpSnapshot,
}

/// F-keys only: Ctrl and letter keys are gameplay bindings.
pub const DEBUG_HOTKEYS: [(KeyCode, DebugAction); 7] = [
    (KeyCode::F1, DebugAction::ToggleInfo),
    (KeyCode::F2, DebugAction::RequestTransition(LocomotionState::RidingCarrier)),
    (KeyCode::F3, DebugAction::RequestTransition(LocomotionState::Swinging)),
    (KeyCode::F4, DebugAction::RequestTransition(LocomotionState::Falling)),
    (KeyCode::F5, DebugAction::Damage),
    (KeyCode::F6, DebugAction::Stun),
    (KeyCode::F7, DebugAction::DumpSnapshot),
];
