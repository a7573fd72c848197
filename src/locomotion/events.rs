//! Locomotion domain: outgoing notifications and incoming external requests.

use bevy::ecs::message::Message;
use serde::Serialize;

use crate::locomotion::state::LocomotionState;

/// Why a climb ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetachReason {
    Exhausted,
    LostSurface,
    Released,
    Leap,
    /// Pre-empted by damage, a stun or an external request.
    Interrupted,
}

/// Everything the state machine reports outward. Drained once per tick and forwarded as
/// Bevy messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LocomotionEvent {
    StateChanged {
        from: LocomotionState,
        to: LocomotionState,
    },
    Jumped,
    TreeLeapt { horizontal_speed: f32 },
    Landed,
    ClimbAttached,
    ClimbDetached { reason: DetachReason },
    Damaged { lives_remaining: u32 },
    Stunned,
    Died,
    LevelReloadRequested,
    /// The rider pressed Interact; the carrier should let go.
    CarrierReleaseRequested,
    /// The swinger pressed Jump; the vine should let go.
    SwingReleaseRequested,
}

impl Message for LocomotionEvent {}

/// Sent by carriers and vines to take over (or hand back) the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalTransitionRequest {
    pub target: LocomotionState,
}

impl Message for ExternalTransitionRequest {}
