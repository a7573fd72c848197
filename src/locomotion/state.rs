//! Locomotion domain: the movement state enum and the rules that depend only on it.

use serde::{Deserialize, Serialize};

use crate::locomotion::resources::LocomotionTuning;

/// Mutually exclusive movement modes. Exactly one is active per player at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocomotionState {
    #[default]
    Grounded,
    Falling,
    Gliding,
    Climbing,
    RidingCarrier,
    Swinging,
    Stunned,
}

impl LocomotionState {
    /// Whether move/jump/glide/attach presses may act in this state.
    pub fn accepts_voluntary_input(self) -> bool {
        !matches!(
            self,
            LocomotionState::Stunned | LocomotionState::RidingCarrier | LocomotionState::Swinging
        )
    }

    /// Whether position and velocity are owned by an external carrier or vine.
    pub fn is_externally_driven(self) -> bool {
        matches!(
            self,
            LocomotionState::RidingCarrier | LocomotionState::Swinging
        )
    }

    pub fn is_airborne(self) -> bool {
        matches!(self, LocomotionState::Falling | LocomotionState::Gliding)
    }

    /// Gravity multiplier for this state. Derived fresh every tick so no state can leave a
    /// stale multiplier behind for the next one.
    pub fn gravity_scale(self, tuning: &LocomotionTuning, vertical_velocity: f32) -> f32 {
        match self {
            LocomotionState::Grounded => tuning.ground_gravity_scale,
            LocomotionState::Falling => {
                if vertical_velocity < 0.0 {
                    tuning.fall_gravity_scale
                } else {
                    tuning.rise_gravity_scale
                }
            }
            LocomotionState::Gliding => tuning.glide_gravity_scale,
            LocomotionState::Climbing
            | LocomotionState::RidingCarrier
            | LocomotionState::Swinging => 0.0,
            LocomotionState::Stunned => tuning.stunned_gravity_scale,
        }
    }
}
