//! Locomotion domain: the player movement state machine and its ECS hosting.

mod bridges;
mod climb;
mod components;
mod easing;
mod events;
mod fatigue;
mod handlers;
mod input;
mod machine;
mod resources;
mod state;
mod systems;
#[cfg(test)]
pub(crate) mod test_support;

pub use bridges::{
    AnimFlag, AnimTrigger, AnimationBridge, AxisFreeze, CameraBridge, CollisionContact,
    EffectsBridge, LocomotionContext, PhysicsBody, RaycastHit, SurfaceHandle, SurfaceMask,
    SurfaceQuery, SurfaceTag, ZoomReason,
};
pub use climb::{ClimbFooting, classify_footing, nearest_climbable};
pub use components::{
    GameLayer, GustZone, LastVelocity, Player, PlayerLocomotion, Surface,
    player_collision_layers, surface_layer_mask,
};
pub use easing::{CurveKey, EasingCurve, ease_towards, lerp, move_towards};
pub use events::{DetachReason, ExternalTransitionRequest, LocomotionEvent};
pub use fatigue::FatigueModel;
pub use input::{HeldInput, InputAction, InputEvent, InputPhase, InputQueue};
pub use machine::{LocomotionSnapshot, LocomotionStateMachine};
pub use resources::{GroundCheck, LocomotionTuning, SpawnPoint};
pub use state::LocomotionState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::locomotion::systems::{drive_player_locomotion, read_input, update_gust_flag};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<SpawnPoint>()
            .add_message::<LocomotionEvent>()
            .add_message::<ExternalTransitionRequest>()
            .add_systems(Update, read_input.run_if(in_state(GameState::Run)))
            .add_systems(
                FixedUpdate,
                (update_gust_flag, drive_player_locomotion)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
