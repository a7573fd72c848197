//! Locomotion domain: ECS components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::bridges::{SurfaceMask, SurfaceTag};
use crate::locomotion::machine::LocomotionStateMachine;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid floors and platforms
    Ground,
    /// Bark the player can pass through and climb
    Bark,
    /// Thorns and other damaging surfaces
    Hazard,
    /// Wind regions, only ever hit by spatial queries
    Gust,
    /// Player character
    Player,
}

impl GameLayer {
    /// Layer a surface of `tag` is a member of.
    pub fn for_surface(tag: SurfaceTag) -> Self {
        match tag {
            SurfaceTag::Ground => GameLayer::Ground,
            SurfaceTag::Climbable | SurfaceTag::Moss | SurfaceTag::Slippery => GameLayer::Bark,
            SurfaceTag::Hazard => GameLayer::Hazard,
            SurfaceTag::Other => GameLayer::Default,
        }
    }
}

/// Layers a spatial query has to search to find every surface in `mask`.
///
/// Bark kinds share one layer, so callers still filter hits by [`Surface::tag`].
pub fn surface_layer_mask(mask: SurfaceMask) -> LayerMask {
    SurfaceTag::ALL
        .into_iter()
        .filter(|tag| mask.contains(*tag))
        .fold(LayerMask::NONE, |layers, tag| {
            layers | GameLayer::for_surface(tag)
        })
}

/// Layers the player body collides with. Swinging disables the collider outright.
pub fn player_collision_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Player,
        [GameLayer::Ground, GameLayer::Bark, GameLayer::Hazard],
    )
}

#[derive(Component, Debug)]
pub struct Player;

/// The player's locomotion core.
#[derive(Component, Debug)]
pub struct PlayerLocomotion(pub LocomotionStateMachine);

/// Gameplay tag of a level collider. Shape and placement live on the collider itself.
#[derive(Component, Debug, Clone, Copy)]
pub struct Surface {
    pub tag: SurfaceTag,
}

/// Region where gliding uses the gust easing and decay.
#[derive(Component, Debug, Clone, Copy)]
pub struct GustZone;

/// Player velocity at the end of the previous fixed step. The solver has already
/// cancelled the impact by the time a contact starts, so impact speeds are read from here.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct LastVelocity(pub Vec2);
