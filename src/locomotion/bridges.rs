//! Locomotion domain: collaborator contracts consumed by the state machine.
//!
//! The core never owns a rigid body, a spatial index, a camera or a renderer. It talks to
//! them through these traits, handed in per call as a [`LocomotionContext`]. In the app the
//! traits are implemented by avian2d/ECS adapters; in tests by plain fakes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Surfaces
// ============================================================================

/// Gameplay tag attached to every surface collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceTag {
    #[default]
    Ground,
    /// Normal climbable bark.
    Climbable,
    /// Climbable, but the player slides down at a constant rate.
    Moss,
    /// Climbable, but the player accelerates downward unless normal bark overlaps.
    Slippery,
    /// Stuns and damages on fast contact.
    Hazard,
    Other,
}

impl SurfaceTag {
    pub const ALL: [SurfaceTag; 6] = [
        SurfaceTag::Ground,
        SurfaceTag::Climbable,
        SurfaceTag::Moss,
        SurfaceTag::Slippery,
        SurfaceTag::Hazard,
        SurfaceTag::Other,
    ];

    pub fn is_climbable(self) -> bool {
        matches!(
            self,
            SurfaceTag::Climbable | SurfaceTag::Moss | SurfaceTag::Slippery
        )
    }

    pub const fn mask(self) -> SurfaceMask {
        SurfaceMask(match self {
            SurfaceTag::Ground => 1 << 0,
            SurfaceTag::Climbable => 1 << 1,
            SurfaceTag::Moss => 1 << 2,
            SurfaceTag::Slippery => 1 << 3,
            SurfaceTag::Hazard => 1 << 4,
            SurfaceTag::Other => 1 << 5,
        })
    }
}

/// Bit set of [`SurfaceTag`]s used to filter queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceMask(pub u32);

impl SurfaceMask {
    pub const NONE: Self = Self(0);
    pub const GROUND: Self = SurfaceTag::Ground.mask();
    pub const CLIMBABLE: Self = Self(
        SurfaceTag::Climbable.mask().0 | SurfaceTag::Moss.mask().0 | SurfaceTag::Slippery.mask().0,
    );
    pub const HAZARD: Self = SurfaceTag::Hazard.mask();

    pub const fn contains(self, tag: SurfaceTag) -> bool {
        self.0 & tag.mask().0 != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Opaque reference to a surface known to a [`SurfaceQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle {
    pub id: u64,
    pub tag: SurfaceTag,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub handle: SurfaceHandle,
    pub point: Vec2,
    pub normal: Vec2,
    pub distance: f32,
}

/// Spatial queries over tagged surfaces.
pub trait SurfaceQuery {
    /// Surfaces matching `mask` whose shape lies within `radius` of `point`.
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: SurfaceMask) -> Vec<SurfaceHandle>;

    /// Closest point on (or inside) the surface. `None` when the handle is stale.
    fn closest_point(&self, handle: SurfaceHandle, point: Vec2) -> Option<Vec2>;

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: SurfaceMask,
    ) -> Option<RaycastHit>;
}

// ============================================================================
// Physics body
// ============================================================================

/// Which degrees of freedom the integrator must leave alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisFreeze {
    pub translation_x: bool,
    pub translation_y: bool,
    pub rotation: bool,
}

impl AxisFreeze {
    /// Free flight: only rotation is locked.
    pub const ROTATION: Self = Self {
        translation_x: false,
        translation_y: false,
        rotation: true,
    };
    /// Pinned: position is driven by the state machine alone.
    pub const ALL: Self = Self {
        translation_x: true,
        translation_y: true,
        rotation: true,
    };
}

/// The rigid body the locomotion core steers.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change of momentum: `velocity += impulse / mass`.
    fn add_impulse(&mut self, impulse: Vec2);
    fn mass(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    fn set_axis_freeze(&mut self, freeze: AxisFreeze);
    fn set_collider_enabled(&mut self, enabled: bool);
}

/// Contact reported by the integrator when a collision begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionContact {
    /// Contact normal pointing from the surface toward the player.
    pub normal: Vec2,
    /// Velocity of the surface relative to the player. For static surfaces this is the
    /// player's velocity negated, so launching along it pushes the player back out.
    pub relative_velocity: Vec2,
    pub tag: SurfaceTag,
}

impl CollisionContact {
    pub fn relative_speed(&self) -> f32 {
        self.relative_velocity.length()
    }
}

// ============================================================================
// One-way notification bridges
// ============================================================================

/// Fire-and-forget visual/haptic feedback. Nothing here may feed back into locomotion.
pub trait EffectsBridge {
    fn set_climb_particle_rate(&mut self, t: f32);
    fn set_fatigue_tint(&mut self, t: f32);
    fn set_shake(&mut self, t: f32);
    fn rumble(&mut self, t: f32);
    fn stop_rumble(&mut self);
    fn play_stun_vfx(&mut self, on: bool);
    /// Invulnerability flash, `1.0` is fully opaque.
    fn set_opacity(&mut self, alpha: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFlag {
    IsGrounded,
    IsFalling,
    IsGliding,
    IsClimbing,
    IsRiding,
    IsSwinging,
    IsStunned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Jump,
    TreeLeap,
    Land,
    Hurt,
}

/// Semantic animation parameters. Rendering owns their interpretation.
pub trait AnimationBridge {
    fn set_flag(&mut self, flag: AnimFlag, value: bool);
    fn trigger(&mut self, trigger: AnimTrigger);
}

/// Why a forced zoom was requested. Each reason owns at most one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomReason {
    Glide,
    SideSpeed,
    Carrier,
}

pub trait CameraBridge {
    fn start_forced_zoom(&mut self, amount: f32, reason: ZoomReason);
    fn end_forced_zoom(&mut self, reason: ZoomReason);
}

// ============================================================================
// Context
// ============================================================================

/// Collaborators lent to the state machine for the duration of one call.
pub struct LocomotionContext<'a> {
    pub body: &'a mut dyn PhysicsBody,
    pub surfaces: &'a dyn SurfaceQuery,
    pub effects: &'a mut dyn EffectsBridge,
    pub animation: &'a mut dyn AnimationBridge,
    pub camera: &'a mut dyn CameraBridge,
}
