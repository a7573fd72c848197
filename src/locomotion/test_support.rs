//! Hand-written collaborators for driving the state machine without an engine.

use bevy::prelude::*;

use crate::camera::ForcedZoom;
use crate::feedback::{AnimationFlags, PlayerFeedback};
use crate::locomotion::{
    AxisFreeze, LocomotionContext, PhysicsBody, RaycastHit, SurfaceHandle, SurfaceMask,
    SurfaceQuery, SurfaceTag,
};

pub const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Rigid body that only stores what it is told. Nothing integrates between ticks.
#[derive(Debug, Clone)]
pub struct FakeBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub gravity_scale: f32,
    pub axis_freeze: AxisFreeze,
    pub collider_enabled: bool,
    pub impulses: Vec<Vec2>,
}

impl FakeBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            gravity_scale: 1.0,
            axis_freeze: AxisFreeze::ROTATION,
            collider_enabled: true,
            impulses: Vec::new(),
        }
    }
}

impl PhysicsBody for FakeBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn add_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.velocity += impulse / self.mass;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn set_axis_freeze(&mut self, freeze: AxisFreeze) {
        self.axis_freeze = freeze;
    }

    fn set_collider_enabled(&mut self, enabled: bool) {
        self.collider_enabled = enabled;
    }
}

// ============================================================================
// Surfaces
// ============================================================================

/// One tagged axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub handle: SurfaceHandle,
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl SurfaceRect {
    pub fn new(id: u64, tag: SurfaceTag, center: Vec2, half_extents: Vec2) -> Self {
        Self {
            handle: SurfaceHandle { id, tag },
            center,
            half_extents: half_extents.abs(),
        }
    }

    fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.center - self.half_extents, self.center + self.half_extents)
    }

    /// Slab test: entry distance and the normal of the face hit.
    fn ray_entry(&self, origin: Vec2, direction: Vec2) -> Option<(f32, Vec2)> {
        let (min, max) = (self.center - self.half_extents, self.center + self.half_extents);
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut normal = Vec2::ZERO;

        for axis in 0..2 {
            let (o, d) = (origin[axis], direction[axis]);
            if d.abs() <= f32::EPSILON {
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let (t0, t1) = {
                let a = (min[axis] - o) / d;
                let b = (max[axis] - o) / d;
                (a.min(b), a.max(b))
            };
            if t0 > t_near {
                t_near = t0;
                normal = Vec2::ZERO;
                normal[axis] = -d.signum();
            }
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }
        if t_near < 0.0 {
            return Some((0.0, Vec2::ZERO));
        }
        Some((t_near, normal))
    }
}

/// Linear-scan stand-in for the avian spatial pipeline.
#[derive(Debug, Clone, Default)]
pub struct AabbSurfaces {
    rects: Vec<SurfaceRect>,
}

impl AabbSurfaces {
    pub fn new(rects: Vec<SurfaceRect>) -> Self {
        Self { rects }
    }
}

impl SurfaceQuery for AabbSurfaces {
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: SurfaceMask) -> Vec<SurfaceHandle> {
        let radius = radius.max(0.0);
        self.rects
            .iter()
            .filter(|rect| mask.contains(rect.handle.tag))
            .filter(|rect| rect.clamp_point(point).distance_squared(point) <= radius * radius)
            .map(|rect| rect.handle)
            .collect()
    }

    fn closest_point(&self, handle: SurfaceHandle, point: Vec2) -> Option<Vec2> {
        self.rects
            .iter()
            .find(|rect| rect.handle == handle)
            .map(|rect| rect.clamp_point(point))
    }

    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: SurfaceMask,
    ) -> Option<RaycastHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec2::ZERO || max_distance < 0.0 {
            return None;
        }

        self.rects
            .iter()
            .filter(|rect| mask.contains(rect.handle.tag))
            .filter_map(|rect| {
                let (distance, normal) = rect.ray_entry(origin, direction)?;
                (distance <= max_distance).then_some(RaycastHit {
                    handle: rect.handle,
                    point: origin + direction * distance,
                    normal,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Ground slab whose top face sits at `y = -25`, just under a player standing at the origin.
pub fn ground() -> SurfaceRect {
    SurfaceRect::new(1, SurfaceTag::Ground, Vec2::new(0.0, -50.0), Vec2::new(150.0, 25.0))
}

/// Tall trunk spanning `x = 390..410`, `y = 0..800`, well away from the ground.
pub fn trunk(id: u64, tag: SurfaceTag) -> SurfaceRect {
    SurfaceRect::new(id, tag, Vec2::new(400.0, 400.0), Vec2::new(10.0, 400.0))
}

/// A body plus real feedback/camera sinks and a fake spatial world.
pub struct Rig {
    pub body: FakeBody,
    pub surfaces: AabbSurfaces,
    pub effects: PlayerFeedback,
    pub animation: AnimationFlags,
    pub camera: ForcedZoom,
}

impl Rig {
    pub fn new(position: Vec2, surfaces: Vec<SurfaceRect>) -> Self {
        Self {
            body: FakeBody::at(position),
            surfaces: AabbSurfaces::new(surfaces),
            effects: PlayerFeedback::default(),
            animation: AnimationFlags::default(),
            camera: ForcedZoom::new(1.0),
        }
    }

    /// Standing on [`ground`] at the origin.
    pub fn on_ground() -> Self {
        Self::new(Vec2::ZERO, vec![ground()])
    }

    /// Mid-air with nothing below.
    pub fn in_air() -> Self {
        Self::new(Vec2::new(0.0, 300.0), vec![ground()])
    }

    /// Just left of a trunk of `tag`, within attach reach and clear of the ground.
    pub fn beside_trunk(tag: SurfaceTag) -> Self {
        Self::new(Vec2::new(385.0, 300.0), vec![ground(), trunk(2, tag)])
    }

    pub fn ctx(&mut self) -> LocomotionContext<'_> {
        LocomotionContext {
            body: &mut self.body,
            surfaces: &self.surfaces,
            effects: &mut self.effects,
            animation: &mut self.animation,
            camera: &mut self.camera,
        }
    }
}
