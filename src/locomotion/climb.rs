//! Locomotion domain: attaching to bark, climbing with fatigue, and the tree leap.

use bevy::prelude::*;

use crate::locomotion::bridges::{
    AnimTrigger, LocomotionContext, SurfaceHandle, SurfaceMask, SurfaceQuery, SurfaceTag,
};
use crate::locomotion::easing::lerp;
use crate::locomotion::events::{DetachReason, LocomotionEvent};
use crate::locomotion::machine::LocomotionStateMachine;
use crate::locomotion::state::LocomotionState;

/// How the bark under the player behaves this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbFooting {
    Normal,
    /// Constant downward slide, input ignored.
    Moss,
    /// Accelerating downward slide, input still applied.
    Slippery,
}

/// Classify overlapping bark. Normal bark wins over moss, moss over slippery.
pub fn classify_footing(tags: impl IntoIterator<Item = SurfaceTag>) -> Option<ClimbFooting> {
    let mut footing = None;
    for tag in tags {
        footing = match (tag, footing) {
            (SurfaceTag::Climbable, _) => return Some(ClimbFooting::Normal),
            (SurfaceTag::Moss, _) => Some(ClimbFooting::Moss),
            (SurfaceTag::Slippery, None) => Some(ClimbFooting::Slippery),
            (_, current) => current,
        };
    }
    footing
}

/// Nearest climbable surface within `reach` of `point`, with the closest point on it.
pub fn nearest_climbable(
    surfaces: &dyn SurfaceQuery,
    point: Vec2,
    reach: f32,
) -> Option<(SurfaceHandle, Vec2)> {
    surfaces
        .overlap_circle(point, reach, SurfaceMask::CLIMBABLE)
        .into_iter()
        .filter_map(|handle| {
            surfaces
                .closest_point(handle, point)
                .map(|closest| (handle, closest))
        })
        .min_by(|(_, a), (_, b)| {
            a.distance_squared(point)
                .total_cmp(&b.distance_squared(point))
        })
}

impl LocomotionStateMachine {
    /// Grab the nearest bark within reach. Only from `Grounded` or `Falling`, after the
    /// attach cooldown, and with fatigue left.
    pub(super) fn try_attach(&mut self, ctx: &mut LocomotionContext) -> bool {
        if !matches!(
            self.state,
            LocomotionState::Grounded | LocomotionState::Falling
        ) {
            return false;
        }
        if self.attach_cooldown > 0.0 || self.fatigue.is_exhausted() {
            return false;
        }

        let position = ctx.body.position();
        let Some((handle, closest)) =
            nearest_climbable(ctx.surfaces, position, self.tuning.attach_reach)
        else {
            return false;
        };

        self.transition_to(LocomotionState::Climbing, ctx);
        ctx.body.set_position(closest);
        self.climb_surface = Some(handle);
        debug!("Attached to {:?} at {:?}", handle.tag, closest);
        true
    }

    pub(super) fn update_climbing(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        if self.fatigue.is_exhausted() {
            debug!("Climb fatigue maxed, detaching");
            self.detach(DetachReason::Exhausted, ctx);
            return;
        }

        let position = ctx.body.position();
        let reach = self.tuning.climb_reach;
        let overlapping = ctx
            .surfaces
            .overlap_circle(position, reach, SurfaceMask::CLIMBABLE);
        let Some(footing) = classify_footing(overlapping.iter().map(|handle| handle.tag)) else {
            self.detach(DetachReason::LostSurface, ctx);
            return;
        };

        let curve = self.tuning.climb_speed_curve.evaluate(self.fatigue.progress());
        self.climb_speed = lerp(self.current_max_climb_speed, 0.0, curve);
        let step = self.held.axis.clamp_length_max(1.0) * self.climb_speed * dt;

        let next = match footing {
            ClimbFooting::Normal => {
                self.slip_velocity = 0.0;
                position + step
            }
            ClimbFooting::Moss => {
                self.slip_velocity = 0.0;
                position - Vec2::new(0.0, self.tuning.moss_slip_speed * dt)
            }
            ClimbFooting::Slippery => {
                self.slip_velocity += self.tuning.slip_acceleration * dt;
                position + step - Vec2::new(0.0, self.slip_velocity * dt)
            }
        };

        let Some((handle, closest)) = nearest_climbable(ctx.surfaces, next, reach) else {
            self.detach(DetachReason::LostSurface, ctx);
            return;
        };
        let settled = if closest == next {
            next
        } else {
            next.lerp(closest, self.tuning.climb_snap_factor)
        };
        ctx.body.set_position(settled);
        self.climb_surface = Some(handle);

        let progress = self.fatigue.on_climb_tick(dt);
        self.publish_fatigue(progress, ctx);
    }

    fn publish_fatigue(&mut self, progress: f32, ctx: &mut LocomotionContext) {
        ctx.effects.set_climb_particle_rate(progress);
        ctx.effects.set_fatigue_tint(progress);

        let warning = self.tuning.fatigue_warning_threshold;
        if progress >= warning {
            let span = (1.0 - warning).max(f32::EPSILON);
            let strain = ((progress - warning) / span).clamp(0.0, 1.0);
            ctx.effects.set_shake(strain);
            ctx.effects.rumble(strain);
            self.rumbling = true;
        } else if self.rumbling {
            ctx.effects.set_shake(0.0);
            ctx.effects.stop_rumble();
            self.rumbling = false;
        }
    }

    /// Jump off the bark, converting climb speed into horizontal launch speed.
    pub(super) fn tree_leap(&mut self, ctx: &mut LocomotionContext) {
        let direction = if self.held.axis.x != 0.0 {
            self.held.axis.x.signum()
        } else {
            self.facing
        };
        self.facing = direction;
        let horizontal = direction * self.climb_speed * self.tuning.tree_leap_multiplier;

        self.detach(DetachReason::Leap, ctx);

        ctx.body.set_velocity(Vec2::new(horizontal, 0.0));
        ctx.body
            .add_impulse(Vec2::new(0.0, self.tuning.tree_leap_impulse));
        self.jump_buffer_timer = self.tuning.jump_buffer_time;
        self.apply_gravity(ctx);

        ctx.animation.trigger(AnimTrigger::TreeLeap);
        self.events.push(LocomotionEvent::TreeLeapt {
            horizontal_speed: horizontal,
        });
        debug!("Tree leap: vx={}", horizontal);
    }
}
