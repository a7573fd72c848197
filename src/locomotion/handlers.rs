//! Locomotion domain: ground, air and glide handlers.

use bevy::prelude::*;

use crate::locomotion::bridges::{AnimTrigger, LocomotionContext, SurfaceMask, ZoomReason};
use crate::locomotion::easing::{ease_towards, move_towards};
use crate::locomotion::events::LocomotionEvent;
use crate::locomotion::machine::LocomotionStateMachine;
use crate::locomotion::state::LocomotionState;

impl LocomotionStateMachine {
    pub(super) fn jump(&mut self, ctx: &mut LocomotionContext) {
        self.transition_to(LocomotionState::Falling, ctx);

        ctx.body.set_velocity(Vec2::ZERO);
        ctx.body.add_impulse(Vec2::new(0.0, self.tuning.jump_impulse));
        self.jump_buffer_timer = self.tuning.jump_buffer_time;
        self.queued_jump_timer = 0.0;
        self.apply_gravity(ctx);

        ctx.animation.trigger(AnimTrigger::Jump);
        self.events.push(LocomotionEvent::Jumped);
        debug!("Jump: vy={}", ctx.body.velocity().y);
    }

    /// Touch down, firing a jump pressed shortly before landing.
    pub(super) fn land(&mut self, ctx: &mut LocomotionContext) {
        self.transition_to(LocomotionState::Grounded, ctx);
        if self.queued_jump_timer > 0.0 {
            self.jump(ctx);
        }
    }

    /// Ray straight down from the feet. Always false without a configured ground check.
    pub(super) fn ground_detected(&self, ctx: &LocomotionContext) -> bool {
        let Some(ray) = self.tuning.ground_check else {
            return false;
        };
        let origin = ctx.body.position() + Vec2::new(ray.offset.0, ray.offset.1);
        ctx.surfaces
            .raycast(origin, Vec2::NEG_Y, ray.distance, SurfaceMask::GROUND)
            .is_some()
    }

    pub(super) fn update_grounded(&mut self, ctx: &mut LocomotionContext) {
        if self.tuning.ground_check.is_some() && !self.ground_detected(ctx) {
            debug!("Walked off a ledge");
            self.transition_to(LocomotionState::Falling, ctx);
            return;
        }

        let axis = self.held.axis.x;
        if axis == 0.0 {
            ctx.body.set_velocity(Vec2::ZERO);
        } else {
            let velocity = ctx.body.velocity();
            ctx.body
                .set_velocity(Vec2::new(axis * self.tuning.ground_speed, velocity.y));
        }
    }

    pub(super) fn update_falling(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        let velocity = ctx.body.velocity();
        let target = self.held.axis.x * self.tuning.air_speed;
        let mut vx = velocity.x;

        if target != 0.0 {
            if vx * target < 0.0 {
                vx = move_towards(vx, target, self.tuning.air_control_accel * dt);
            } else if target.abs() > vx.abs() {
                vx = target;
            }
        }
        ctx.body.set_velocity(Vec2::new(vx, velocity.y));

        if self.held.glide && velocity.y < 0.0 {
            self.transition_to(LocomotionState::Gliding, ctx);
            return;
        }

        if velocity.y <= 0.0 && self.jump_buffer_timer <= 0.0 && self.ground_detected(ctx) {
            self.land(ctx);
            return;
        }

        self.update_motion_zoom(ZoomReason::SideSpeed, vx, self.tuning.speed_zoom, ctx);
    }

    pub(super) fn update_gliding(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        let mut velocity = ctx.body.velocity();

        if velocity.y < 0.0 || self.in_gust {
            let rate = if self.in_gust {
                self.tuning.gust_ease_rate
            } else {
                self.tuning.glide_ease_rate
            };
            let cap = self.facing * self.tuning.glide_cap;
            velocity.x = ease_towards(velocity.x, cap, rate, dt);
        }

        velocity.y *= if self.in_gust {
            self.tuning.gust_vertical_decay
        } else {
            self.tuning.glide_vertical_decay
        };
        ctx.body.set_velocity(velocity);

        if velocity.y >= 0.0 || !self.held.glide || self.ground_detected(ctx) {
            self.transition_to(LocomotionState::Falling, ctx);
            return;
        }

        self.update_motion_zoom(ZoomReason::Glide, velocity.x, self.tuning.speed_zoom, ctx);
    }

    /// Hold `reason`'s zoom while horizontal speed is above the threshold.
    fn update_motion_zoom(
        &mut self,
        reason: ZoomReason,
        horizontal_speed: f32,
        amount: f32,
        ctx: &mut LocomotionContext,
    ) {
        let fast = horizontal_speed.abs() > self.tuning.zoom_speed_threshold;
        match (fast, self.motion_zoom) {
            (true, Some(active)) if active == reason => {}
            (true, _) => {
                self.release_motion_zoom(ctx);
                ctx.camera.start_forced_zoom(amount, reason);
                self.motion_zoom = Some(reason);
            }
            (false, Some(_)) => self.release_motion_zoom(ctx),
            (false, None) => {}
        }
    }

    pub(super) fn release_motion_zoom(&mut self, ctx: &mut LocomotionContext) {
        if let Some(reason) = self.motion_zoom.take() {
            ctx.camera.end_forced_zoom(reason);
        }
    }
}
