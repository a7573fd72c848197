//! Locomotion domain: the player state machine.
//!
//! Owns the active [`LocomotionState`], every locomotion timer, the input queue and the
//! survival bookkeeping. Per-state handlers live in `handlers.rs` and `climb.rs`; this file
//! holds the tick pipeline, transitions and the request entry points.

use bevy::prelude::*;
use serde::Serialize;

use crate::core::sanitize_delta;
use crate::locomotion::bridges::{
    AnimFlag, AnimTrigger, AnimationBridge, AxisFreeze, CollisionContact, LocomotionContext,
    SurfaceHandle, SurfaceTag, ZoomReason,
};
use crate::locomotion::events::{DetachReason, LocomotionEvent};
use crate::locomotion::fatigue::FatigueModel;
use crate::locomotion::input::{HeldInput, InputAction, InputPhase, InputQueue};
use crate::locomotion::resources::LocomotionTuning;
use crate::locomotion::state::LocomotionState;
use crate::survival::{
    DamageOutcome, SurvivalBridge, SurvivalRequest, SurvivalState, SurvivalTuning,
};

/// Serializable view of the machine for debugging dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocomotionSnapshot {
    pub state: LocomotionState,
    pub facing: f32,
    pub jump_buffer_timer: f32,
    pub queued_jump_timer: f32,
    pub attach_cooldown: f32,
    pub slip_velocity: f32,
    pub climb_speed: f32,
    pub fatigue: f32,
    pub max_fatigue: f32,
    pub lives: u32,
    pub invulnerability_timer: f32,
    pub stun_timer: f32,
    pub in_gust: bool,
}

#[derive(Debug, Clone)]
pub struct LocomotionStateMachine {
    pub(super) tuning: LocomotionTuning,
    pub(super) state: LocomotionState,
    /// `1.0` facing right, `-1.0` facing left.
    pub(super) facing: f32,
    pub(super) held: HeldInput,
    pub(super) input: InputQueue,

    pub(super) jump_buffer_timer: f32,
    pub(super) queued_jump_timer: f32,
    pub(super) attach_cooldown: f32,
    pub(super) slip_velocity: f32,
    pub(super) current_max_climb_speed: f32,
    pub(super) climb_speed: f32,
    pub(super) climb_surface: Option<SurfaceHandle>,
    pub(super) detach_reason: Option<DetachReason>,
    pub(super) rumbling: bool,

    pub(super) fatigue: FatigueModel,
    pub(super) survival: SurvivalState,
    pub(super) flashing: bool,

    pub(super) in_gust: bool,
    /// Glide or side-speed zoom this machine currently holds.
    pub(super) motion_zoom: Option<ZoomReason>,

    pub(super) pending_external: Option<LocomotionState>,
    pub(super) pending_survival: Vec<SurvivalRequest>,
    pub(super) events: Vec<LocomotionEvent>,
}

impl LocomotionStateMachine {
    pub fn new(tuning: LocomotionTuning, survival: SurvivalTuning) -> Self {
        if tuning.ground_check.is_none() {
            warn!("Locomotion: no ground check configured, landing relies on collisions only");
        }

        Self {
            fatigue: FatigueModel::new(tuning.max_climb_time, tuning.fatigue_recover_rate),
            current_max_climb_speed: tuning.max_climb_speed,
            climb_speed: 0.0,
            tuning,
            state: LocomotionState::Grounded,
            facing: 1.0,
            held: HeldInput::default(),
            input: InputQueue::default(),
            jump_buffer_timer: 0.0,
            queued_jump_timer: 0.0,
            attach_cooldown: 0.0,
            slip_velocity: 0.0,
            climb_surface: None,
            detach_reason: None,
            rumbling: false,
            survival: SurvivalState::new(survival),
            flashing: false,
            in_gust: false,
            motion_zoom: None,
            pending_external: None,
            pending_survival: Vec::new(),
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn held(&self) -> HeldInput {
        self.held
    }

    pub fn jump_buffer_timer(&self) -> f32 {
        self.jump_buffer_timer
    }

    pub fn queued_jump_timer(&self) -> f32 {
        self.queued_jump_timer
    }

    pub fn attach_cooldown(&self) -> f32 {
        self.attach_cooldown
    }

    pub fn slip_velocity(&self) -> f32 {
        self.slip_velocity
    }

    /// Climb speed computed on the most recent climbing tick.
    pub fn climb_speed(&self) -> f32 {
        self.climb_speed
    }

    pub fn current_max_climb_speed(&self) -> f32 {
        self.current_max_climb_speed
    }

    pub fn climb_surface(&self) -> Option<SurfaceHandle> {
        self.climb_surface
    }

    pub fn fatigue(&self) -> &FatigueModel {
        &self.fatigue
    }

    pub fn survival(&self) -> &SurvivalState {
        &self.survival
    }

    pub fn in_gust(&self) -> bool {
        self.in_gust
    }

    /// Wind zone flag, owned by level collaborators.
    pub fn set_gust(&mut self, in_gust: bool) {
        self.in_gust = in_gust;
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    pub fn snapshot(&self) -> LocomotionSnapshot {
        LocomotionSnapshot {
            state: self.state,
            facing: self.facing,
            jump_buffer_timer: self.jump_buffer_timer,
            queued_jump_timer: self.queued_jump_timer,
            attach_cooldown: self.attach_cooldown,
            slip_velocity: self.slip_velocity,
            climb_speed: self.climb_speed,
            fatigue: self.fatigue.value(),
            max_fatigue: self.fatigue.max(),
            lives: self.survival.lives(),
            invulnerability_timer: self.survival.invulnerability_timer(),
            stun_timer: self.survival.stun_timer(),
            in_gust: self.in_gust,
        }
    }

    // ------------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------------

    /// Queue an input edge. Nothing happens until the next [`Self::tick`].
    pub fn handle_input(&mut self, action: InputAction, phase: InputPhase) {
        self.input.push(action, phase);
    }

    /// Ask for a carrier/vine takeover (`RidingCarrier`, `Swinging`) or hand-back
    /// (`Falling`). Applied at the start of the next tick. Rejected while stunned.
    pub fn request_external_transition(&mut self, target: LocomotionState) -> bool {
        if self.state == LocomotionState::Stunned {
            return false;
        }
        if !matches!(
            target,
            LocomotionState::RidingCarrier | LocomotionState::Swinging | LocomotionState::Falling
        ) {
            return false;
        }
        self.pending_external = Some(target);
        true
    }

    /// Outgoing notifications since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<LocomotionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one simulation step.
    pub fn tick(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        let dt = sanitize_delta(dt);

        self.advance_timers(dt, ctx);
        self.apply_survival_requests(ctx);
        self.apply_external_request(ctx);
        self.drain_input(ctx);

        // A zero-length step is a pause: requests and input are consumed, nothing integrates.
        if dt > 0.0 {
            self.run_state_handler(dt, ctx);
        }

        self.apply_gravity(ctx);
    }

    /// Contact reported by the integrator. Handled immediately so it wins over this
    /// step's input.
    pub fn on_collision(&mut self, contact: CollisionContact, ctx: &mut LocomotionContext) {
        match contact.tag {
            SurfaceTag::Hazard => {
                if self.state != LocomotionState::Stunned
                    && contact.relative_speed() > self.tuning.hazard_speed_threshold
                {
                    let direction = if contact.relative_velocity != Vec2::ZERO {
                        contact.relative_velocity
                    } else {
                        contact.normal
                    };
                    self.damage(direction, self.tuning.hazard_knockback, ctx);
                }
            }
            SurfaceTag::Ground => {
                let standable = contact.normal.y >= self.tuning.ground_normal_min;
                if standable && self.state.is_airborne() && self.jump_buffer_timer <= 0.0 {
                    if self.state == LocomotionState::Gliding {
                        self.transition_to(LocomotionState::Falling, ctx);
                    }
                    self.land(ctx);
                }
            }
            tag if tag.is_climbable() => {
                // Fast impacts never stun on bark; they just don't auto-attach.
                if self.held.attach && contact.relative_speed() <= self.tuning.auto_attach_max_speed
                {
                    self.try_attach(ctx);
                }
            }
            _ => {}
        }
    }

    /// Lose a life (unless invulnerable), get knocked back along `direction` and stunned.
    pub fn damage(
        &mut self,
        direction: Vec2,
        magnitude: f32,
        ctx: &mut LocomotionContext,
    ) -> DamageOutcome {
        let outcome = self.survival.damage();
        match outcome {
            DamageOutcome::Ignored => return outcome,
            DamageOutcome::Hurt { lives_remaining } => {
                self.events.push(LocomotionEvent::Damaged { lives_remaining });
            }
            DamageOutcome::Killed => {
                info!("Player lost the last life, level reload pending");
                self.events
                    .push(LocomotionEvent::Damaged { lives_remaining: 0 });
                self.events.push(LocomotionEvent::Died);
            }
        }

        ctx.animation.trigger(AnimTrigger::Hurt);
        self.enter_stun(ctx);

        let impulse = direction.normalize_or_zero() * magnitude;
        ctx.body.set_velocity(Vec2::ZERO);
        ctx.body.add_impulse(impulse);
        debug!("Knockback impulse {:?}", impulse);

        outcome
    }

    /// Stun without losing a life. Returns false when invulnerable.
    pub fn stun(&mut self, ctx: &mut LocomotionContext) -> bool {
        if !self.survival.stun() {
            return false;
        }
        self.enter_stun(ctx);
        true
    }

    /// A zero-length stun window has already elapsed, so the machine passes straight
    /// through `Stunned`. The dead stay stunned until the reload.
    fn enter_stun(&mut self, ctx: &mut LocomotionContext) {
        self.transition_to(LocomotionState::Stunned, ctx);
        if !self.survival.is_stunned() && !self.survival.is_dead() {
            self.transition_to(LocomotionState::Falling, ctx);
        }
    }

    /// Level reload: back to `Grounded` with fresh timers, fatigue and lives, and every
    /// constraint this machine may have set released.
    pub fn reset(&mut self, ctx: &mut LocomotionContext) {
        let from = self.state;

        ctx.body.set_collider_enabled(true);
        ctx.body.set_axis_freeze(AxisFreeze::ROTATION);
        ctx.body.set_velocity(Vec2::ZERO);
        for reason in [ZoomReason::Glide, ZoomReason::SideSpeed, ZoomReason::Carrier] {
            ctx.camera.end_forced_zoom(reason);
        }
        ctx.effects.set_climb_particle_rate(0.0);
        ctx.effects.set_fatigue_tint(0.0);
        ctx.effects.set_shake(0.0);
        ctx.effects.stop_rumble();
        ctx.effects.play_stun_vfx(false);
        ctx.effects.set_opacity(1.0);

        self.state = LocomotionState::Grounded;
        self.held = HeldInput::default();
        self.input.clear();
        self.jump_buffer_timer = 0.0;
        self.queued_jump_timer = 0.0;
        self.attach_cooldown = 0.0;
        self.slip_velocity = 0.0;
        self.current_max_climb_speed = self.tuning.max_climb_speed;
        self.climb_speed = 0.0;
        self.climb_surface = None;
        self.detach_reason = None;
        self.rumbling = false;
        self.fatigue.reset();
        self.survival.reset();
        self.flashing = false;
        self.in_gust = false;
        self.motion_zoom = None;
        self.pending_external = None;
        self.pending_survival.clear();

        if from != LocomotionState::Grounded {
            self.events.push(LocomotionEvent::StateChanged {
                from,
                to: LocomotionState::Grounded,
            });
        }
        self.apply_gravity(ctx);
        self.publish_flags(ctx.animation);
        info!("Locomotion reset");
    }

    // ------------------------------------------------------------------------
    // Tick pipeline
    // ------------------------------------------------------------------------

    fn advance_timers(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        self.queued_jump_timer = (self.queued_jump_timer - dt).max(0.0);
        self.attach_cooldown = (self.attach_cooldown - dt).max(0.0);

        if !self.fatigue.is_climbing() && self.fatigue.value() > 0.0 {
            self.fatigue.tick(dt);
            ctx.effects.set_fatigue_tint(self.fatigue.progress());
        }

        let report = self.survival.tick(dt);

        match self.survival.flash_opacity() {
            Some(alpha) => {
                ctx.effects.set_opacity(alpha);
                self.flashing = true;
            }
            None if self.flashing => {
                ctx.effects.set_opacity(1.0);
                self.flashing = false;
            }
            None => {}
        }

        if report.stun_ended
            && self.state == LocomotionState::Stunned
            && !self.survival.is_dead()
        {
            self.transition_to(LocomotionState::Falling, ctx);
        }

        if report.reload_due {
            info!("Level reload requested");
            self.events.push(LocomotionEvent::LevelReloadRequested);
        }
    }

    fn apply_survival_requests(&mut self, ctx: &mut LocomotionContext) {
        for request in std::mem::take(&mut self.pending_survival) {
            match request {
                SurvivalRequest::Damage { impulse } => {
                    self.damage(impulse, impulse.length(), ctx);
                }
                SurvivalRequest::Stun => {
                    self.stun(ctx);
                }
            }
        }
    }

    fn apply_external_request(&mut self, ctx: &mut LocomotionContext) {
        let Some(target) = self.pending_external.take() else {
            return;
        };

        if self.state == LocomotionState::Stunned {
            debug!("External transition to {:?} dropped while stunned", target);
            return;
        }

        match target {
            LocomotionState::Falling => {
                if self.state.is_externally_driven() {
                    self.transition_to(LocomotionState::Falling, ctx);
                }
            }
            LocomotionState::RidingCarrier | LocomotionState::Swinging => {
                self.transition_to(target, ctx);
            }
            _ => {}
        }
    }

    fn drain_input(&mut self, ctx: &mut LocomotionContext) {
        while let Some(event) = self.input.pop() {
            self.held.apply(event);

            if !self.state.accepts_voluntary_input() {
                self.handle_release_request(event.action, event.phase);
                continue;
            }

            match (event.action, event.phase) {
                (InputAction::Move(axis), InputPhase::Pressed | InputPhase::Held) => {
                    if axis.x != 0.0 {
                        self.facing = axis.x.signum();
                    }
                }
                (InputAction::Jump, InputPhase::Pressed) => self.on_jump_pressed(ctx),
                (InputAction::Glide, InputPhase::Pressed) => {
                    if self.state == LocomotionState::Falling && ctx.body.velocity().y < 0.0 {
                        self.transition_to(LocomotionState::Gliding, ctx);
                    }
                }
                (InputAction::Glide, InputPhase::Released) => {
                    if self.state == LocomotionState::Gliding {
                        self.transition_to(LocomotionState::Falling, ctx);
                    }
                }
                (InputAction::Attach, InputPhase::Pressed) => {
                    self.try_attach(ctx);
                }
                (InputAction::Attach, InputPhase::Released) => {
                    if self.state == LocomotionState::Climbing {
                        self.detach(DetachReason::Released, ctx);
                    }
                }
                _ => {}
            }
        }
    }

    fn handle_release_request(&mut self, action: InputAction, phase: InputPhase) {
        if phase != InputPhase::Pressed {
            return;
        }
        match (self.state, action) {
            (LocomotionState::RidingCarrier, InputAction::Interact) => {
                self.events.push(LocomotionEvent::CarrierReleaseRequested);
            }
            (LocomotionState::Swinging, InputAction::Jump) => {
                self.events.push(LocomotionEvent::SwingReleaseRequested);
            }
            _ => {}
        }
    }

    fn on_jump_pressed(&mut self, ctx: &mut LocomotionContext) {
        match self.state {
            LocomotionState::Grounded => self.jump(ctx),
            LocomotionState::Climbing => self.tree_leap(ctx),
            LocomotionState::Falling | LocomotionState::Gliding => {
                self.queued_jump_timer = self.tuning.jump_grace_time;
            }
            _ => {}
        }
    }

    fn run_state_handler(&mut self, dt: f32, ctx: &mut LocomotionContext) {
        match self.state {
            LocomotionState::Grounded => self.update_grounded(ctx),
            LocomotionState::Falling => self.update_falling(dt, ctx),
            LocomotionState::Gliding => self.update_gliding(dt, ctx),
            LocomotionState::Climbing => self.update_climbing(dt, ctx),
            // Survival timers already advanced; carriers and vines own the body.
            LocomotionState::Stunned
            | LocomotionState::RidingCarrier
            | LocomotionState::Swinging => {}
        }
    }

    pub(super) fn apply_gravity(&self, ctx: &mut LocomotionContext) {
        let vy = ctx.body.velocity().y;
        ctx.body
            .set_gravity_scale(self.state.gravity_scale(&self.tuning, vy));
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Atomic transition: exit logic, swap, enter logic, gravity, notification.
    pub(super) fn transition_to(&mut self, next: LocomotionState, ctx: &mut LocomotionContext) {
        if next == self.state {
            return;
        }

        let from = self.state;
        self.exit_state(from, ctx);
        self.state = next;
        self.enter_state(from, next, ctx);
        self.apply_gravity(ctx);

        debug!("Locomotion: {:?} -> {:?}", from, next);
        self.events
            .push(LocomotionEvent::StateChanged { from, to: next });
        self.publish_flags(ctx.animation);
    }

    /// Leave the climb for `Falling`, recording why.
    pub(super) fn detach(&mut self, reason: DetachReason, ctx: &mut LocomotionContext) {
        self.detach_reason = Some(reason);
        self.transition_to(LocomotionState::Falling, ctx);
    }

    fn exit_state(&mut self, from: LocomotionState, ctx: &mut LocomotionContext) {
        match from {
            LocomotionState::Climbing => {
                let reason = self
                    .detach_reason
                    .take()
                    .unwrap_or(DetachReason::Interrupted);
                self.fatigue.on_climb_end();
                self.climb_surface = None;
                self.slip_velocity = 0.0;
                self.attach_cooldown = self.tuning.attach_cooldown;
                ctx.body.set_axis_freeze(AxisFreeze::ROTATION);
                ctx.effects.set_climb_particle_rate(0.0);
                ctx.effects.set_shake(0.0);
                if self.rumbling {
                    ctx.effects.stop_rumble();
                    self.rumbling = false;
                }
                self.events.push(LocomotionEvent::ClimbDetached { reason });
            }
            LocomotionState::Swinging => {
                ctx.body.set_collider_enabled(true);
                self.attach_cooldown = self.tuning.attach_cooldown;
            }
            LocomotionState::RidingCarrier => {
                ctx.camera.end_forced_zoom(ZoomReason::Carrier);
            }
            LocomotionState::Falling | LocomotionState::Gliding => {
                self.release_motion_zoom(ctx);
            }
            LocomotionState::Stunned => {
                ctx.effects.play_stun_vfx(false);
            }
            LocomotionState::Grounded => {}
        }
    }

    fn enter_state(
        &mut self,
        from: LocomotionState,
        next: LocomotionState,
        ctx: &mut LocomotionContext,
    ) {
        match next {
            LocomotionState::Grounded => {
                self.fatigue.reset();
                self.in_gust = false;
                self.slip_velocity = 0.0;
                let velocity = ctx.body.velocity();
                ctx.body.set_velocity(Vec2::new(velocity.x, 0.0));
                ctx.effects.set_fatigue_tint(0.0);
                if from.is_airborne() {
                    ctx.animation.trigger(AnimTrigger::Land);
                    self.events.push(LocomotionEvent::Landed);
                }
            }
            LocomotionState::Climbing => {
                ctx.body.set_velocity(Vec2::ZERO);
                ctx.body.set_axis_freeze(AxisFreeze::ALL);
                self.fatigue.on_climb_start();
                self.current_max_climb_speed = self.tuning.max_climb_speed;
                self.climb_speed = self.current_max_climb_speed;
                self.slip_velocity = 0.0;
                self.events.push(LocomotionEvent::ClimbAttached);
            }
            LocomotionState::RidingCarrier => {
                ctx.body.set_velocity(Vec2::ZERO);
                ctx.camera
                    .start_forced_zoom(self.tuning.carrier_zoom, ZoomReason::Carrier);
            }
            LocomotionState::Swinging => {
                ctx.body.set_collider_enabled(false);
            }
            LocomotionState::Stunned => {
                ctx.effects.play_stun_vfx(true);
                self.events.push(LocomotionEvent::Stunned);
            }
            LocomotionState::Falling | LocomotionState::Gliding => {}
        }
    }

    pub(super) fn publish_flags(&self, animation: &mut dyn AnimationBridge) {
        let flags = [
            (AnimFlag::IsGrounded, LocomotionState::Grounded),
            (AnimFlag::IsFalling, LocomotionState::Falling),
            (AnimFlag::IsGliding, LocomotionState::Gliding),
            (AnimFlag::IsClimbing, LocomotionState::Climbing),
            (AnimFlag::IsRiding, LocomotionState::RidingCarrier),
            (AnimFlag::IsSwinging, LocomotionState::Swinging),
            (AnimFlag::IsStunned, LocomotionState::Stunned),
        ];
        for (flag, state) in flags {
            animation.set_flag(flag, self.state == state);
        }
    }
}

/// Requests are queued and applied at the start of the next tick.
impl SurvivalBridge for LocomotionStateMachine {
    fn request_damage(&mut self, impulse: Vec2) {
        self.pending_survival
            .push(SurvivalRequest::Damage { impulse });
    }

    fn request_stun(&mut self) {
        self.pending_survival.push(SurvivalRequest::Stun);
    }
}
