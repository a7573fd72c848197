//! Locomotion domain: named input actions and the per-tick input queue.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Named actions the locomotion core understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Movement axis. `x` steers on the ground and in the air, `y` climbs.
    Move(Vec2),
    Jump,
    Glide,
    Attach,
    /// Carrier-specific interaction (asks the carrier to let go).
    Interact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Pressed,
    Held,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub action: InputAction,
    pub phase: InputPhase,
}

/// Level-triggered view of the buttons, updated as queued edges are drained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeldInput {
    pub axis: Vec2,
    pub jump: bool,
    pub glide: bool,
    pub attach: bool,
}

impl HeldInput {
    /// Record the level change carried by an edge or hold event.
    pub fn apply(&mut self, event: InputEvent) {
        let down = event.phase != InputPhase::Released;
        match event.action {
            InputAction::Move(axis) => {
                self.axis = if down {
                    axis.clamp(Vec2::NEG_ONE, Vec2::ONE)
                } else {
                    Vec2::ZERO
                };
            }
            InputAction::Jump => self.jump = down,
            InputAction::Glide => self.glide = down,
            InputAction::Attach => self.attach = down,
            InputAction::Interact => {}
        }
    }
}

/// FIFO of input events collected between ticks. Each event is handed out exactly once.
#[derive(Debug, Default, Clone)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, action: InputAction, phase: InputPhase) {
        self.events.push_back(InputEvent { action, phase });
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
