//! Locomotion domain: keyboard sampling into the player's input queue.

use bevy::prelude::*;

use crate::locomotion::{InputAction, InputPhase, Player, PlayerLocomotion};

const BUTTONS: [(InputAction, [KeyCode; 2]); 4] = [
    (InputAction::Jump, [KeyCode::Space, KeyCode::KeyK]),
    (InputAction::Glide, [KeyCode::ShiftLeft, KeyCode::KeyL]),
    (InputAction::Attach, [KeyCode::KeyJ, KeyCode::ControlLeft]),
    (InputAction::Interact, [KeyCode::KeyE, KeyCode::Enter]),
];

/// True on the frame the first of `keys` goes down.
pub(crate) fn first_pressed(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> bool {
    keyboard.any_just_pressed(keys)
        && keys
            .iter()
            .all(|key| !keyboard.pressed(*key) || keyboard.just_pressed(*key))
}

/// True on the frame the last held key of `keys` comes up.
pub(crate) fn last_released(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> bool {
    keyboard.any_just_released(keys) && !keyboard.any_pressed(keys)
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut last_axis: Local<Vec2>,
    mut player: Query<&mut PlayerLocomotion, With<Player>>,
) {
    let Ok(mut locomotion) = player.single_mut() else {
        return;
    };

    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis drives climbing
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let axis = Vec2::new(x, y);
    if axis != *last_axis {
        let phase = if axis == Vec2::ZERO {
            InputPhase::Released
        } else {
            InputPhase::Pressed
        };
        locomotion.0.handle_input(InputAction::Move(axis), phase);
        *last_axis = axis;
    }

    for (action, keys) in BUTTONS {
        if first_pressed(&keyboard, keys) {
            locomotion.0.handle_input(action, InputPhase::Pressed);
        }
        if last_released(&keyboard, keys) {
            locomotion.0.handle_input(action, InputPhase::Released);
        }
    }
}
