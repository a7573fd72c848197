//! Core domain: app flow systems.

use bevy::prelude::*;

use crate::core::state::GameState;

/// Escape toggles between `Run` and `Paused`. Fixed-step systems only run in `Run`, so a
/// paused game advances no locomotion or survival timer.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Run => {
            info!("Gameplay paused");
            next_state.set(GameState::Paused);
        }
        GameState::Paused => {
            info!("Gameplay resumed");
            next_state.set(GameState::Run);
        }
        GameState::Boot => {}
    }
}
