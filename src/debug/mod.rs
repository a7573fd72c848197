//! Debug domain: dev-tools overlay and hotkeys for exercising the locomotion core.
//!
//! - F1 toggles the locomotion info overlay
//! - F2/F3/F4 send carrier, vine and release requests
//! - F5/F6 send damage and stun requests
//! - F7 logs the player's snapshot as JSON

mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use state::{DEBUG_HOTKEYS, DebugAction, DebugState};
pub use systems::snapshot_json;
pub use ui::format_overlay;

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
