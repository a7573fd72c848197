//! UI domain: in-run HUD elements and the death banner.

mod death;
mod hud_player;
#[cfg(test)]
mod tests;

pub use hud_player::fatigue_bar_color;

use bevy::prelude::*;

use crate::ui::death::show_death_banner;
use crate::ui::hud_player::{spawn_player_hud, update_fatigue_bar, update_life_pips};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player_hud).add_systems(
            Update,
            (update_life_pips, update_fatigue_bar, show_death_banner),
        );
    }
}
