//! Camera domain: follow camera with reason-tagged forced zoom and fatigue shake.

mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{CameraTuning, ForcedZoom, ZoomRequest};
pub use systems::shake_offset;

use bevy::prelude::*;

use crate::camera::systems::{follow_player_camera, setup_camera};

/// Smoothed camera state. `focus` excludes shake.
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCamera {
    pub focus: Vec2,
    pub zoom: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            focus: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<ForcedZoom>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player_camera);
    }
}
