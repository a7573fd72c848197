//! Content domain: RON tuning loaded at startup into the simulation resources.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning_file, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::camera::ForcedZoom;
use crate::core::GameState;

/// Where the tuning file is read from.
#[derive(Resource, Debug, Clone)]
pub struct TuningPath(pub PathBuf);

impl Default for TuningPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data/player_tuning.ron"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningPath>()
            .add_systems(Startup, load_player_tuning);
    }
}

/// Load, validate and install the tuning, then start the run. Falls back to defaults
/// rather than aborting.
fn load_player_tuning(
    mut commands: Commands,
    path: Res<TuningPath>,
    mut forced_zoom: ResMut<ForcedZoom>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let file = match load_tuning_file(&path.0) {
        Ok(file) => {
            let errors = validate_tuning(&file);
            if errors.is_empty() {
                info!("Loaded player tuning from {}", path.0.display());
                file
            } else {
                for error in &errors {
                    warn!("Tuning validation: {}", error);
                }
                warn!(
                    "{} invalid tuning value(s), using defaults",
                    errors.len()
                );
                TuningFile::default()
            }
        }
        Err(e) => {
            error!("{}", e);
            warn!("Using default player tuning");
            TuningFile::default()
        }
    };

    forced_zoom.set_default_zoom(file.camera.default_zoom);
    commands.insert_resource(file.locomotion);
    commands.insert_resource(file.survival);
    commands.insert_resource(file.camera);
    next_state.set(GameState::Run);
}
