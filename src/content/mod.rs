//! Content domain: data-driven controller tuning and animator graph.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    AnimatorDef, ControllerConfig, LayerDef, ParameterDef, ParameterKind, StateDef, TransitionDef,
};
pub use loader::{ContentLoadError, load_animator_def, load_controller_config, parse_single};

use bevy::prelude::*;
use std::path::Path;

const DATA_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .init_resource::<AnimatorDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Replace the built-in defaults with whatever assets/data provides.
/// A missing or malformed file keeps the defaults and logs why.
fn load_content(mut config: ResMut<ControllerConfig>, mut animator: ResMut<AnimatorDef>) {
    let base = Path::new(DATA_PATH);

    match load_controller_config(base) {
        Ok(loaded) => {
            info!(
                "Controller config loaded: move={} sprint={} jump_height={} gravity={}",
                loaded.move_speed, loaded.sprint_speed, loaded.jump_height, loaded.gravity
            );
            *config = loaded;
        }
        Err(e) => warn!("{}; using default controller config", e),
    }

    match load_animator_def(base) {
        Ok(loaded) => {
            info!(
                "Animator graph loaded: {} parameters, {} layers",
                loaded.parameters.len(),
                loaded.layers.len()
            );
            *animator = loaded;
        }
        Err(e) => warn!("{}; using default animator graph", e),
    }
}
