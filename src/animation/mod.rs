//! Animation domain: parameter bridge to the character's animation graph.

mod animator;
mod backend;
mod bridge;
mod error;
mod params;

#[cfg(test)]
pub(crate) mod testing;

pub use animator::Animator;
pub use backend::{AnimatorBackend, ClipInfo, StateInfo};
pub use bridge::{AnimationBridge, LocomotionParams};
pub use error::AnimationError;
pub use params::{AnimParam, AnimationParams, ParamId};

use bevy::prelude::*;

use crate::combat::CombatState;
use crate::content::ControllerConfig;
use crate::core::ControllerSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (bind_animation_params, unbind_animation_params)
                .chain()
                .before(ControllerSet::Combat),
        )
        .add_systems(Update, tick_animators.in_set(ControllerSet::Animation));
    }
}

/// Resolve the combat layer and its weight for a graph.
pub fn bind_combat_layer(
    backend: &mut dyn AnimatorBackend,
    config: &ControllerConfig,
) -> Result<usize, AnimationError> {
    let layer = backend
        .layer_index(&config.combat_layer_name)
        .ok_or_else(|| AnimationError::MissingLayer {
            name: config.combat_layer_name.clone(),
        })?;
    backend.set_layer_weight(layer, config.combat_layer_weight);
    Ok(layer)
}

/// Rebuild the parameter cache whenever a graph is (re)bound.
pub(crate) fn bind_animation_params(
    config: Res<ControllerConfig>,
    mut query: Query<
        (&mut Animator, &mut AnimationParams, Option<&mut CombatState>),
        Added<Animator>,
    >,
) {
    for (mut animator, mut params, combat) in &mut query {
        params.rebuild(&*animator);

        let layer = match bind_combat_layer(&mut *animator, &config) {
            Ok(layer) => Some(layer),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };
        if let Some(mut combat) = combat {
            combat.combat_layer = layer;
        }

        info!(
            "Animator bound on '{}': {} parameters, combat layer {:?}",
            params.owner(),
            params.declared_count(),
            layer
        );
    }
}

pub(crate) fn unbind_animation_params(
    mut removed: RemovedComponents<Animator>,
    mut query: Query<&mut AnimationParams>,
) {
    for entity in removed.read() {
        if let Ok(mut params) = query.get_mut(entity) {
            warn!("Animator removed from '{}'", params.owner());
            params.clear();
        }
    }
}

pub(crate) fn tick_animators(time: Res<Time>, mut query: Query<&mut Animator>) {
    let dt = time.delta_secs();
    for mut animator in &mut query {
        animator.tick(dt);
    }
}
