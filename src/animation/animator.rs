//! Animation domain: data-driven animator standing in for the external graph.
//!
//! The animator only tracks which named state each layer is in and how far
//! through it playback is. It does not blend or sample poses.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::animation::backend::{AnimatorBackend, ClipInfo, StateInfo};
use crate::animation::params::ParamId;
use crate::content::{AnimatorDef, LayerDef, ParameterKind};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ParamValue {
    Float(f32),
    Bool(bool),
    Trigger(bool),
}

#[derive(Debug)]
struct LayerRuntime {
    def: LayerDef,
    /// Hashed trigger of each transition, parallel to `def.transitions`.
    triggers: Vec<ParamId>,
    weight: f32,
    current: usize,
    /// Seconds spent in the current state, already scaled by state speed.
    time: f32,
}

impl LayerRuntime {
    fn state_index(&self, name: &str) -> Option<usize> {
        self.def.states.iter().position(|s| s.name == name)
    }

    fn enter(&mut self, index: usize, normalized_time: f32) {
        self.current = index;
        self.time = normalized_time * self.def.states[index].clip_length;
    }
}

/// Animation graph bound to a character.
#[derive(Component, Debug)]
pub struct Animator {
    owner: String,
    names: Vec<String>,
    values: HashMap<ParamId, ParamValue>,
    layers: Vec<LayerRuntime>,
    apply_root_motion: bool,
}

impl Animator {
    pub fn from_def(def: &AnimatorDef, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        let mut values = HashMap::new();
        let mut names = Vec::new();
        for param in &def.parameters {
            let value = match param.kind {
                ParameterKind::Float => ParamValue::Float(0.0),
                ParameterKind::Bool => ParamValue::Bool(false),
                ParameterKind::Trigger => ParamValue::Trigger(false),
            };
            values.insert(ParamId::of(&param.name), value);
            names.push(param.name.clone());
        }

        let mut layers = Vec::new();
        for layer in &def.layers {
            if layer.states.is_empty() {
                warn!("Animator '{}': layer '{}' has no states", owner, layer.name);
                continue;
            }
            let current = layer
                .states
                .iter()
                .position(|s| s.name == layer.default_state)
                .unwrap_or_else(|| {
                    warn!(
                        "Animator '{}': default state '{}' missing on layer '{}'",
                        owner, layer.default_state, layer.name
                    );
                    0
                });
            layers.push(LayerRuntime {
                triggers: layer
                    .transitions
                    .iter()
                    .map(|t| ParamId::of(&t.trigger))
                    .collect(),
                def: layer.clone(),
                weight: if layers.is_empty() { 1.0 } else { 0.0 },
                current,
                time: 0.0,
            });
        }

        Self {
            owner,
            names,
            values,
            layers,
            apply_root_motion: false,
        }
    }

    /// Advance every layer by `dt`: consume pending triggers, move playback
    /// forward, then follow the exit of a finished one-shot state.
    pub fn tick(&mut self, dt: f32) {
        for layer in &mut self.layers {
            let current_name = layer.def.states[layer.current].name.clone();
            let fired = layer
                .def
                .transitions
                .iter()
                .zip(&layer.triggers)
                .find(|(t, trigger)| {
                    t.from.as_deref().is_none_or(|from| from == current_name)
                        && matches!(
                            self.values.get(*trigger),
                            Some(ParamValue::Trigger(true))
                        )
                })
                .map(|(t, trigger)| (t.clone(), *trigger));
            if let Some((transition, trigger)) = fired {
                match layer.state_index(&transition.to) {
                    Some(target) => {
                        self.values.insert(trigger, ParamValue::Trigger(false));
                        layer.enter(target, 0.0);
                        debug!(
                            "Animator '{}': {} -> {} on layer '{}'",
                            self.owner, current_name, transition.to, layer.def.name
                        );
                        continue;
                    }
                    None => warn!(
                        "Animator '{}': transition target '{}' missing on layer '{}'",
                        self.owner, transition.to, layer.def.name
                    ),
                }
            }

            let state = &layer.def.states[layer.current];
            layer.time += dt * state.speed;
            if !state.looping && state.clip_length > 0.0 && layer.time >= state.clip_length {
                if let Some(exit) = state.exit_to.clone() {
                    if let Some(target) = layer.state_index(&exit) {
                        layer.enter(target, 0.0);
                    }
                } else {
                    layer.time = state.clip_length;
                }
            }
        }
    }
}

impl AnimatorBackend for Animator {
    fn owner_name(&self) -> &str {
        &self.owner
    }

    fn parameter_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn set_trigger(&mut self, id: ParamId) {
        if let Some(ParamValue::Trigger(pending)) = self.values.get_mut(&id) {
            *pending = true;
        }
    }

    fn set_bool(&mut self, id: ParamId, value: bool) {
        if let Some(ParamValue::Bool(current)) = self.values.get_mut(&id) {
            *current = value;
        }
    }

    fn set_float(&mut self, id: ParamId, value: f32) {
        if let Some(ParamValue::Float(current)) = self.values.get_mut(&id) {
            *current = value;
        }
    }

    fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.def.name == name)
    }

    fn set_layer_weight(&mut self, layer: usize, weight: f32) {
        if let Some(layer) = self.layers.get_mut(layer) {
            layer.weight = weight.clamp(0.0, 1.0);
        }
    }

    fn current_clip(&self, layer: usize) -> Option<ClipInfo> {
        let layer = self.layers.get(layer)?;
        let state = &layer.def.states[layer.current];
        (state.clip_length > 0.0).then_some(ClipInfo {
            length: state.clip_length,
            speed: state.speed,
        })
    }

    fn current_state(&self, layer: usize) -> Option<StateInfo> {
        let layer = self.layers.get(layer)?;
        let state = &layer.def.states[layer.current];
        let normalized_time = if state.clip_length > 0.0 {
            layer.time / state.clip_length
        } else {
            0.0
        };
        Some(StateInfo {
            name: state.name.clone(),
            length: state.clip_length,
            normalized_time,
        })
    }

    fn play_state(&mut self, name: &str, layer: usize, normalized_time: f32) {
        let Some(runtime) = self.layers.get_mut(layer) else {
            warn!("Animator '{}': no layer {}", self.owner, layer);
            return;
        };
        match runtime.state_index(name) {
            Some(index) => runtime.enter(index, normalized_time),
            None => warn!(
                "Animator '{}': state '{}' not found on layer {}",
                self.owner, name, layer
            ),
        }
    }

    fn set_apply_root_motion(&mut self, enabled: bool) {
        self.apply_root_motion = enabled;
    }
}

#[cfg(test)]
impl Animator {
    pub fn apply_root_motion(&self) -> bool {
        self.apply_root_motion
    }

    pub fn float(&self, id: ParamId) -> Option<f32> {
        match self.values.get(&id) {
            Some(ParamValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn bool(&self, id: ParamId) -> Option<bool> {
        match self.values.get(&id) {
            Some(ParamValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn trigger_pending(&self, id: ParamId) -> bool {
        matches!(self.values.get(&id), Some(ParamValue::Trigger(true)))
    }

    pub fn layer_weight(&self, layer: usize) -> Option<f32> {
        self.layers.get(layer).map(|l| l.weight)
    }

    pub fn current_state_name(&self, layer: usize) -> Option<&str> {
        let layer = self.layers.get(layer)?;
        Some(layer.def.states[layer.current].name.as_str())
    }
}
