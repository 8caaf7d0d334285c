//! Recording animation graph for unit tests.

use crate::animation::{AnimParam, AnimatorBackend, ClipInfo, ParamId, StateInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Trigger(ParamId),
    Bool(ParamId, bool),
    Float(ParamId, f32),
    PlayState(String, usize, f32),
    RootMotion(bool),
    LayerWeight(usize, f32),
}

#[derive(Debug, Clone)]
pub struct MockLayer {
    pub name: String,
    pub state: String,
    pub clip: Option<ClipInfo>,
}

#[derive(Debug, Clone)]
pub struct RecordingAnimator {
    pub params: Vec<String>,
    pub layers: Vec<MockLayer>,
    pub calls: Vec<Call>,
}

impl RecordingAnimator {
    /// Graph declaring every controller parameter, with a base layer and a
    /// combat layer playing `combat_state`.
    pub fn full(combat_state: &str, clip: Option<ClipInfo>) -> Self {
        Self {
            params: AnimParam::ALL.iter().map(|p| p.name().to_string()).collect(),
            layers: vec![
                MockLayer {
                    name: "Base Layer".to_string(),
                    state: "Idle Walk Run Blend".to_string(),
                    clip: None,
                },
                MockLayer {
                    name: "Combat Layer".to_string(),
                    state: combat_state.to_string(),
                    clip,
                },
            ],
            calls: Vec::new(),
        }
    }

    pub fn without(mut self, param: AnimParam) -> Self {
        self.params.retain(|name| name != param.name());
        self
    }

    pub fn triggers(&self) -> Vec<ParamId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Trigger(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn play_calls(&self) -> Vec<(String, usize)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::PlayState(name, layer, _) => Some((name.clone(), *layer)),
                _ => None,
            })
            .collect()
    }

    pub fn last_root_motion(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::RootMotion(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl AnimatorBackend for RecordingAnimator {
    fn owner_name(&self) -> &str {
        "TestCharacter"
    }

    fn parameter_names(&self) -> Vec<String> {
        self.params.clone()
    }

    fn set_trigger(&mut self, id: ParamId) {
        self.calls.push(Call::Trigger(id));
    }

    fn set_bool(&mut self, id: ParamId, value: bool) {
        self.calls.push(Call::Bool(id, value));
    }

    fn set_float(&mut self, id: ParamId, value: f32) {
        self.calls.push(Call::Float(id, value));
    }

    fn layer_count(&self) -> usize {
        self.layers.len()
    }

    fn layer_index(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name == name)
    }

    fn set_layer_weight(&mut self, layer: usize, weight: f32) {
        self.calls.push(Call::LayerWeight(layer, weight));
    }

    fn current_clip(&self, layer: usize) -> Option<ClipInfo> {
        self.layers.get(layer)?.clip
    }

    fn current_state(&self, layer: usize) -> Option<StateInfo> {
        let layer = self.layers.get(layer)?;
        Some(StateInfo {
            name: layer.state.clone(),
            length: layer.clip.map(|c| c.length).unwrap_or(0.0),
            normalized_time: 0.0,
        })
    }

    fn play_state(&mut self, name: &str, layer: usize, normalized_time: f32) {
        self.calls
            .push(Call::PlayState(name.to_string(), layer, normalized_time));
    }

    fn set_apply_root_motion(&mut self, enabled: bool) {
        self.calls.push(Call::RootMotion(enabled));
    }
}
