//! Animation domain: the interface to the external animation service.

use crate::animation::params::ParamId;

/// Clip currently playing on a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipInfo {
    /// Clip length in seconds at speed 1.
    pub length: f32,
    /// Playback speed of the state that owns the clip.
    pub speed: f32,
}

impl ClipInfo {
    /// Wall-clock duration of the clip once playback speed is applied.
    pub fn scaled_length(&self) -> f32 {
        self.length / self.speed.max(0.0001)
    }
}

/// State currently active on a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StateInfo {
    pub name: String,
    pub length: f32,
    pub normalized_time: f32,
}

impl StateInfo {
    pub fn is_name(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Operations the controller needs from an animation graph.
///
/// Implementations are expected to ignore writes to parameters they do not
/// declare; callers check [`crate::animation::AnimationParams`] first.
pub trait AnimatorBackend {
    /// Name used in diagnostics (usually the owning entity's name).
    fn owner_name(&self) -> &str;

    /// Every parameter name the graph declares.
    fn parameter_names(&self) -> Vec<String>;

    fn set_trigger(&mut self, id: ParamId);

    fn set_bool(&mut self, id: ParamId, value: bool);

    fn set_float(&mut self, id: ParamId, value: f32);

    fn layer_count(&self) -> usize;

    fn layer_index(&self, name: &str) -> Option<usize>;

    fn set_layer_weight(&mut self, layer: usize, weight: f32);

    /// Clip playing on `layer`, or `None` when the state has no clip.
    fn current_clip(&self, layer: usize) -> Option<ClipInfo>;

    fn current_state(&self, layer: usize) -> Option<StateInfo>;

    fn play_state(&mut self, name: &str, layer: usize, normalized_time: f32);

    fn set_apply_root_motion(&mut self, enabled: bool);
}
