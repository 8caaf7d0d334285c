//! Animation domain: translate controller state into graph parameters.

use bevy::prelude::*;

use crate::animation::animator::Animator;
use crate::animation::backend::{AnimatorBackend, StateInfo};
use crate::animation::error::AnimationError;
use crate::animation::params::{AnimParam, AnimationParams};

/// Animation-facing values produced by the motion integrator for one frame.
///
/// `None` means the integrator did not touch that parameter this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionParams {
    pub grounded: bool,
    pub jump: Option<bool>,
    pub free_fall: Option<bool>,
    /// (Speed, MotionSpeed); skipped while an attack holds locomotion.
    pub speed: Option<(f32, f32)>,
}

/// Short-lived view pairing an optional graph with its existence cache.
pub struct AnimationBridge<'a> {
    backend: Option<&'a mut dyn AnimatorBackend>,
    params: &'a mut AnimationParams,
}

impl<'a> AnimationBridge<'a> {
    pub fn bound(
        backend: &'a mut dyn AnimatorBackend,
        params: &'a mut AnimationParams,
    ) -> Self {
        Self {
            backend: Some(backend),
            params,
        }
    }

    pub fn unbound(params: &'a mut AnimationParams) -> Self {
        Self {
            backend: None,
            params,
        }
    }

    /// Bind whatever animator the character currently has, if any.
    pub fn from_animator(
        animator: Option<&'a mut Animator>,
        params: &'a mut AnimationParams,
    ) -> Self {
        match animator {
            Some(animator) => Self::bound(animator, params),
            None => Self::unbound(params),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn ensure_available(&self) -> Result<(), AnimationError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(AnimationError::SubsystemUnavailable)
        }
    }

    fn checked(
        &mut self,
        param: AnimParam,
    ) -> Result<&mut (dyn AnimatorBackend + 'a), AnimationError> {
        let declared = self.params.exists(param);
        let Some(backend) = self.backend.as_deref_mut() else {
            return Err(AnimationError::SubsystemUnavailable);
        };
        if !declared {
            return Err(AnimationError::MissingParameter {
                name: param.name().to_string(),
                owner: backend.owner_name().to_string(),
            });
        }
        Ok(backend)
    }

    pub fn try_trigger(&mut self, param: AnimParam) -> Result<(), AnimationError> {
        self.checked(param)?.set_trigger(param.id());
        Ok(())
    }

    pub fn set_bool(&mut self, param: AnimParam, value: bool) {
        match self.checked(param) {
            Ok(backend) => backend.set_bool(param.id(), value),
            Err(err) => self.report(param, err),
        }
    }

    pub fn set_float(&mut self, param: AnimParam, value: f32) {
        match self.checked(param) {
            Ok(backend) => backend.set_float(param.id(), value),
            Err(err) => self.report(param, err),
        }
    }

    /// Per-frame writes warn once per parameter per binding.
    fn report(&mut self, param: AnimParam, err: AnimationError) {
        if self.params.first_failure(param, &err) {
            warn!("{}", err);
        }
    }

    pub fn set_root_motion(&mut self, enabled: bool) -> Result<(), AnimationError> {
        let backend = self
            .backend
            .as_deref_mut()
            .ok_or(AnimationError::SubsystemUnavailable)?;
        backend.set_apply_root_motion(enabled);
        Ok(())
    }

    /// Push one frame of locomotion values, in the order the graph expects.
    pub fn apply_locomotion(&mut self, locomotion: &LocomotionParams) {
        self.set_bool(AnimParam::Grounded, locomotion.grounded);
        if let Some(jump) = locomotion.jump {
            self.set_bool(AnimParam::Jump, jump);
        }
        if let Some(free_fall) = locomotion.free_fall {
            self.set_bool(AnimParam::FreeFall, free_fall);
        }
        if let Some((speed, motion_speed)) = locomotion.speed {
            self.set_float(AnimParam::Speed, speed);
            self.set_float(AnimParam::MotionSpeed, motion_speed);
        }
    }

    /// Duration of whatever clip the graph is playing now.
    ///
    /// Layers are scanned in order and the first one with a clip wins; the
    /// fallback covers a missing graph or a state without a clip.
    pub fn current_clip_duration(&self, fallback: f32) -> f32 {
        let Some(backend) = self.backend.as_deref() else {
            return fallback;
        };
        let length = (0..backend.layer_count())
            .find_map(|layer| backend.current_clip(layer))
            .map(|clip| clip.scaled_length())
            .unwrap_or(0.0);
        if length > 0.0 { length } else { fallback }
    }

    pub fn current_state(&self, layer: usize) -> Option<StateInfo> {
        self.backend.as_deref()?.current_state(layer)
    }

    pub fn play_state(
        &mut self,
        name: &str,
        layer: usize,
        normalized_time: f32,
    ) -> Result<(), AnimationError> {
        let backend = self
            .backend
            .as_deref_mut()
            .ok_or(AnimationError::SubsystemUnavailable)?;
        backend.play_state(name, layer, normalized_time);
        Ok(())
    }
}

#[cfg(test)]
impl AnimationBridge<'_> {
    pub fn exists(&self, param: AnimParam) -> bool {
        self.is_available() && self.params.exists(param)
    }
}
