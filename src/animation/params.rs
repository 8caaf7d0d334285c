//! Animation domain: parameter names, hashed ids and the existence cache.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::animation::backend::AnimatorBackend;
use crate::animation::error::AnimationError;

/// Hashed animation parameter name (FNV-1a, 32 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(u32);

impl ParamId {
    pub const fn of(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash: u32 = 0x811c_9dc5;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u32;
            hash = hash.wrapping_mul(0x0100_0193);
            i += 1;
        }
        Self(hash)
    }
}

/// The fixed parameter table the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    Speed,
    Grounded,
    Jump,
    FreeFall,
    MotionSpeed,
    DrawWeapon,
    SheathWeapon,
    Attack,
    Move,
}

const PARAM_IDS: [ParamId; 9] = [
    ParamId::of("Speed"),
    ParamId::of("Grounded"),
    ParamId::of("Jump"),
    ParamId::of("FreeFall"),
    ParamId::of("MotionSpeed"),
    ParamId::of("drawWeapon"),
    ParamId::of("sheathWeapon"),
    ParamId::of("attack"),
    ParamId::of("move"),
];

impl AnimParam {
    #[cfg(test)]
    pub const ALL: [AnimParam; 9] = [
        AnimParam::Speed,
        AnimParam::Grounded,
        AnimParam::Jump,
        AnimParam::FreeFall,
        AnimParam::MotionSpeed,
        AnimParam::DrawWeapon,
        AnimParam::SheathWeapon,
        AnimParam::Attack,
        AnimParam::Move,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AnimParam::Speed => "Speed",
            AnimParam::Grounded => "Grounded",
            AnimParam::Jump => "Jump",
            AnimParam::FreeFall => "FreeFall",
            AnimParam::MotionSpeed => "MotionSpeed",
            AnimParam::DrawWeapon => "drawWeapon",
            AnimParam::SheathWeapon => "sheathWeapon",
            AnimParam::Attack => "attack",
            AnimParam::Move => "move",
        }
    }

    /// Precomputed hash of [`AnimParam::name`].
    pub const fn id(self) -> ParamId {
        PARAM_IDS[self as usize]
    }
}

/// Which parameters the bound graph actually declares.
///
/// Rebuilt whenever an animator is bound to the character; every hot-path
/// lookup goes through the hashed set rather than comparing names.
///
/// Also remembers which write failures were already reported, so each
/// missing parameter warns once per binding instead of once per frame.
#[derive(Component, Debug, Default)]
pub struct AnimationParams {
    declared: HashSet<ParamId>,
    owner: String,
    warned: HashSet<ParamId>,
    warned_unavailable: bool,
}

impl AnimationParams {
    pub fn rebuild(&mut self, backend: &dyn AnimatorBackend) {
        self.declared = backend
            .parameter_names()
            .iter()
            .map(|name| ParamId::of(name))
            .collect();
        self.owner = backend.owner_name().to_string();
        self.forget_warnings();
    }

    pub fn clear(&mut self) {
        self.declared.clear();
        self.owner.clear();
        self.forget_warnings();
    }

    fn forget_warnings(&mut self) {
        self.warned.clear();
        self.warned_unavailable = false;
    }

    pub fn exists(&self, param: AnimParam) -> bool {
        self.declared.contains(&param.id())
    }

    /// Record a failed write to `param`; true only the first time this
    /// binding sees it. A missing graph is tracked once for all parameters.
    pub fn first_failure(&mut self, param: AnimParam, err: &AnimationError) -> bool {
        match err {
            AnimationError::SubsystemUnavailable => {
                !std::mem::replace(&mut self.warned_unavailable, true)
            }
            _ => self.warned.insert(param.id()),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }
}

#[cfg(test)]
impl AnimationParams {
    pub fn from_backend(backend: &dyn AnimatorBackend) -> Self {
        let mut params = Self::default();
        params.rebuild(backend);
        params
    }

    pub fn exists_named(&self, name: &str) -> bool {
        self.declared.contains(&ParamId::of(name))
    }

    pub fn warned(&self, param: AnimParam) -> bool {
        self.warned.contains(&param.id())
    }
}
