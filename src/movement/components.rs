//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::ControllerConfig;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ramps)
    Ground,
    /// Player character
    Player,
    /// Sensors and triggers - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Locomotion state owned by the motion integrator.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MotionState {
    pub grounded: bool,
    pub vertical_velocity: f32,
    /// Horizontal speed handed to the mover this frame.
    pub speed: f32,
    /// Smoothed speed fed to the locomotion blend.
    pub animation_blend: f32,
    pub jump_timeout_remaining: f32,
    pub fall_timeout_remaining: f32,
    /// Latched jump request: set on press, cleared on release or while airborne.
    pub jump_requested: bool,
}

impl MotionState {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            grounded: true,
            vertical_velocity: 0.0,
            speed: 0.0,
            animation_blend: 0.0,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
            jump_requested: false,
        }
    }

    /// True once the fall timeout has run out while airborne.
    pub fn is_free_falling(&self) -> bool {
        !self.grounded && self.fall_timeout_remaining <= 0.0
    }
}
