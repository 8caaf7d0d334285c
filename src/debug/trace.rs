//! Debug domain: serializable snapshot of one controller frame.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::OrientationState;
use crate::combat::CombatState;
use crate::movement::MotionState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub frame: u64,
    pub time: f32,
    pub position: [f32; 3],
    pub grounded: bool,
    pub free_fall: bool,
    pub vertical_velocity: f32,
    pub speed: f32,
    pub animation_blend: f32,
    pub facing_yaw: f32,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
    pub in_combat: bool,
    pub is_attacking: bool,
    pub queued_attack: bool,
}

impl TraceRecord {
    pub fn capture(
        frame: u64,
        time: f32,
        translation: Vec3,
        motion: &MotionState,
        orientation: &OrientationState,
        combat: &CombatState,
    ) -> Self {
        Self {
            frame,
            time,
            position: translation.to_array(),
            grounded: motion.grounded,
            free_fall: motion.is_free_falling(),
            vertical_velocity: motion.vertical_velocity,
            speed: motion.speed,
            animation_blend: motion.animation_blend,
            facing_yaw: orientation.facing_yaw,
            camera_yaw: orientation.camera_yaw,
            camera_pitch: orientation.camera_pitch,
            in_combat: combat.in_combat,
            is_attacking: combat.is_attacking,
            queued_attack: combat.queued_attack,
        }
    }

    /// One JSON object terminated by a newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
