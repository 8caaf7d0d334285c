//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Every field has a serde default,
//! so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

// ============================================================================
// Controller tuning (controller.ron)
// ============================================================================

/// Author-tunable controller settings, fixed for the session.
///
/// Ranges are an authoring contract and are not checked at runtime:
/// `rotation_smooth_time` in [0, 0.3], `gravity` negative, timeouts >= 0.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    // Player
    /// Move speed in m/s
    pub move_speed: f32,
    /// Sprint speed in m/s
    pub sprint_speed: f32,
    /// How fast the character turns to face the movement direction
    pub rotation_smooth_time: f32,
    /// Acceleration and deceleration
    pub speed_change_rate: f32,
    pub jump_height: f32,
    /// The controller applies its own gravity instead of the physics engine's
    pub gravity: f32,
    /// Time before the character can jump again; 0 allows an instant re-jump
    pub jump_timeout: f32,
    /// Time airborne before entering free fall; smooths walking down stairs
    pub fall_timeout: f32,
    pub terminal_velocity: f32,

    // Grounding
    /// Probe centre offset from the feet; negative lifts it above them
    pub grounded_offset: f32,
    pub grounded_radius: f32,
    pub ground_layers: Vec<GameLayer>,
    pub character_height: f32,
    pub character_radius: f32,

    // Camera
    /// How far in degrees the camera can look up
    pub camera_top_clamp: f32,
    /// How far in degrees the camera can look down
    pub camera_bottom_clamp: f32,
    /// Extra pitch added on top of the clamped value
    pub camera_angle_override: f32,
    pub lock_camera_position: bool,
    pub camera_distance: f32,
    pub camera_target_height: f32,

    // Combat
    /// Exact name of the animator layer holding combat states
    pub combat_layer_name: String,
    pub combat_layer_weight: f32,
    /// State forced on the combat layer when an attack fails to exit on its own
    pub combat_idle_state: String,
    pub fallback_attack_duration: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            sprint_speed: 5.335,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            gravity: -15.0,
            jump_timeout: 0.5,
            fall_timeout: 0.15,
            terminal_velocity: 53.0,
            grounded_offset: -0.14,
            grounded_radius: 0.28,
            ground_layers: vec![GameLayer::Ground],
            character_height: 1.8,
            character_radius: 0.28,
            camera_top_clamp: 70.0,
            camera_bottom_clamp: -30.0,
            camera_angle_override: 0.0,
            lock_camera_position: false,
            camera_distance: 4.0,
            camera_target_height: 1.4,
            combat_layer_name: "Combat Layer".to_string(),
            combat_layer_weight: 1.0,
            combat_idle_state: "Combat Blend Tree".to_string(),
            fallback_attack_duration: 0.6,
        }
    }
}

// ============================================================================
// Animator graph (animator.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ParameterKind {
    Float,
    Bool,
    Trigger,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParameterDef {
    pub name: String,
    pub kind: ParameterKind,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateDef {
    pub name: String,
    /// Clip length in seconds; 0 for states without a single clip (blend trees)
    #[serde(default)]
    pub clip_length: f32,
    #[serde(default = "default_state_speed")]
    pub speed: f32,
    #[serde(default = "default_looping")]
    pub looping: bool,
    /// State entered when a one-shot clip finishes
    #[serde(default)]
    pub exit_to: Option<String>,
}

fn default_state_speed() -> f32 {
    1.0
}

fn default_looping() -> bool {
    true
}

/// Trigger-driven transition; `from: None` means any state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransitionDef {
    pub trigger: String,
    #[serde(default)]
    pub from: Option<String>,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayerDef {
    pub name: String,
    pub default_state: String,
    pub states: Vec<StateDef>,
    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct AnimatorDef {
    pub parameters: Vec<ParameterDef>,
    pub layers: Vec<LayerDef>,
}

impl Default for AnimatorDef {
    fn default() -> Self {
        let param = |name: &str, kind| ParameterDef {
            name: name.to_string(),
            kind,
        };
        let state = |name: &str, clip_length: f32, looping: bool, exit_to: Option<&str>| StateDef {
            name: name.to_string(),
            clip_length,
            speed: 1.0,
            looping,
            exit_to: exit_to.map(str::to_string),
        };
        let transition = |trigger: &str, from: Option<&str>, to: &str| TransitionDef {
            trigger: trigger.to_string(),
            from: from.map(str::to_string),
            to: to.to_string(),
        };

        Self {
            parameters: vec![
                param("Speed", ParameterKind::Float),
                param("MotionSpeed", ParameterKind::Float),
                param("Grounded", ParameterKind::Bool),
                param("Jump", ParameterKind::Bool),
                param("FreeFall", ParameterKind::Bool),
                param("drawWeapon", ParameterKind::Trigger),
                param("sheathWeapon", ParameterKind::Trigger),
                param("attack", ParameterKind::Trigger),
                param("move", ParameterKind::Trigger),
            ],
            layers: vec![
                LayerDef {
                    name: "Base Layer".to_string(),
                    default_state: "Idle Walk Run Blend".to_string(),
                    states: vec![state("Idle Walk Run Blend", 0.0, true, None)],
                    transitions: Vec::new(),
                },
                LayerDef {
                    name: "Combat Layer".to_string(),
                    default_state: "Combat Blend Tree".to_string(),
                    states: vec![
                        state("Combat Blend Tree", 0.0, true, None),
                        state("Draw Weapon", 0.8, false, Some("Combat Blend Tree")),
                        state("Sheath Weapon", 0.8, false, Some("Combat Blend Tree")),
                        state("Slash", 0.9, false, None),
                    ],
                    transitions: vec![
                        transition("drawWeapon", None, "Draw Weapon"),
                        transition("sheathWeapon", None, "Sheath Weapon"),
                        transition("attack", None, "Slash"),
                        transition("move", None, "Combat Blend Tree"),
                    ],
                },
            ],
        }
    }
}
