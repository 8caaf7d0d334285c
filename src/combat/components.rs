//! Combat domain: combat mode and attack task state.

use bevy::prelude::*;

/// Where a suspended attack is in its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackPhase {
    /// Give the graph one frame to enter the attack state
    WaitingOneFrame,
    /// Waiting out the attack clip
    WaitingClipDuration { remaining: f32 },
}

/// The single in-flight attack. Chaining replaces it rather than running two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackTask {
    pub phase: AttackPhase,
}

impl AttackTask {
    pub fn new() -> Self {
        Self {
            phase: AttackPhase::WaitingOneFrame,
        }
    }
}

impl Default for AttackTask {
    fn default() -> Self {
        Self::new()
    }
}

/// Combat mode, attack flags and the suspended attack task.
///
/// `queued_attack` is only ever set while `is_attacking` is true.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CombatState {
    pub in_combat: bool,
    pub is_attacking: bool,
    pub queued_attack: bool,
    /// Animator layer holding combat states; `None` when the graph lacks it
    pub combat_layer: Option<usize>,
    pub task: Option<AttackTask>,
}

/// Outcome of an attack press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRequest {
    NotInCombat,
    Started,
    Queued,
    /// A follow-up was already buffered; the press is dropped
    AlreadyQueued,
}

/// Outcome of an attack task resuming after its wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResume {
    /// The queued follow-up started immediately
    Chained,
    /// Control returned to locomotion
    Finished,
    /// The animator went away mid-attack; all attack state was dropped
    Aborted,
}
