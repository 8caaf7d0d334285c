//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Hook for an animation backend's clip-end event on attack clips.
///
/// Resumes the suspended attack without waiting out the measured timer.
/// The built-in [`Animator`](crate::animation::Animator) has no clip events
/// and never sends this; a backend that does should write one per finished
/// attack clip. Without it the timer alone completes the attack.
#[derive(Debug, Clone, Copy)]
pub struct AttackFinishedSignal {
    pub entity: Entity,
}

impl Message for AttackFinishedSignal {}
