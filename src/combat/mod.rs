//! Combat domain: combat mode, chained attacks and the attack task.

mod components;
mod events;
mod sequencer;
mod systems;


pub use components::{AttackPhase, AttackRequest, AttackResume, AttackTask, CombatState};
pub use events::AttackFinishedSignal;

use bevy::prelude::*;

use crate::core::ControllerSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AttackFinishedSignal>()
            .add_systems(Update, systems::update_combat.in_set(ControllerSet::Combat));
    }
}
