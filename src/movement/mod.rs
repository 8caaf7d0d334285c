//! Movement domain: grounding, locomotion integration and the player body.

mod bootstrap;
mod components;
mod grounding;
mod integrator;
pub(crate) mod systems;


pub use components::{GameLayer, MotionState, Player};
pub use grounding::{GroundProbe, check_grounded, ground_mask, probe_center};
pub use integrator::{
    BLEND_FLOOR, GROUNDED_VELOCITY, MotionFrame, MoverSample, SPEED_OFFSET, has_move_input,
    jump_velocity, lerp, round_to_millis,
};

use bevy::prelude::*;

use crate::core::ControllerSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bootstrap::spawn_player)
            .add_systems(
                Update,
                systems::detect_ground.in_set(ControllerSet::Grounding),
            )
            .add_systems(Update, systems::apply_motion.in_set(ControllerSet::Motion));
    }
}
