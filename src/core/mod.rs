//! Core domain: frame ordering and the test arena.

mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

/// Per-frame controller passes, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample devices into the input snapshot
    Input,
    /// Probe for ground contact
    Grounding,
    /// Advance the attack task and handle combat input
    Combat,
    /// Facing, speed, jump and gravity
    Motion,
    /// Step the animation graph
    Animation,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        configure_controller_sets(app);
        app.add_systems(Startup, (systems::spawn_arena, systems::spawn_camera));
    }
}

pub(crate) fn configure_controller_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            ControllerSet::Input,
            ControllerSet::Grounding,
            ControllerSet::Combat,
            ControllerSet::Motion,
            ControllerSet::Animation,
        )
            .chain(),
    );
}
