//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::ControllerConfig;
use crate::movement::{MotionState, Player, check_grounded};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    mut query: Query<(&Transform, &mut MotionState), With<Player>>,
) {
    for (transform, mut state) in &mut query {
        let was_grounded = state.grounded;
        state.grounded = check_grounded(&spatial_query, transform.translation, &config);

        if state.grounded && !was_grounded {
            debug!(
                "Landed: vertical_velocity={:.3}, y={:.3}",
                state.vertical_velocity, transform.translation.y
            );
        } else if !state.grounded && was_grounded {
            debug!(
                "Left ground: vertical_velocity={:.3}, y={:.3}",
                state.vertical_velocity, transform.translation.y
            );
        }
    }
}
