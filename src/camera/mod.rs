//! Camera domain: orientation solver and the late-pass follow camera.

mod orientation;

#[cfg(test)]
mod tests;

pub use orientation::{
    LOOK_THRESHOLD_SQ, OrientationState, camera_rotation, clamp_angle, delta_angle, heading,
    smooth_damp, smooth_damp_angle, yaw_rotation,
};

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::content::ControllerConfig;
use crate::input::InputSnapshot;
use crate::movement::Player;

/// Pivot the orientation solver writes yaw and pitch to. Child of the player.
#[derive(Component, Debug)]
pub struct CameraTarget;

/// Camera that trails the player's camera target.
#[derive(Component, Debug)]
pub struct FollowCamera;

/// Late-pass ordering for the camera.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraLateSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(PostUpdate, CameraLateSet.before(TransformSystems::Propagate))
            .add_systems(
                PostUpdate,
                (update_camera_target, follow_camera_target)
                    .chain()
                    .in_set(CameraLateSet),
            );
    }
}

/// Apply look input and write the resulting rotation to the camera target.
pub(crate) fn update_camera_target(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    config: Res<ControllerConfig>,
    mut players: Query<(&Transform, &mut OrientationState), (With<Player>, Without<CameraTarget>)>,
    mut targets: Query<(&ChildOf, &mut Transform), With<CameraTarget>>,
) {
    let dt = time.delta_secs();

    for (_, mut orientation) in &mut players {
        orientation.update_camera(input.look, dt, input.pointer_look, &config);
    }

    for (child_of, mut target_transform) in &mut targets {
        let Ok((player_transform, orientation)) = players.get(child_of.parent()) else {
            continue;
        };
        // the target inherits the body's yaw, so cancel it out
        target_transform.rotation =
            player_transform.rotation.inverse() * orientation.camera_rotation(&config);
    }
}

/// Place each follow camera behind its target along the view direction.
pub(crate) fn follow_camera_target(
    config: Res<ControllerConfig>,
    players: Query<(&Transform, &OrientationState), (With<Player>, Without<CameraTarget>)>,
    targets: Query<(&ChildOf, &Transform), (With<CameraTarget>, Without<FollowCamera>)>,
    mut cameras: Query<
        &mut Transform,
        (With<FollowCamera>, Without<CameraTarget>, Without<Player>),
    >,
) {
    let Some((child_of, target_transform)) = targets.iter().next() else {
        return;
    };
    let Ok((player_transform, orientation)) = players.get(child_of.parent()) else {
        return;
    };

    let pivot = player_transform.transform_point(target_transform.translation);
    let rotation = orientation.camera_rotation(&config);

    for mut camera_transform in &mut cameras {
        camera_transform.translation = pivot + rotation * Vec3::Z * config.camera_distance;
        camera_transform.rotation = rotation;
    }
}
