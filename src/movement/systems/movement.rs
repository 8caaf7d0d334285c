//! Movement domain: facing, integration and hand-off to the physics body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationBridge, AnimationParams, Animator};
use crate::camera::{OrientationState, yaw_rotation};
use crate::combat::CombatState;
use crate::content::ControllerConfig;
use crate::input::InputSnapshot;
use crate::movement::{MotionState, MoverSample, Player};

type MoverQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Transform,
        &'static mut LinearVelocity,
        &'static mut MotionState,
        &'static mut OrientationState,
        &'static CombatState,
        &'static mut AnimationParams,
        Option<&'static mut Animator>,
    ),
    With<Player>,
>;

pub(crate) fn apply_motion(
    time: Res<Time>,
    input: Res<InputSnapshot>,
    config: Res<ControllerConfig>,
    mut query: MoverQuery,
) {
    let dt = time.delta_secs();

    for (
        mut transform,
        mut velocity,
        mut state,
        mut orientation,
        combat,
        mut params,
        mut animator,
    ) in &mut query
    {
        let attacking = combat.is_attacking;

        // facing is frozen while an attack owns the body
        if !attacking {
            let camera_yaw = orientation.camera_yaw;
            let facing = orientation.update_facing(
                input.move_axis,
                camera_yaw,
                dt,
                config.rotation_smooth_time,
            );
            transform.rotation = yaw_rotation(facing);
        }

        let mover = MoverSample {
            horizontal_speed: Vec2::new(velocity.x, velocity.z).length(),
            heading: orientation.heading(),
        };
        let grounded = state.grounded;
        let frame = state.integrate(&config, &input, grounded, attacking, mover, dt);

        if dt > 0.0 {
            velocity.0 = frame.displacement / dt;
        }

        let mut anim = AnimationBridge::from_animator(animator.as_deref_mut(), &mut params);
        anim.apply_locomotion(&frame.locomotion);
    }
}
