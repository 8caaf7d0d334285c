//! Camera domain: facing and camera orientation math.
//!
//! All angles are degrees. Yaw 0 looks down world forward (-Z), positive yaw
//! turns right, positive pitch looks down. Quaternions only appear in the
//! helpers at the bottom of this file.

use bevy::prelude::*;

use crate::content::ControllerConfig;

/// Squared magnitude a look vector must reach before it moves the camera.
pub const LOOK_THRESHOLD_SQ: f32 = 0.01 * 0.01;

/// Facing and camera angles, mutated only by the orientation systems.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct OrientationState {
    /// Yaw the character is turning toward
    pub target_rotation: f32,
    /// Smoothing derivative for `facing_yaw`
    pub rotation_velocity: f32,
    /// Yaw the character body currently faces
    pub facing_yaw: f32,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
}

impl OrientationState {
    pub fn new(facing_yaw: f32) -> Self {
        Self {
            target_rotation: facing_yaw,
            facing_yaw,
            camera_yaw: facing_yaw,
            ..default()
        }
    }

    /// Accumulate look input into camera yaw and pitch.
    ///
    /// Pointer deltas are already per-frame amounts; stick deltas are rates
    /// and get scaled by `dt`.
    pub fn update_camera(
        &mut self,
        look: Vec2,
        dt: f32,
        pointer: bool,
        config: &ControllerConfig,
    ) -> (f32, f32) {
        if look.length_squared() >= LOOK_THRESHOLD_SQ && !config.lock_camera_position {
            let multiplier = if pointer { 1.0 } else { dt };
            self.camera_yaw += look.x * multiplier;
            self.camera_pitch += look.y * multiplier;
        }

        self.camera_yaw = clamp_angle(self.camera_yaw, f32::MIN, f32::MAX);
        self.camera_pitch = clamp_angle(
            self.camera_pitch,
            config.camera_bottom_clamp,
            config.camera_top_clamp,
        );

        (self.camera_yaw, self.camera_pitch)
    }

    /// Turn toward the camera-relative move direction. No input keeps the
    /// current facing.
    pub fn update_facing(
        &mut self,
        move_axis: Vec2,
        camera_yaw: f32,
        dt: f32,
        smooth_time: f32,
    ) -> f32 {
        if move_axis != Vec2::ZERO {
            let direction = move_axis.normalize_or_zero();
            self.target_rotation = direction.x.atan2(direction.y).to_degrees() + camera_yaw;
            self.facing_yaw = smooth_damp_angle(
                self.facing_yaw,
                self.target_rotation,
                &mut self.rotation_velocity,
                smooth_time,
                dt,
            );
        }
        self.facing_yaw
    }

    /// World direction the character moves toward this frame.
    pub fn heading(&self) -> Vec3 {
        heading(self.target_rotation)
    }

    pub fn camera_rotation(&self, config: &ControllerConfig) -> Quat {
        camera_rotation(
            self.camera_yaw,
            self.camera_pitch + config.camera_angle_override,
        )
    }
}

// ----------------------------------------------------------------------------
// Angle math
// ----------------------------------------------------------------------------

/// Fold once into [-360, 360], then clamp.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let mut angle = angle;
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    // max/min instead of clamp: min > max must not panic
    angle.max(min).min(max)
}

/// Shortest signed difference from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Critically damped spring toward `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // do not overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// [`smooth_damp`] along the shortest arc.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

// ----------------------------------------------------------------------------
// Engine boundary
// ----------------------------------------------------------------------------

pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians())
}

pub fn heading(yaw: f32) -> Vec3 {
    yaw_rotation(yaw) * Vec3::NEG_Z
}

pub fn camera_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        -yaw.to_radians(),
        -pitch.to_radians(),
        0.0,
    )
}
