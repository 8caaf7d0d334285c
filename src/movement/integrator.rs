//! Movement domain: per-frame speed, jump and gravity integration.

use bevy::prelude::*;

use crate::animation::LocomotionParams;
use crate::content::ControllerConfig;
use crate::input::InputSnapshot;
use crate::movement::MotionState;

/// Speeds closer than this to the target snap instead of easing.
pub const SPEED_OFFSET: f32 = 0.1;
/// Blend values below this are zeroed so idle does not creep.
pub const BLEND_FLOOR: f32 = 0.01;
/// Downward velocity held while grounded.
pub const GROUNDED_VELOCITY: f32 = -2.0;

/// What the physics body reported back from its last step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoverSample {
    /// Solved horizontal speed of the body.
    pub horizontal_speed: f32,
    /// World direction the character is moving toward.
    pub heading: Vec3,
}

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// World-space displacement for this frame (already scaled by dt).
    pub displacement: Vec3,
    pub locomotion: LocomotionParams,
}

/// Clamped linear interpolation; applied once per frame it eases
/// exponentially toward `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Round to three decimals, ties to even.
pub fn round_to_millis(value: f32) -> f32 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// Move input counts as zero under the same tolerance the input layer uses.
pub fn has_move_input(axis: Vec2) -> bool {
    axis.length_squared() >= 1e-10
}

/// Take-off velocity needed to reach `jump_height` under `gravity`.
pub fn jump_velocity(jump_height: f32, gravity: f32) -> f32 {
    (jump_height * -2.0 * gravity).max(0.0).sqrt()
}

impl MotionState {
    /// Advance one frame.
    ///
    /// While `attacking`, horizontal locomotion is suspended and only the
    /// vertical component moves the character.
    pub fn integrate(
        &mut self,
        config: &ControllerConfig,
        input: &InputSnapshot,
        grounded: bool,
        attacking: bool,
        mover: MoverSample,
        dt: f32,
    ) -> MotionFrame {
        self.grounded = grounded;
        self.latch_jump(input);

        let mut locomotion = LocomotionParams {
            grounded,
            ..default()
        };
        self.update_vertical(config, dt, &mut locomotion);

        let vertical = Vec3::Y * self.vertical_velocity * dt;
        if attacking {
            return MotionFrame {
                displacement: vertical,
                locomotion,
            };
        }

        let motion_speed = self.update_speed(config, input, mover.horizontal_speed, dt);
        locomotion.speed = Some((self.animation_blend, motion_speed));

        MotionFrame {
            displacement: mover.heading.normalize_or_zero() * (self.speed * dt) + vertical,
            locomotion,
        }
    }

    fn latch_jump(&mut self, input: &InputSnapshot) {
        if !input.jump {
            self.jump_requested = false;
        }
        if input.jump_pressed {
            self.jump_requested = true;
        }
    }

    /// Jump/fall timeline and gravity.
    pub(crate) fn update_vertical(
        &mut self,
        config: &ControllerConfig,
        dt: f32,
        locomotion: &mut LocomotionParams,
    ) {
        if self.grounded {
            self.fall_timeout_remaining = config.fall_timeout;
            locomotion.jump = Some(false);
            locomotion.free_fall = Some(false);

            // stop velocity building up while standing
            if self.vertical_velocity < 0.0 {
                self.vertical_velocity = GROUNDED_VELOCITY;
            }

            if self.jump_requested && self.jump_timeout_remaining <= 0.0 {
                self.vertical_velocity = jump_velocity(config.jump_height, config.gravity);
                locomotion.jump = Some(true);
                debug!("Jump: vertical_velocity={:.3}", self.vertical_velocity);
            }

            if self.jump_timeout_remaining >= 0.0 {
                self.jump_timeout_remaining -= dt;
            }
        } else {
            self.jump_timeout_remaining = config.jump_timeout;

            if self.fall_timeout_remaining > 0.0 {
                self.fall_timeout_remaining -= dt;
            }
            if self.fall_timeout_remaining <= 0.0 {
                locomotion.free_fall = Some(true);
            }

            // no jumping while airborne
            self.jump_requested = false;
        }

        if self.vertical_velocity < config.terminal_velocity {
            self.vertical_velocity += config.gravity * dt;
        }
    }

    /// Ease horizontal speed and the animation blend toward the target.
    /// Returns the input magnitude reported as MotionSpeed.
    pub(crate) fn update_speed(
        &mut self,
        config: &ControllerConfig,
        input: &InputSnapshot,
        current_horizontal_speed: f32,
        dt: f32,
    ) -> f32 {
        let target_speed = if !has_move_input(input.move_axis) {
            0.0
        } else if input.sprint {
            config.sprint_speed
        } else {
            config.move_speed
        };

        let input_magnitude = if input.analog {
            input.move_axis.length()
        } else {
            1.0
        };
        let t = dt * config.speed_change_rate;

        if current_horizontal_speed < target_speed - SPEED_OFFSET
            || current_horizontal_speed > target_speed + SPEED_OFFSET
        {
            self.speed = round_to_millis(lerp(
                current_horizontal_speed,
                target_speed * input_magnitude,
                t,
            ));
        } else {
            self.speed = target_speed;
        }

        self.animation_blend = lerp(self.animation_blend, target_speed, t);
        if self.animation_blend < BLEND_FLOOR {
            self.animation_blend = 0.0;
        }

        input_magnitude
    }
}
