//! Input domain: snapshot types and device folding.

use bevy::prelude::*;

/// Degrees of camera rotation per pixel of mouse motion.
pub const MOUSE_LOOK_SCALE: f32 = 0.15;
/// Degrees per second of camera rotation at full right-stick deflection.
pub const STICK_LOOK_SCALE: f32 = 180.0;

/// Stick deflection below this is treated as released.
const STICK_DEADZONE: f32 = 0.1;

/// Read-only view of what the player asked for this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// x = strafe right, y = forward; magnitude <= 1 for analog input
    pub move_axis: Vec2,
    /// x = yaw delta, y = pitch delta (positive looks down)
    pub look: Vec2,
    /// Jump button held
    pub jump: bool,
    /// Jump button went down this frame
    pub jump_pressed: bool,
    pub sprint: bool,
    /// Move comes from an analog stick, so its magnitude scales speed
    pub analog: bool,
    /// Primary attack went down this frame
    pub attack: bool,
    /// Combat toggle went down this frame
    pub combat_toggle: bool,
    /// Look deltas come from a pointer and are already frame-rate independent
    pub pointer_look: bool,
}

/// Last device family the player touched.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlScheme {
    #[default]
    KeyboardMouse,
    Gamepad,
}

/// Raw per-device readings for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceSample {
    pub keys_move: Vec2,
    pub mouse_delta: Vec2,
    pub keys_jump_held: bool,
    pub keys_jump_pressed: bool,
    pub keys_sprint: bool,
    pub keys_attack: bool,
    pub keys_toggle: bool,
    /// Any key, mouse button or mouse motion this frame
    pub keys_active: bool,

    pub pad_move: Vec2,
    pub pad_look: Vec2,
    pub pad_jump_held: bool,
    pub pad_jump_pressed: bool,
    pub pad_sprint: bool,
    pub pad_attack: bool,
    pub pad_toggle: bool,
}

impl DeviceSample {
    fn pad_move(&self) -> Vec2 {
        deadzone(self.pad_move)
    }

    fn pad_look(&self) -> Vec2 {
        deadzone(self.pad_look)
    }

    fn pad_active(&self) -> bool {
        self.pad_move() != Vec2::ZERO
            || self.pad_look() != Vec2::ZERO
            || self.pad_jump_held
            || self.pad_sprint
            || self.pad_attack
            || self.pad_toggle
    }
}

fn deadzone(stick: Vec2) -> Vec2 {
    if stick.length() < STICK_DEADZONE {
        Vec2::ZERO
    } else {
        stick.clamp_length_max(1.0)
    }
}

impl ControlScheme {
    /// Switch to whichever device produced input this frame; keyboard wins ties.
    pub fn update(self, sample: &DeviceSample) -> Self {
        if sample.keys_active {
            ControlScheme::KeyboardMouse
        } else if sample.pad_active() {
            ControlScheme::Gamepad
        } else {
            self
        }
    }
}

impl InputSnapshot {
    pub fn from_sample(sample: &DeviceSample, scheme: ControlScheme) -> Self {
        let pad_move = sample.pad_move();
        let (move_axis, analog) = if sample.keys_move != Vec2::ZERO {
            (sample.keys_move.normalize_or_zero(), false)
        } else if pad_move != Vec2::ZERO {
            (pad_move, true)
        } else {
            (Vec2::ZERO, false)
        };

        let pointer_look = scheme == ControlScheme::KeyboardMouse;
        let look = if pointer_look {
            sample.mouse_delta * MOUSE_LOOK_SCALE
        } else {
            // stick up looks up, which is negative pitch
            let stick = sample.pad_look();
            Vec2::new(stick.x, -stick.y) * STICK_LOOK_SCALE
        };

        Self {
            move_axis,
            look,
            jump: sample.keys_jump_held || sample.pad_jump_held,
            jump_pressed: sample.keys_jump_pressed || sample.pad_jump_pressed,
            sprint: sample.keys_sprint || sample.pad_sprint,
            analog,
            attack: sample.keys_attack || sample.pad_attack,
            combat_toggle: sample.keys_toggle || sample.pad_toggle,
            pointer_look,
        }
    }
}
