//! Input domain: per-frame snapshot of player intent.
//!
//! The controller never polls devices directly. `read_input` samples keyboard,
//! mouse and the first gamepad once per frame and everything downstream reads
//! the resulting [`InputSnapshot`].

mod snapshot;


pub use snapshot::{ControlScheme, DeviceSample, InputSnapshot, MOUSE_LOOK_SCALE, STICK_LOOK_SCALE};

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::core::ControllerSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .init_resource::<ControlScheme>()
            .add_systems(Update, read_input.in_set(ControllerSet::Input));
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    gamepads: Query<&Gamepad>,
    mut scheme: ResMut<ControlScheme>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    let mut sample = DeviceSample::default();

    // Keyboard movement
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        sample.keys_move.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        sample.keys_move.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        sample.keys_move.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        sample.keys_move.y += 1.0;
    }

    sample.mouse_delta = mouse_motion.delta;
    sample.keys_jump_held = keyboard.pressed(KeyCode::Space);
    sample.keys_jump_pressed = keyboard.just_pressed(KeyCode::Space);
    sample.keys_sprint = keyboard.pressed(KeyCode::ShiftLeft);
    sample.keys_attack = mouse_buttons.just_pressed(MouseButton::Left);
    sample.keys_toggle = keyboard.just_pressed(KeyCode::KeyC);
    sample.keys_active = keyboard.get_pressed().next().is_some()
        || mouse_buttons.get_pressed().next().is_some()
        || sample.mouse_delta != Vec2::ZERO;

    // First connected gamepad only
    if let Some(gamepad) = gamepads.iter().next() {
        sample.pad_move = gamepad.left_stick();
        sample.pad_look = gamepad.right_stick();
        sample.pad_jump_held = gamepad.pressed(GamepadButton::South);
        sample.pad_jump_pressed = gamepad.just_pressed(GamepadButton::South);
        sample.pad_sprint = gamepad.pressed(GamepadButton::LeftTrigger2);
        sample.pad_attack = gamepad.just_pressed(GamepadButton::West);
        sample.pad_toggle = gamepad.just_pressed(GamepadButton::North);
    }

    *scheme = scheme.update(&sample);
    *snapshot = InputSnapshot::from_sample(&sample, *scheme);
}
