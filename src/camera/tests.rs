//! Camera domain: unit tests for angle math, look input and facing.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    OrientationState, camera_rotation, clamp_angle, delta_angle, heading, smooth_damp_angle,
    yaw_rotation,
};
use crate::content::ControllerConfig;

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Read the yaw back out of a body rotation.
fn facing_yaw(rotation: Quat) -> f32 {
    -rotation.to_euler(EulerRot::YXZ).0.to_degrees()
}

// ----------------------------------------------------------------------------
// Angle math
// ----------------------------------------------------------------------------

#[test]
fn test_clamp_angle_folds_once_then_clamps() {
    assert_eq!(clamp_angle(400.0, f32::MIN, f32::MAX), 40.0);
    assert_eq!(clamp_angle(-400.0, f32::MIN, f32::MAX), -40.0);
    assert_eq!(clamp_angle(100.0, -30.0, 70.0), 70.0);
    assert_eq!(clamp_angle(-45.0, -30.0, 70.0), -30.0);
    assert_eq!(clamp_angle(10.0, -30.0, 70.0), 10.0);
}

#[test]
fn test_clamp_angle_inverted_range_does_not_panic() {
    assert_eq!(clamp_angle(0.0, 10.0, -10.0), -10.0);
}

#[test]
fn test_delta_angle_takes_shortest_arc() {
    assert!(approx(delta_angle(350.0, 10.0), 20.0));
    assert!(approx(delta_angle(10.0, 350.0), -20.0));
    assert!(approx(delta_angle(0.0, 180.0), 180.0));
    assert!(approx(delta_angle(-170.0, 170.0), -20.0));
}

#[test]
fn test_smooth_damp_angle_converges_without_overshoot() {
    let mut current = 350.0;
    let mut velocity = 0.0;
    let target = 10.0;

    for _ in 0..120 {
        let next = smooth_damp_angle(current, target, &mut velocity, 0.12, DT);
        // approaches through 360 rather than backwards through 180
        assert!(next >= current - 1e-3);
        current = next;
    }
    assert!(approx(delta_angle(current, target), 0.0));
}

#[test]
fn test_smooth_damp_zero_dt_is_noop() {
    let mut velocity = 3.0;
    assert_eq!(smooth_damp_angle(45.0, 90.0, &mut velocity, 0.12, 0.0), 45.0);
    assert_eq!(velocity, 3.0);
}

#[test]
fn test_zero_smooth_time_is_near_snap() {
    let mut velocity = 0.0;
    let result = smooth_damp_angle(0.0, 90.0, &mut velocity, 0.0, DT);
    assert!((result - 90.0).abs() < 0.01);
}

// ----------------------------------------------------------------------------
// Engine boundary
// ----------------------------------------------------------------------------

#[test]
fn test_heading_conventions() {
    assert!(heading(0.0).abs_diff_eq(Vec3::NEG_Z, 1e-5));
    assert!(heading(90.0).abs_diff_eq(Vec3::X, 1e-5));
    assert!(heading(-90.0).abs_diff_eq(Vec3::NEG_X, 1e-5));
}

#[test]
fn test_facing_yaw_inverts_yaw_rotation() {
    for yaw in [-150.0, -30.0, 0.0, 45.0, 170.0] {
        assert!(approx(facing_yaw(yaw_rotation(yaw)), yaw));
    }
}

#[test]
fn test_positive_pitch_looks_down() {
    let forward = camera_rotation(0.0, 30.0) * Vec3::NEG_Z;
    assert!(forward.y < 0.0);
    assert!(forward.z < 0.0);
}

// ----------------------------------------------------------------------------
// Camera
// ----------------------------------------------------------------------------

#[test]
fn test_pointer_look_ignores_dt() {
    let config = ControllerConfig::default();
    let mut state = OrientationState::default();

    let (yaw, pitch) = state.update_camera(Vec2::new(5.0, 2.0), DT, true, &config);
    assert_eq!(yaw, 5.0);
    assert_eq!(pitch, 2.0);
}

#[test]
fn test_stick_look_scales_by_dt() {
    let config = ControllerConfig::default();
    let mut state = OrientationState::default();

    let (yaw, pitch) = state.update_camera(Vec2::new(180.0, -60.0), 0.5, false, &config);
    assert!(approx(yaw, 90.0));
    assert!(approx(pitch, -30.0));
}

#[test]
fn test_tiny_look_is_ignored() {
    let config = ControllerConfig::default();
    let mut state = OrientationState::default();

    state.update_camera(Vec2::new(0.005, 0.005), DT, true, &config);
    assert_eq!(state.camera_yaw, 0.0);
    assert_eq!(state.camera_pitch, 0.0);
}

#[test]
fn test_locked_camera_ignores_look() {
    let config = ControllerConfig {
        lock_camera_position: true,
        ..default()
    };
    let mut state = OrientationState::default();

    state.update_camera(Vec2::new(40.0, 40.0), DT, true, &config);
    assert_eq!(state.camera_yaw, 0.0);
    assert_eq!(state.camera_pitch, 0.0);
}

#[test]
fn test_pitch_stays_clamped_under_random_look() {
    let config = ControllerConfig::default();
    let mut state = OrientationState::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..10_000 {
        let look = Vec2::new(
            rng.random_range(-500.0..500.0),
            rng.random_range(-500.0..500.0),
        );
        let pointer = rng.random_bool(0.5);
        let (yaw, pitch) = state.update_camera(look, DT, pointer, &config);

        assert!(pitch >= config.camera_bottom_clamp && pitch <= config.camera_top_clamp);
        assert!(yaw.is_finite());
    }
}

#[test]
fn test_angle_override_is_added_after_clamp() {
    let config = ControllerConfig {
        camera_angle_override: 15.0,
        ..default()
    };
    let mut state = OrientationState::default();
    state.update_camera(Vec2::new(0.0, 500.0), DT, true, &config);

    let expected = camera_rotation(0.0, config.camera_top_clamp + 15.0);
    assert!(state.camera_rotation(&config).abs_diff_eq(expected, 1e-5));
}

// ----------------------------------------------------------------------------
// Facing
// ----------------------------------------------------------------------------

#[test]
fn test_facing_is_camera_relative() {
    let mut state = OrientationState::default();
    state.update_facing(Vec2::new(1.0, 0.0), 30.0, DT, 0.12);

    assert!(approx(state.target_rotation, 120.0));
    // smoothed, not snapped
    assert!(state.facing_yaw > 0.0 && state.facing_yaw < 120.0);
}

#[test]
fn test_facing_holds_without_move_input() {
    let mut state = OrientationState::new(45.0);
    let facing = state.update_facing(Vec2::ZERO, 90.0, DT, 0.12);

    assert_eq!(facing, 45.0);
    assert_eq!(state.target_rotation, 45.0);
}

#[test]
fn test_facing_reaches_target_over_time() {
    let mut state = OrientationState::default();
    for _ in 0..120 {
        state.update_facing(Vec2::new(0.0, -1.0), 0.0, DT, 0.12);
    }
    assert!(approx(delta_angle(state.facing_yaw, 180.0), 0.0));
    assert!(state.heading().abs_diff_eq(Vec3::Z, 1e-4));
}
