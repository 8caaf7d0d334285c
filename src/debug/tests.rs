//! Debug domain: unit tests for the frame trace and debug state.

use bevy::prelude::*;

use super::{DebugState, TraceRecord};
use crate::camera::OrientationState;
use crate::combat::CombatState;
use crate::content::ControllerConfig;
use crate::movement::MotionState;

#[test]
fn test_trace_record_is_one_json_line() {
    let config = ControllerConfig::default();
    let motion = MotionState {
        grounded: false,
        fall_timeout_remaining: 0.0,
        vertical_velocity: -3.5,
        ..MotionState::new(&config)
    };
    let orientation = OrientationState::new(90.0);
    let combat = CombatState {
        in_combat: true,
        is_attacking: true,
        ..default()
    };

    let record = TraceRecord::capture(
        12,
        0.5,
        Vec3::new(1.0, 2.0, 3.0),
        &motion,
        &orientation,
        &combat,
    );
    let line = record.to_json_line().unwrap();

    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);

    let parsed: TraceRecord = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(parsed, record);
    assert!(parsed.free_fall);
    assert_eq!(parsed.position, [1.0, 2.0, 3.0]);
    assert_eq!(parsed.facing_yaw, 90.0);
}

#[test]
fn test_debug_state_starts_without_trace() {
    let state = DebugState::default();
    assert!(!state.is_tracing());
    assert!(state.show_probe);
    assert_eq!(state.trace_path.to_str(), Some("controller_trace.jsonl"));
}
