//! Debug domain: hotkeys, gizmos and the frame trace writer.

use bevy::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::camera::OrientationState;
use crate::combat::CombatState;
use crate::content::ControllerConfig;
use crate::debug::{DebugState, TraceRecord};
use crate::movement::{MotionState, Player, probe_center};

/// F3 toggles the trace, F4 toggles the probe gizmo
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_probe = !debug_state.show_probe;
        info!("Ground probe gizmo: {}", debug_state.show_probe);
    }

    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    if let Some(mut writer) = debug_state.trace.take() {
        if let Err(e) = writer.flush() {
            warn!("Failed to flush controller trace: {}", e);
        }
        info!(
            "Controller trace stopped after {} frames",
            debug_state.trace_frames
        );
        return;
    }

    match File::create(&debug_state.trace_path) {
        Ok(file) => {
            debug_state.trace = Some(BufWriter::new(file));
            debug_state.trace_frames = 0;
            info!(
                "Controller trace started: {}",
                debug_state.trace_path.display()
            );
        }
        Err(e) => warn!(
            "Failed to open {}: {}",
            debug_state.trace_path.display(),
            e
        ),
    }
}

pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    config: Res<ControllerConfig>,
    query: Query<(&Transform, &MotionState), With<Player>>,
) {
    if !debug_state.show_probe {
        return;
    }

    for (transform, state) in &query {
        let color = if state.grounded {
            Color::srgba(0.0, 1.0, 0.0, 0.35)
        } else {
            Color::srgba(1.0, 0.0, 0.0, 0.35)
        };
        gizmos.sphere(
            Isometry3d::from_translation(probe_center(transform.translation, &config)),
            config.grounded_radius,
            color,
        );
    }
}

/// Append one JSON line per player per frame; any I/O error stops the trace.
pub(crate) fn write_trace(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    query: Query<(&Transform, &MotionState, &OrientationState, &CombatState), With<Player>>,
) {
    let frame = debug_state.trace_frames;
    let elapsed = time.elapsed_secs();
    let Some(writer) = debug_state.trace.as_mut() else {
        return;
    };

    let mut failed = false;
    for (transform, motion, orientation, combat) in &query {
        let record = TraceRecord::capture(
            frame,
            elapsed,
            transform.translation,
            motion,
            orientation,
            combat,
        );
        let result = record
            .to_json_line()
            .map_err(std::io::Error::other)
            .and_then(|line| writer.write_all(line.as_bytes()));
        if let Err(e) = result {
            warn!("Controller trace write failed, stopping trace: {}", e);
            failed = true;
            break;
        }
    }

    if failed {
        debug_state.trace = None;
    } else {
        debug_state.trace_frames += 1;
    }
}
