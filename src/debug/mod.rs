//! Debug tooling for tuning the controller.
//!
//! Features:
//! - Ground probe gizmo (green when grounded, red otherwise)
//! - F3 toggles a per-frame JSON trace of controller state

mod systems;
mod trace;

#[cfg(test)]
mod tests;

pub use trace::TraceRecord;

use bevy::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

const TRACE_PATH: &str = "controller_trace.jsonl";

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug tooling state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground probe gizmo is drawn
    pub show_probe: bool,
    /// Where the trace is written
    pub trace_path: PathBuf,
    /// Open trace file while tracing is on
    pub trace: Option<BufWriter<File>>,
    /// Frames written since the trace was started
    pub trace_frames: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_probe: true,
            trace_path: PathBuf::from(TRACE_PATH),
            trace: None,
            trace_frames: 0,
        }
    }
}

impl DebugState {
    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }
}

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (systems::handle_debug_hotkeys, systems::draw_ground_probe).chain(),
            )
            .add_systems(
                PostUpdate,
                systems::write_trace.run_if(|state: Res<DebugState>| state.is_tracing()),
            );
    }
}
