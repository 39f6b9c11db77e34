/*!
 * Trace Module
 * Per-cycle snapshots and the rendered output of a run
 */

pub mod render;
pub mod snapshot;

pub use render::{output_path, render_summary, write_json_report, write_output, SimulationOutput};
pub use snapshot::{CycleSnapshot, TraceEntry};
