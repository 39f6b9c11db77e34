/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the simulator's fixed values and guard rails.
 */

use super::types::Cycle;

// =============================================================================
// ROUND-ROBIN
// =============================================================================

/// Consecutive cycles a process may run before Round-Robin preempts it
pub const DEFAULT_QUANTUM_CYCLES: Cycle = 2;

/// Largest accepted quantum override
pub const MAX_QUANTUM_CYCLES: Cycle = 1_000;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides the Round-Robin quantum
pub const ENV_QUANTUM: &str = "SCHED_RR_QUANTUM";

/// Sets an optional cycle budget; runs are unbounded without it
pub const ENV_MAX_CYCLES: &str = "SCHED_MAX_CYCLES";

/// Enables JSON log output
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";

/// Makes the CLI also write the summary as JSON
pub const ENV_REPORT_JSON: &str = "SCHED_REPORT_JSON";
