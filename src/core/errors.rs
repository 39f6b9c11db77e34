/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Cycle, Pid};
use crate::process::types::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operator-facing configuration errors, raised before any simulation state exists
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("usage: {program} <policy> <inputFile>")]
    #[diagnostic(
        code(config::usage),
        help("policy: 0 (FCFS), 1 (Round-Robin) or 2 (SRTF); inputFile: the process description")
    )]
    Usage { program: String },

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(config::invalid_policy),
        help("Use 0/fcfs, 1/rr or 2/srtf.")
    )]
    InvalidPolicy(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("The quantum is a whole number of cycles, at least 1.")
    )]
    InvalidQuantum(String),

    #[error("Invalid cycle limit: {0}")]
    #[diagnostic(
        code(config::invalid_cycle_limit),
        help("The cycle limit is a positive whole number of cycles.")
    )]
    InvalidCycleLimit(String),

    #[error("Cannot open file {path}: {reason}")]
    #[diagnostic(
        code(config::unreadable_input),
        help("Check that the input file exists and is readable.")
    )]
    UnreadableInput { path: String, reason: String },
}

/// Malformed process descriptions
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InputError {
    #[error("Input is empty: expected a process count on the first line")]
    #[diagnostic(
        code(input::missing_count),
        help("The first non-blank line holds the number of process descriptors.")
    )]
    MissingCount,

    #[error("Line {line}: invalid process count '{value}'")]
    #[diagnostic(
        code(input::invalid_count),
        help("The count must be a single non-negative integer.")
    )]
    InvalidCount { line: usize, value: String },

    #[error("Line {line}: invalid {field} '{value}'")]
    #[diagnostic(
        code(input::invalid_field),
        help("Every field is a non-negative integer: id cpuBurst ioBurst arrivalTime.")
    )]
    InvalidField {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    #[diagnostic(
        code(input::field_count),
        help("Each descriptor line reads: id cpuBurst ioBurst arrivalTime.")
    )]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Expected {expected} process descriptors, found {found}")]
    #[diagnostic(
        code(input::too_few_records),
        help("The declared count exceeds the descriptor lines present.")
    )]
    TooFewRecords { expected: usize, found: usize },

    #[error("Line {line}: unexpected descriptor beyond the declared count of {expected}")]
    #[diagnostic(
        code(input::too_many_records),
        help("Fix the count line or remove the extra descriptors.")
    )]
    TooManyRecords { expected: usize, line: usize },

    #[error("Descriptor {record}: duplicate process id {pid}")]
    #[diagnostic(
        code(input::duplicate_pid),
        help("Process ids must be unique.")
    )]
    DuplicatePid { pid: Pid, record: usize },
}

/// Engine invariant violations
///
/// These are programming errors, never user errors. Debug builds assert on the
/// conditions that produce them.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Ready queue full (capacity {capacity})")]
    #[diagnostic(
        code(scheduler::queue_full),
        help("The ready queue is sized to the population; overflowing it means a process was queued twice.")
    )]
    QueueFull { capacity: usize },

    #[error("Ready queue is empty")]
    #[diagnostic(
        code(scheduler::queue_empty),
        help("A dequeue was attempted with no runnable process.")
    )]
    QueueEmpty,

    #[error("Process {0} is already in the ready queue")]
    #[diagnostic(code(scheduler::duplicate_entry))]
    DuplicateEntry(Pid),

    #[error("Process {0} not found in process table")]
    #[diagnostic(code(scheduler::process_not_found))]
    ProcessNotFound(Pid),

    #[error("Cannot dispatch process {pid}: state is {state:?}")]
    #[diagnostic(
        code(scheduler::not_ready),
        help("Only Ready processes may be selected to run.")
    )]
    NotReady { pid: Pid, state: ProcessState },

    #[error("Ready queue head is {found}, expected running process {expected}")]
    #[diagnostic(code(scheduler::head_mismatch))]
    HeadMismatch { expected: Pid, found: Pid },

    #[error("More than one process running in cycle {cycle}")]
    #[diagnostic(code(scheduler::multiple_running))]
    MultipleRunning { cycle: Cycle },

    #[error("Simulation exceeded {limit} cycles")]
    #[diagnostic(
        code(scheduler::cycle_limit),
        help("Raise or unset SCHED_MAX_CYCLES if the population legitimately needs more cycles.")
    )]
    CycleLimitExceeded { limit: Cycle },

    #[error("Simulation cancelled at cycle {cycle}")]
    #[diagnostic(code(scheduler::cancelled))]
    Cancelled { cycle: Cycle },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Filesystem operation failed. Check file permissions and disk space.")
    )]
    Io(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(sim::serialization_error))]
    Serialization(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization(err.to_string())
    }
}
