/*!
 * CPU Scheduling Simulator Library
 * Cycle-by-cycle simulation of FCFS, Round-Robin and SRTF scheduling
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod trace;

// Re-exports
pub use crate::core::errors::{ConfigError, InputError, SchedulerError, SimError};
pub use crate::core::types::{Cycle, Pid, SimResult};
pub use monitoring::init_tracing;
pub use process::{
    compare_policies, Process, ProcessDescriptor, ProcessState, ProcessTable, Scheduler,
    SchedulerBuilder, SimulationConfig, SimulationReport,
};
pub use scheduler::{SchedulingPolicy, TimeQuantum};
pub use trace::{CycleSnapshot, SimulationOutput};
