/*!
 * Process Module
 * Process records, the process table, the ready queue and the simulation engine
 */

pub mod loader;
pub mod queue;
pub mod scheduler;
pub mod table;
pub mod types;

// Re-export for convenience
pub use loader::{load_file, parse};
pub use queue::ReadyQueue;
pub use scheduler::{
    compare_policies, Scheduler, SchedulerBuilder, SimulationConfig, SimulationReport,
};
pub use table::ProcessTable;
pub use types::{Process, ProcessDescriptor, ProcessState};
