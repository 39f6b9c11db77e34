/*!
 * Scheduling Strategy Trait
 * The seam between the simulation engine and a scheduling policy
 */

use super::types::SchedulingPolicy;
use crate::core::errors::SchedulerError;
use crate::core::types::Pid;
use crate::process::table::ProcessTable;
use crate::process::types::{BurstOutcome, Process};

/// How the running process's slice ended this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceEnd {
    /// Keeps its place; eligible again next cycle
    Kept,
    /// Time slice used up, moved behind the other ready processes
    Expired,
    /// Finished or blocked, no longer queued
    Left,
}

/// Policy-specific selection and queue discipline
///
/// The engine owns the cycle loop and all state transitions. A strategy only
/// decides which Ready process runs and maintains whatever ordering it needs.
pub trait SchedulingStrategy: Send {
    fn policy(&self) -> SchedulingPolicy;

    /// A process became Ready, by admission or at the end of its I/O burst
    fn on_ready(&mut self, pid: Pid) -> Result<(), SchedulerError>;

    /// Choose the process that runs this cycle, if any is Ready
    fn select(&mut self, table: &ProcessTable) -> Option<Pid>;

    /// Bookkeeping for the process that ran, after its burst was consumed
    fn on_ran(
        &mut self,
        process: &mut Process,
        outcome: BurstOutcome,
    ) -> Result<SliceEnd, SchedulerError>;

    /// Ready queue contents front to back, for policies that keep one
    fn queued(&self) -> Vec<Pid> {
        Vec::new()
    }
}
