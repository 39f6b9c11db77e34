/*!
 * Shortest-Remaining-Time-First
 * Preemptive; re-decided from the process table every cycle
 */

use super::traits::{SchedulingStrategy, SliceEnd};
use super::types::SchedulingPolicy;
use crate::core::errors::SchedulerError;
use crate::core::types::Pid;
use crate::process::table::ProcessTable;
use crate::process::types::{BurstOutcome, Process};

/// Stateless: eligibility comes from process state, not from a queue
#[derive(Debug, Default, Clone, Copy)]
pub struct SrtfStrategy;

impl SrtfStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulingStrategy for SrtfStrategy {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Srtf
    }

    fn on_ready(&mut self, _pid: Pid) -> Result<(), SchedulerError> {
        Ok(())
    }

    /// Least remaining work (second half included), smallest id on ties
    fn select(&mut self, table: &ProcessTable) -> Option<Pid> {
        table
            .iter()
            .filter(|p| p.is_ready())
            .min_by_key(|p| (p.remaining_work(), p.pid))
            .map(|p| p.pid)
    }

    fn on_ran(
        &mut self,
        _process: &mut Process,
        outcome: BurstOutcome,
    ) -> Result<SliceEnd, SchedulerError> {
        Ok(match outcome {
            BurstOutcome::Continued => SliceEnd::Kept,
            BurstOutcome::Blocked | BurstOutcome::Finished => SliceEnd::Left,
        })
    }
}
