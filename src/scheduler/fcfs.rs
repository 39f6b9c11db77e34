/*!
 * First-Come-First-Served
 * Non-preemptive: the queue head runs until it blocks or finishes
 */

use super::traits::{SchedulingStrategy, SliceEnd};
use super::types::SchedulingPolicy;
use crate::core::errors::SchedulerError;
use crate::core::types::Pid;
use crate::process::queue::ReadyQueue;
use crate::process::table::ProcessTable;
use crate::process::types::{BurstOutcome, Process};

pub struct FcfsStrategy {
    queue: ReadyQueue,
}

impl FcfsStrategy {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: ReadyQueue::with_capacity(capacity),
        }
    }
}

/// Remove `pid` from the head of `queue`, checking it really was the head
pub(super) fn leave_head(queue: &mut ReadyQueue, pid: Pid) -> Result<(), SchedulerError> {
    let head = queue.dequeue()?;
    if head != pid {
        return Err(SchedulerError::HeadMismatch {
            expected: pid,
            found: head,
        });
    }
    Ok(())
}

impl SchedulingStrategy for FcfsStrategy {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn on_ready(&mut self, pid: Pid) -> Result<(), SchedulerError> {
        self.queue.enqueue(pid)
    }

    fn select(&mut self, _table: &ProcessTable) -> Option<Pid> {
        self.queue.peek_front()
    }

    fn on_ran(
        &mut self,
        process: &mut Process,
        outcome: BurstOutcome,
    ) -> Result<SliceEnd, SchedulerError> {
        match outcome {
            BurstOutcome::Continued => Ok(SliceEnd::Kept),
            BurstOutcome::Blocked | BurstOutcome::Finished => {
                leave_head(&mut self.queue, process.pid)?;
                Ok(SliceEnd::Left)
            }
        }
    }

    fn queued(&self) -> Vec<Pid> {
        self.queue.iter().collect()
    }
}
