/*!
 * Round-Robin
 * FCFS queue discipline plus a fixed time slice per dispatch
 */

use super::fcfs::leave_head;
use super::traits::{SchedulingStrategy, SliceEnd};
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::errors::SchedulerError;
use crate::core::types::Pid;
use crate::process::queue::ReadyQueue;
use crate::process::table::ProcessTable;
use crate::process::types::{BurstOutcome, Process};

pub struct RoundRobinStrategy {
    queue: ReadyQueue,
    quantum: TimeQuantum,
}

impl RoundRobinStrategy {
    pub fn new(capacity: usize, quantum: TimeQuantum) -> Self {
        Self {
            queue: ReadyQueue::with_capacity(capacity),
            quantum,
        }
    }
}

impl SchedulingStrategy for RoundRobinStrategy {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
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
        process.quantum_used += 1;

        match outcome {
            BurstOutcome::Blocked | BurstOutcome::Finished => {
                process.quantum_used = 0;
                leave_head(&mut self.queue, process.pid)?;
                Ok(SliceEnd::Left)
            }
            // Crossing into the second half without I/O does not reset the slice
            BurstOutcome::Continued if process.quantum_used >= self.quantum.cycles() => {
                process.quantum_used = 0;
                let head = self.queue.rotate()?;
                if head != process.pid {
                    return Err(SchedulerError::HeadMismatch {
                        expected: process.pid,
                        found: head,
                    });
                }
                Ok(SliceEnd::Expired)
            }
            BurstOutcome::Continued => Ok(SliceEnd::Kept),
        }
    }

    fn queued(&self) -> Vec<Pid> {
        self.queue.iter().collect()
    }
}
