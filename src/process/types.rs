/*!
 * Process Types
 * Process records and their scheduling state machine
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Cycle, Pid};
use serde::{Deserialize, Serialize};

/// Process state
///
/// ```text
/// Unadmitted --arrival--> Ready <--dispatch/release--> Running
///                           ^                            |
///                           +---- I/O done ---- Blocked <+ first half done
///                                                        |
///                                          Finished <----+ both halves done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not reached yet
    Unadmitted,
    /// Eligible to run
    Ready,
    /// Holding the CPU for the current cycle
    Running,
    /// Waiting out its I/O burst
    Blocked,
    /// Both CPU halves consumed
    Finished,
}

impl ProcessState {
    /// Label used in trace lines; `None` for states the trace omits
    #[inline]
    pub const fn trace_label(&self) -> Option<&'static str> {
        match self {
            Self::Running => Some("running"),
            Self::Ready => Some("ready"),
            Self::Blocked => Some("blocked"),
            Self::Unadmitted | Self::Finished => None,
        }
    }
}

/// One parsed input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub cpu_burst: Cycle,
    pub io_burst: Cycle,
    pub arrival: Cycle,
}

impl ProcessDescriptor {
    #[inline]
    #[must_use]
    pub const fn new(pid: Pid, cpu_burst: Cycle, io_burst: Cycle, arrival: Cycle) -> Self {
        Self {
            pid,
            cpu_burst,
            io_burst,
            arrival,
        }
    }
}

/// Result of admitting a process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Now Ready; must be handed to the ready queue
    Ready,
    /// Nothing to run; finished on arrival
    Finished,
}

/// What happened to the running process at the end of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstOutcome {
    /// Still has CPU work in the current half (or flowed straight into the second half)
    Continued,
    /// First half done, now waiting on I/O
    Blocked,
    /// All work done
    Finished,
}

/// Simulated process record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub cpu_burst_total: Cycle,
    pub io_burst: Cycle,
    pub arrival: Cycle,

    state: ProcessState,
    remaining_burst: Cycle,
    pending_second_half: Cycle,
    remaining_io: Cycle,
    pub(crate) quantum_used: Cycle,
    finish_time: Option<Cycle>,
    waiting_cycles: Cycle,
}

impl Process {
    #[must_use]
    pub fn new(descriptor: ProcessDescriptor) -> Self {
        Self {
            pid: descriptor.pid,
            cpu_burst_total: descriptor.cpu_burst,
            io_burst: descriptor.io_burst,
            arrival: descriptor.arrival,
            state: ProcessState::Unadmitted,
            remaining_burst: 0,
            pending_second_half: 0,
            remaining_io: 0,
            quantum_used: 0,
            finish_time: None,
            waiting_cycles: 0,
        }
    }

    #[inline(always)]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    /// Cycles left in the current CPU half
    #[inline(always)]
    pub const fn remaining_burst(&self) -> Cycle {
        self.remaining_burst
    }

    /// Cycles reserved for the second CPU half, not yet started
    #[inline(always)]
    pub const fn pending_second_half(&self) -> Cycle {
        self.pending_second_half
    }

    #[inline(always)]
    pub const fn remaining_io(&self) -> Cycle {
        self.remaining_io
    }

    /// Consecutive cycles run in the current Round-Robin slice
    #[inline(always)]
    pub const fn quantum_used(&self) -> Cycle {
        self.quantum_used
    }

    #[inline(always)]
    pub const fn finish_time(&self) -> Option<Cycle> {
        self.finish_time
    }

    /// Cycles spent Ready without being selected
    #[inline(always)]
    pub const fn waiting_cycles(&self) -> Cycle {
        self.waiting_cycles
    }

    /// Total CPU work still owed, second half included
    #[inline(always)]
    pub const fn remaining_work(&self) -> Cycle {
        self.remaining_burst + self.pending_second_half
    }

    #[inline(always)]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ProcessState::Finished)
    }

    #[inline(always)]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    /// `finish_time - arrival`, once finished
    #[inline]
    pub fn turnaround(&self) -> Option<Cycle> {
        self.finish_time.map(|finish| finish - self.arrival)
    }

    /// Admit at `cycle`, splitting the CPU burst around the I/O phase
    ///
    /// The first half is the ceiling of half the total. A process with no CPU
    /// work finishes on the spot.
    pub(crate) fn admit(&mut self, cycle: Cycle) -> Admission {
        debug_assert_eq!(self.state, ProcessState::Unadmitted);
        debug_assert_eq!(self.arrival, cycle);

        self.remaining_burst = self.cpu_burst_total.div_ceil(2);
        self.pending_second_half = self.cpu_burst_total - self.remaining_burst;

        if self.cpu_burst_total == 0 {
            self.state = ProcessState::Finished;
            self.finish_time = Some(cycle);
            Admission::Finished
        } else {
            self.state = ProcessState::Ready;
            Admission::Ready
        }
    }

    /// Ready -> Running for the current cycle
    pub(crate) fn dispatch(&mut self) -> Result<(), SchedulerError> {
        if self.state != ProcessState::Ready {
            return Err(SchedulerError::NotReady {
                pid: self.pid,
                state: self.state,
            });
        }
        self.state = ProcessState::Running;
        Ok(())
    }

    /// Consume one cycle of CPU and apply the half/finish transitions
    pub(crate) fn run_cycle(&mut self, cycle: Cycle) -> BurstOutcome {
        debug_assert_eq!(self.state, ProcessState::Running);
        debug_assert!(self.remaining_burst > 0);

        self.remaining_burst -= 1;
        if self.remaining_burst > 0 {
            return BurstOutcome::Continued;
        }

        if self.pending_second_half == 0 {
            self.state = ProcessState::Finished;
            self.finish_time = Some(cycle + 1);
            return BurstOutcome::Finished;
        }

        self.remaining_burst = self.pending_second_half;
        self.pending_second_half = 0;

        if self.io_burst > 0 {
            self.state = ProcessState::Blocked;
            self.remaining_io = self.io_burst;
            BurstOutcome::Blocked
        } else {
            BurstOutcome::Continued
        }
    }

    /// Running -> Ready at the end of a cycle in which it kept its work
    pub(crate) fn release(&mut self) {
        if self.state == ProcessState::Running {
            self.state = ProcessState::Ready;
        }
    }

    /// Count down one cycle of I/O; true when the process became Ready
    pub(crate) fn tick_io(&mut self) -> bool {
        debug_assert_eq!(self.state, ProcessState::Blocked);
        self.remaining_io = self.remaining_io.saturating_sub(1);
        if self.remaining_io == 0 {
            self.state = ProcessState::Ready;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn add_waiting_cycle(&mut self) {
        self.waiting_cycles += 1;
    }
}
