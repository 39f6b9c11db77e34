/*!
 * Scheduler Core Operations
 * Admission, dispatch, burst accounting and I/O countdown for one cycle
 */

use super::Scheduler;
use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SimResult};
use crate::process::types::{Admission, BurstOutcome, ProcessState};
use crate::scheduler::SliceEnd;
use crate::trace::{CycleSnapshot, SimulationOutput};
use std::sync::atomic::Ordering;
use tracing::{debug, info, info_span, trace};

impl Scheduler {
    /// Advance exactly one cycle
    ///
    /// Returns the cycle's snapshot, or `None` once every process has
    /// finished (the cycle counter is then the finishing time).
    pub fn step(&mut self) -> SimResult<Option<CycleSnapshot>> {
        if self.table.all_finished() {
            return Ok(None);
        }

        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(SchedulerError::Cancelled { cycle: self.cycle }.into());
            }
        }
        if let Some(limit) = self.config.max_cycles {
            if self.cycle >= limit {
                return Err(SchedulerError::CycleLimitExceeded { limit }.into());
            }
        }

        self.admit_arrivals()?;
        // Zero-burst arrivals can finish the population without a cycle running
        if self.table.all_finished() {
            return Ok(None);
        }

        let selected = self.dispatch()?;
        self.check_single_runner()?;

        let snapshot = CycleSnapshot::capture(self.cycle, &self.table);
        trace!(line = %snapshot, "cycle");

        self.account_cycle(selected);

        let blocked: Vec<Pid> = self.table.pids_in(ProcessState::Blocked);
        if let Some(pid) = selected {
            self.complete_cycle(pid)?;
        }
        self.advance_io(&blocked)?;

        self.cycle += 1;
        Ok(Some(snapshot))
    }

    /// Run to completion, collecting every cycle's snapshot
    pub fn run(&mut self) -> SimResult<SimulationOutput> {
        let span = info_span!("simulation", policy = %self.config.policy);
        let _guard = span.enter();

        info!(processes = self.table.len(), "Simulation started");

        let mut snapshots = Vec::new();
        while let Some(snapshot) = self.step()? {
            snapshots.push(snapshot);
        }

        let report = self.report();
        info!(
            finishing_time = report.finishing_time,
            cpu_utilization = report.cpu_utilization,
            context_switches = report.context_switches,
            "Simulation finished"
        );

        Ok(SimulationOutput { snapshots, report })
    }

    /// Admit every process arriving this cycle, in table order
    fn admit_arrivals(&mut self) -> Result<(), SchedulerError> {
        let cycle = self.cycle;
        let mut admitted = Vec::new();

        for process in self.table.iter_mut() {
            if process.state() != ProcessState::Unadmitted || process.arrival != cycle {
                continue;
            }
            match process.admit(cycle) {
                Admission::Ready => admitted.push(process.pid),
                Admission::Finished => {
                    debug!(pid = process.pid, cycle, "Process has no CPU work, finished on arrival");
                }
            }
        }

        for pid in admitted {
            debug!(pid, cycle, "Process admitted");
            self.strategy.on_ready(pid)?;
        }
        Ok(())
    }

    /// Ask the strategy for this cycle's runner and mark it Running
    fn dispatch(&mut self) -> Result<Option<Pid>, SchedulerError> {
        let selected = self.strategy.select(&self.table);
        if let Some(pid) = selected {
            self.table.get_mut(pid)?.dispatch()?;
            if self.metrics.last_runner() != Some(pid) {
                debug!(pid, cycle = self.cycle, "Process dispatched");
            }
        }
        Ok(selected)
    }

    fn check_single_runner(&self) -> Result<(), SchedulerError> {
        let running = self.table.count_in(ProcessState::Running);
        debug_assert!(running <= 1, "{running} processes running in cycle {}", self.cycle);
        if running > 1 {
            return Err(SchedulerError::MultipleRunning { cycle: self.cycle });
        }
        Ok(())
    }

    /// Busy/switch/preemption counters and per-process waiting time
    fn account_cycle(&mut self, selected: Option<Pid>) {
        let displaced = match self.metrics.last_runner() {
            Some(previous) if Some(previous) != selected => self
                .table
                .get(previous)
                .is_some_and(|p| p.state() == ProcessState::Ready),
            _ => false,
        };
        if displaced {
            debug!(cycle = self.cycle, "Process preempted");
        }
        self.metrics.record_cycle(selected, displaced);

        for process in self.table.iter_mut() {
            if process.is_ready() {
                process.add_waiting_cycle();
            }
        }
    }

    /// Burn one cycle of the runner's burst and apply its transition
    fn complete_cycle(&mut self, pid: Pid) -> Result<(), SchedulerError> {
        let cycle = self.cycle;
        let process = self.table.get_mut(pid)?;
        let outcome = process.run_cycle(cycle);
        let slice = self.strategy.on_ran(process, outcome)?;

        match outcome {
            BurstOutcome::Continued => process.release(),
            BurstOutcome::Blocked => {
                debug!(pid, cycle, io = process.remaining_io(), "Process blocked on I/O");
            }
            BurstOutcome::Finished => {
                debug!(pid, finish_time = cycle + 1, "Process finished");
            }
        }
        if slice == SliceEnd::Expired {
            trace!(pid, cycle, "Quantum expired");
        }
        Ok(())
    }

    /// Count down I/O for processes that were already Blocked this cycle
    fn advance_io(&mut self, blocked: &[Pid]) -> Result<(), SchedulerError> {
        for &pid in blocked {
            if self.table.get_mut(pid)?.tick_io() {
                debug!(pid, cycle = self.cycle, "I/O complete, process ready");
                self.strategy.on_ready(pid)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SimError;
    use crate::process::scheduler::SchedulerBuilder;
    use crate::process::types::ProcessDescriptor;
    use crate::scheduler::SchedulingPolicy;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn lines(policy: SchedulingPolicy, descriptors: &[ProcessDescriptor]) -> Vec<String> {
        let mut scheduler = Scheduler::new(policy, descriptors).unwrap();
        let output = scheduler.run().unwrap();
        output.snapshots.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_idle_cycles_before_first_arrival() {
        let trace = lines(SchedulingPolicy::Fcfs, &[ProcessDescriptor::new(1, 1, 0, 2)]);
        assert_eq!(trace, vec!["0", "1", "2 1:running"]);
    }

    #[test]
    fn test_zero_burst_population_finishes_at_arrival() {
        let mut scheduler =
            Scheduler::new(SchedulingPolicy::Fcfs, &[ProcessDescriptor::new(4, 0, 5, 3)]).unwrap();
        let output = scheduler.run().unwrap();
        assert_eq!(output.snapshots.len(), 3);
        assert_eq!(output.report.finishing_time, 3);
        assert_eq!(output.report.turnaround_of(4), Some(0));
        assert_eq!(output.report.cpu_utilization, 0.0);
    }

    #[test]
    fn test_empty_population() {
        let mut scheduler = Scheduler::new(SchedulingPolicy::RoundRobin, &[]).unwrap();
        assert!(scheduler.step().unwrap().is_none());
        let output = scheduler.run().unwrap();
        assert!(output.snapshots.is_empty());
        assert_eq!(output.report.finishing_time, 0);
    }

    #[test]
    fn test_woken_process_enqueued_behind_current_runner() {
        // 1 blocks at cycle 0 and wakes at the end of cycle 1; 2 keeps the CPU
        let trace = lines(
            SchedulingPolicy::Fcfs,
            &[
                ProcessDescriptor::new(1, 2, 1, 0),
                ProcessDescriptor::new(2, 3, 0, 0),
            ],
        );
        assert_eq!(
            trace,
            vec![
                "0 1:running 2:ready",
                "1 1:blocked 2:running",
                "2 1:ready 2:running",
                "3 1:ready 2:running",
                "4 1:running",
            ]
        );
    }

    #[test]
    fn test_step_exposes_intermediate_state() {
        let mut scheduler =
            Scheduler::new(SchedulingPolicy::Fcfs, &[ProcessDescriptor::new(1, 5, 2, 0)]).unwrap();
        for _ in 0..3 {
            scheduler.step().unwrap();
        }
        let process = scheduler.table().get(1).unwrap();
        assert_eq!(process.state(), ProcessState::Blocked);
        assert_eq!(process.remaining_io(), 2);
        assert!(scheduler.queued().is_empty());
    }

    #[test]
    fn test_srtf_preemption_counted() {
        let mut scheduler = Scheduler::new(
            SchedulingPolicy::Srtf,
            &[
                ProcessDescriptor::new(1, 6, 0, 0),
                ProcessDescriptor::new(2, 1, 0, 1),
            ],
        )
        .unwrap();
        let output = scheduler.run().unwrap();
        let trace: Vec<String> = output.snapshots.iter().map(ToString::to_string).collect();
        assert_eq!(trace[1], "1 1:ready 2:running");
        assert_eq!(output.report.preemptions, 1);
        assert_eq!(output.report.context_switches, 3);
        assert_eq!(output.report.processes[0].waiting_cycles, 1);
    }

    #[test]
    fn test_cycle_limit() {
        let mut scheduler = SchedulerBuilder::new()
            .with_policy(SchedulingPolicy::Fcfs)
            .with_max_cycles(3)
            .build(&[ProcessDescriptor::new(1, 10, 0, 0)])
            .unwrap();
        let err = scheduler.run().unwrap_err();
        assert!(matches!(
            err,
            SimError::Scheduler(SchedulerError::CycleLimitExceeded { limit: 3 })
        ));
        assert_eq!(scheduler.cycle(), 3);
    }

    #[test]
    fn test_cancellation_between_cycles() {
        let cancel = Arc::new(AtomicBool::new(false));
        let mut scheduler = SchedulerBuilder::new()
            .with_policy(SchedulingPolicy::RoundRobin)
            .with_cancellation(Arc::clone(&cancel))
            .build(&[ProcessDescriptor::new(1, 10, 0, 0)])
            .unwrap();

        scheduler.step().unwrap();
        cancel.store(true, Ordering::Relaxed);
        let err = scheduler.step().unwrap_err();
        assert!(matches!(
            err,
            SimError::Scheduler(SchedulerError::Cancelled { cycle: 1 })
        ));
    }
}
