/*!
 * Simulation Statistics
 * Per-cycle accounting and the end-of-run summary
 */

use super::Scheduler;
use crate::core::types::{Cycle, Pid};
use crate::scheduler::SchedulingPolicy;
use serde::Serialize;

/// Counters updated once per simulated cycle
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetricsCollector {
    busy_cycles: Cycle,
    context_switches: u64,
    preemptions: u64,
    last_runner: Option<Pid>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one cycle
    ///
    /// `displaced` is true when last cycle's runner is still Ready but was not
    /// selected this cycle.
    pub fn record_cycle(&mut self, runner: Option<Pid>, displaced: bool) {
        if let Some(pid) = runner {
            self.busy_cycles += 1;
            if self.last_runner != Some(pid) {
                self.context_switches += 1;
            }
        }
        if displaced {
            self.preemptions += 1;
        }
        self.last_runner = runner;
    }

    #[inline]
    pub fn busy_cycles(&self) -> Cycle {
        self.busy_cycles
    }

    #[inline]
    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    #[inline]
    pub fn preemptions(&self) -> u64 {
        self.preemptions
    }

    /// Runner of the most recently recorded cycle
    #[inline]
    pub fn last_runner(&self) -> Option<Pid> {
        self.last_runner
    }
}

/// Busy fraction of elapsed cycles; zero when nothing elapsed
pub fn cpu_utilization(busy_cycles: Cycle, elapsed: Cycle) -> f64 {
    if elapsed == 0 {
        0.0
    } else {
        busy_cycles as f64 / elapsed as f64
    }
}

/// Per-process summary line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSummary {
    pub pid: Pid,
    pub arrival: Cycle,
    pub finish_time: Option<Cycle>,
    pub turnaround: Option<Cycle>,
    pub waiting_cycles: Cycle,
}

/// End-of-run summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Cycle>,
    /// Cycles elapsed when the loop exited
    pub finishing_time: Cycle,
    pub cpu_busy_cycles: Cycle,
    pub idle_cycles: Cycle,
    pub cpu_utilization: f64,
    pub context_switches: u64,
    pub preemptions: u64,
    pub average_turnaround: f64,
    /// In table order
    pub processes: Vec<ProcessSummary>,
}

impl SimulationReport {
    pub fn turnaround_of(&self, pid: Pid) -> Option<Cycle> {
        self.processes
            .iter()
            .find(|p| p.pid == pid)
            .and_then(|p| p.turnaround)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Scheduler {
    /// Summary of the run up to the current cycle
    pub fn report(&self) -> SimulationReport {
        let processes: Vec<ProcessSummary> = self
            .table
            .iter()
            .map(|p| ProcessSummary {
                pid: p.pid,
                arrival: p.arrival,
                finish_time: p.finish_time(),
                turnaround: p.turnaround(),
                waiting_cycles: p.waiting_cycles(),
            })
            .collect();

        let turnarounds: Vec<Cycle> = processes.iter().filter_map(|p| p.turnaround).collect();
        let average_turnaround = if turnarounds.is_empty() {
            0.0
        } else {
            turnarounds.iter().sum::<Cycle>() as f64 / turnarounds.len() as f64
        };

        let busy = self.metrics.busy_cycles();
        SimulationReport {
            policy: self.config.policy,
            quantum: (self.config.policy == SchedulingPolicy::RoundRobin)
                .then(|| self.config.quantum.cycles()),
            finishing_time: self.cycle,
            cpu_busy_cycles: busy,
            idle_cycles: self.cycle - busy,
            cpu_utilization: cpu_utilization(busy, self.cycle),
            context_switches: self.metrics.context_switches(),
            preemptions: self.metrics.preemptions(),
            average_turnaround,
            processes,
        }
    }
}
