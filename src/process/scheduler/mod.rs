/*!
 * Simulation Engine
 * Drives a process population cycle by cycle under one scheduling policy
 */

use crate::core::types::{Cycle, Pid, SimResult};
use crate::process::table::ProcessTable;
use crate::process::types::ProcessDescriptor;
use crate::scheduler::{strategy_for, SchedulingPolicy, SchedulingStrategy, TimeQuantum};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

mod batch;
mod builder;
mod operations;
mod stats;

pub use batch::compare_policies;
pub use builder::{SchedulerBuilder, SimulationConfig};
pub use stats::{cpu_utilization, MetricsCollector, ProcessSummary, SimulationReport};

/// Cycle-driven scheduler
///
/// Owns its process table and ready-queue state outright, so independent runs
/// never share anything.
pub struct Scheduler {
    config: SimulationConfig,
    table: ProcessTable,
    strategy: Box<dyn SchedulingStrategy>,
    metrics: MetricsCollector,
    cycle: Cycle,
    cancel: Option<Arc<AtomicBool>>,
}

impl Scheduler {
    /// Scheduler with default quantum and cycle limit
    pub fn new(policy: SchedulingPolicy, descriptors: &[ProcessDescriptor]) -> SimResult<Self> {
        SchedulerBuilder::new().with_policy(policy).build(descriptors)
    }

    pub(super) fn from_parts(
        config: SimulationConfig,
        descriptors: &[ProcessDescriptor],
        cancel: Option<Arc<AtomicBool>>,
    ) -> SimResult<Self> {
        let table = ProcessTable::new(descriptors, config.policy.orders_by_id())?;
        let strategy = strategy_for(config.policy, config.quantum, table.len());

        info!(
            policy = %config.policy,
            quantum = config.quantum.cycles(),
            processes = table.len(),
            "Scheduler initialized"
        );

        Ok(Self {
            config,
            table,
            strategy,
            metrics: MetricsCollector::new(),
            cycle: 0,
            cancel,
        })
    }

    #[inline]
    pub fn policy(&self) -> SchedulingPolicy {
        self.config.policy
    }

    #[inline]
    pub fn quantum(&self) -> TimeQuantum {
        self.config.quantum
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Cycles elapsed so far
    #[inline]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    #[inline]
    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    /// Ready-queue contents front to back; empty for SRTF
    pub fn queued(&self) -> Vec<Pid> {
        self.strategy.queued()
    }

    pub fn is_complete(&self) -> bool {
        self.table.all_finished()
    }
}
