/*!
 * Batch Comparison
 * Runs every policy over the same population in parallel
 */

use super::{SchedulerBuilder, SimulationConfig, SimulationReport};
use crate::core::types::SimResult;
use crate::process::types::ProcessDescriptor;
use crate::scheduler::SchedulingPolicy;
use std::thread;
use tracing::info;

/// Simulate `descriptors` under FCFS, Round-Robin and SRTF
///
/// Each run gets its own scoped thread and its own table. `config.policy` is
/// ignored; quantum and cycle limit apply to every run. Reports come back in
/// policy order.
pub fn compare_policies(
    descriptors: &[ProcessDescriptor],
    config: SimulationConfig,
) -> SimResult<Vec<SimulationReport>> {
    let results: Vec<SimResult<SimulationReport>> = thread::scope(|scope| {
        let handles: Vec<_> = SchedulingPolicy::ALL
            .into_iter()
            .map(|policy| {
                scope.spawn(move || -> SimResult<SimulationReport> {
                    let mut scheduler = SchedulerBuilder::new()
                        .with_config(config.with_policy(policy))
                        .build(descriptors)?;
                    Ok(scheduler.run()?.report)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    });

    let reports = results.into_iter().collect::<SimResult<Vec<_>>>()?;
    for report in &reports {
        info!(
            policy = %report.policy,
            finishing_time = report.finishing_time,
            cpu_utilization = report.cpu_utilization,
            average_turnaround = report.average_turnaround,
            "Policy comparison result"
        );
    }
    Ok(reports)
}
