/*!
 * Scheduler Module
 * Scheduling policies and the strategy interface the engine drives
 */

pub mod fcfs;
pub mod round_robin;
pub mod srtf;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::FcfsStrategy;
pub use round_robin::RoundRobinStrategy;
pub use srtf::SrtfStrategy;
pub use traits::{SchedulingStrategy, SliceEnd};
pub use types::{SchedulingPolicy, TimeQuantum};

/// Build the strategy for `policy`, with queue room for `population` processes
pub fn strategy_for(
    policy: SchedulingPolicy,
    quantum: TimeQuantum,
    population: usize,
) -> Box<dyn SchedulingStrategy> {
    match policy {
        SchedulingPolicy::Fcfs => Box::new(FcfsStrategy::new(population)),
        SchedulingPolicy::RoundRobin => Box::new(RoundRobinStrategy::new(population, quantum)),
        SchedulingPolicy::Srtf => Box::new(SrtfStrategy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_matches_policy() {
        for policy in SchedulingPolicy::ALL {
            let strategy = strategy_for(policy, TimeQuantum::default(), 4);
            assert_eq!(strategy.policy(), policy);
        }
    }
}
