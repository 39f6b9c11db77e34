/*!
 * Scheduler Builder
 * Builder pattern and environment-driven configuration for Scheduler construction
 */

use super::Scheduler;
use crate::core::errors::ConfigError;
use crate::core::limits::{ENV_MAX_CYCLES, ENV_QUANTUM};
use crate::core::types::{Cycle, SimResult};
use crate::process::types::ProcessDescriptor;
use crate::scheduler::{SchedulingPolicy, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

/// Everything that parameterizes a run besides the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub policy: SchedulingPolicy,
    #[serde(default)]
    pub quantum: TimeQuantum,
    /// Abort once this many cycles have elapsed; unbounded when `None`
    #[serde(default)]
    pub max_cycles: Option<Cycle>,
}

impl SimulationConfig {
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            quantum: TimeQuantum::default(),
            max_cycles: None,
        }
    }

    /// Defaults, overridden by `SCHED_RR_QUANTUM` / `SCHED_MAX_CYCLES`
    pub fn from_env(policy: SchedulingPolicy) -> Result<Self, ConfigError> {
        Self::from_lookup(policy, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable source
    pub fn from_lookup<F>(policy: SchedulingPolicy, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(policy);

        if let Some(raw) = lookup(ENV_QUANTUM) {
            config.quantum = raw.trim().parse()?;
            debug!(quantum = config.quantum.cycles(), "Quantum overridden from environment");
        }

        if let Some(raw) = lookup(ENV_MAX_CYCLES) {
            let limit = parse_cycle_limit(&raw)?;
            config.max_cycles = Some(limit);
            debug!(max_cycles = limit, "Cycle limit set from environment");
        }

        Ok(config)
    }

    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Cycle) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(SchedulingPolicy::Fcfs)
    }
}

fn parse_cycle_limit(raw: &str) -> Result<Cycle, ConfigError> {
    match raw.trim().parse::<Cycle>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidCycleLimit(raw.to_string())),
    }
}

/// Builder for Scheduler
#[derive(Debug, Default)]
pub struct SchedulerBuilder {
    config: SimulationConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl SchedulerBuilder {
    /// Create a new Scheduler builder (FCFS, default quantum, no cycle limit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Round-Robin time slice; ignored by the other policies
    pub fn with_quantum(mut self, quantum: TimeQuantum) -> Self {
        self.config.quantum = quantum;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Cycle) -> Self {
        self.config.max_cycles = Some(max_cycles);
        self
    }

    /// Abort the run at the next cycle boundary once `flag` is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Build the Scheduler over a fresh process table
    pub fn build(self, descriptors: &[ProcessDescriptor]) -> SimResult<Scheduler> {
        if self.config.max_cycles == Some(0) {
            return Err(ConfigError::InvalidCycleLimit("0".to_string()).into());
        }

        let mut features = Vec::new();
        if self.config.policy == SchedulingPolicy::RoundRobin {
            features.push("quantum");
        }
        if self.cancel.is_some() {
            features.push("cancellation");
        }
        if self.config.max_cycles.is_some() {
            features.push("cycle-limit");
        }
        debug!(
            policy = %self.config.policy,
            features = ?features,
            "Building scheduler"
        );

        Scheduler::from_parts(self.config, descriptors, self.cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SimulationConfig::from_lookup(SchedulingPolicy::RoundRobin, lookup(&[])).unwrap();
        assert_eq!(config, SimulationConfig::new(SchedulingPolicy::RoundRobin));
        assert_eq!(config.quantum.cycles(), 2);
        assert_eq!(config.max_cycles, None);
    }

    #[test]
    fn test_overrides_applied() {
        let config = SimulationConfig::from_lookup(
            SchedulingPolicy::RoundRobin,
            lookup(&[(ENV_QUANTUM, " 4 "), (ENV_MAX_CYCLES, "500")]),
        )
        .unwrap();
        assert_eq!(config.quantum.cycles(), 4);
        assert_eq!(config.max_cycles, Some(500));
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let err = SimulationConfig::from_lookup(
            SchedulingPolicy::Fcfs,
            lookup(&[(ENV_QUANTUM, "0")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuantum(_)));

        let err = SimulationConfig::from_lookup(
            SchedulingPolicy::Fcfs,
            lookup(&[(ENV_MAX_CYCLES, "-3")]),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidCycleLimit("-3".to_string()));
    }

    #[test]
    fn test_builder_applies_config() {
        let scheduler = SchedulerBuilder::new()
            .with_policy(SchedulingPolicy::RoundRobin)
            .with_quantum(TimeQuantum::new(5).unwrap())
            .with_max_cycles(77)
            .build(&[ProcessDescriptor::new(1, 2, 0, 0)])
            .unwrap();
        assert_eq!(scheduler.policy(), SchedulingPolicy::RoundRobin);
        assert_eq!(scheduler.quantum().cycles(), 5);
        assert_eq!(scheduler.config().max_cycles, Some(77));
    }

    #[test]
    fn test_zero_cycle_limit_rejected() {
        let result = SchedulerBuilder::new().with_max_cycles(0).build(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"policy":"srtf"}"#).unwrap();
        assert_eq!(config, SimulationConfig::new(SchedulingPolicy::Srtf));
    }
}
