/*!
 * Scheduler Types
 * Policy identifiers and time quantum configuration
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_QUANTUM_CYCLES, MAX_QUANTUM_CYCLES};
use crate::core::types::Cycle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Short-term scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Round-robin with a fixed time quantum
    RoundRobin,
    /// Preemptive shortest-remaining-time-first
    Srtf,
}

impl SchedulingPolicy {
    /// Every policy, in CLI code order
    pub const ALL: [SchedulingPolicy; 3] = [Self::Fcfs, Self::RoundRobin, Self::Srtf];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin => "round_robin",
            Self::Srtf => "srtf",
        }
    }

    /// Numeric code used on the command line and in output file names
    #[inline(always)]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Fcfs => 0,
            Self::RoundRobin => 1,
            Self::Srtf => 2,
        }
    }

    /// Whether the process table is put in ascending id order at load time
    ///
    /// FCFS and SRTF break same-cycle arrival ties by id; Round-Robin keeps
    /// input order.
    #[inline]
    pub const fn orders_by_id(&self) -> bool {
        matches!(self, Self::Fcfs | Self::Srtf)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "fcfs" | "fifo" => Ok(Self::Fcfs),
            "1" | "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "2" | "srtf" | "srt" => Ok(Self::Srtf),
            _ => Err(ConfigError::InvalidPolicy(format!(
                "'{}'. Valid: 0 (fcfs), 1 (rr), 2 (srtf)",
                s
            ))),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time quantum, in cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum {
    cycles: Cycle,
}

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(cycles: Cycle) -> Result<Self, ConfigError> {
        if cycles == 0 || cycles > MAX_QUANTUM_CYCLES {
            return Err(ConfigError::InvalidQuantum(format!(
                "{} must be between 1 and {} cycles",
                cycles, MAX_QUANTUM_CYCLES
            )));
        }
        Ok(Self { cycles })
    }

    #[inline(always)]
    pub const fn cycles(&self) -> Cycle {
        self.cycles
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_QUANTUM_CYCLES,
        }
    }
}

impl FromStr for TimeQuantum {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cycles = s
            .trim()
            .parse::<Cycle>()
            .map_err(|_| ConfigError::InvalidQuantum(format!("'{}' is not a cycle count", s)))?;
        Self::new(cycles)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            cycles: Cycle,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.cycles).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("0".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Fcfs);
        assert_eq!(
            "1".parse::<SchedulingPolicy>().unwrap(),
            SchedulingPolicy::RoundRobin
        );
        assert_eq!("2".parse::<SchedulingPolicy>().unwrap(), SchedulingPolicy::Srtf);
        assert_eq!(
            "Round_Robin".parse::<SchedulingPolicy>().unwrap(),
            SchedulingPolicy::RoundRobin
        );
        assert!("3".parse::<SchedulingPolicy>().is_err());
        assert!("lottery".parse::<SchedulingPolicy>().is_err());
    }

    #[test]
    fn test_policy_codes_match_cli_order() {
        for (i, policy) in SchedulingPolicy::ALL.iter().enumerate() {
            assert_eq!(policy.code() as usize, i);
            assert_eq!(
                policy.code().to_string().parse::<SchedulingPolicy>().unwrap(),
                *policy
            );
        }
    }

    #[test]
    fn test_policy_serde_uses_name() {
        let json = serde_json::to_string(&SchedulingPolicy::Srtf).unwrap();
        assert_eq!(json, "\"srtf\"");
        let back: SchedulingPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SchedulingPolicy::Srtf);
    }

    #[test]
    fn test_time_quantum_validation() {
        assert!(TimeQuantum::new(0).is_err());
        assert_eq!(TimeQuantum::new(1).unwrap().cycles(), 1);
        assert!(TimeQuantum::new(MAX_QUANTUM_CYCLES).is_ok());
        assert!(TimeQuantum::new(MAX_QUANTUM_CYCLES + 1).is_err());
        assert_eq!(TimeQuantum::default().cycles(), 2);
        assert!("abc".parse::<TimeQuantum>().is_err());
        assert_eq!("3".parse::<TimeQuantum>().unwrap().cycles(), 3);
    }
}
