/*!
 * Cycle Snapshots
 * The per-cycle view of process states that makes up the trace
 */

use crate::core::types::{Cycle, Pid};
use crate::process::table::ProcessTable;
use crate::process::types::ProcessState;
use serde::Serialize;
use std::fmt;

/// One process's state in a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub pid: Pid,
    pub state: ProcessState,
}

/// States of every admitted, unfinished process during one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSnapshot {
    pub cycle: Cycle,
    pub entries: Vec<TraceEntry>,
}

impl CycleSnapshot {
    /// Record the table as it stands after dispatch, in table order
    pub fn capture(cycle: Cycle, table: &ProcessTable) -> Self {
        let entries = table
            .iter()
            .filter(|p| p.state().trace_label().is_some())
            .map(|p| TraceEntry {
                pid: p.pid,
                state: p.state(),
            })
            .collect();
        Self { cycle, entries }
    }

    /// The process that held the CPU, if any
    pub fn running(&self) -> Option<Pid> {
        self.entries
            .iter()
            .find(|e| e.state == ProcessState::Running)
            .map(|e| e.pid)
    }

    pub fn state_of(&self, pid: Pid) -> Option<ProcessState> {
        self.entries.iter().find(|e| e.pid == pid).map(|e| e.state)
    }

    pub fn count(&self, state: ProcessState) -> usize {
        self.entries.iter().filter(|e| e.state == state).count()
    }
}

/// `<cycle> <id>:<status> <id>:<status> ...`
impl fmt::Display for CycleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cycle)?;
        for entry in &self.entries {
            if let Some(label) = entry.state.trace_label() {
                write!(f, " {}:{}", entry.pid, label)?;
            }
        }
        Ok(())
    }
}
