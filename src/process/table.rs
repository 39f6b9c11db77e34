/*!
 * Process Table
 * Owns every process record for the lifetime of a simulation
 */

use super::types::{Process, ProcessDescriptor, ProcessState};
use crate::core::errors::{InputError, SchedulerError};
use crate::core::types::Pid;
use std::collections::HashMap;

/// Process records in table order, with a pid index
///
/// Table order is the scan order for admission, I/O countdown, trace lines
/// and the turnaround summary.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    processes: Vec<Process>,
    index: HashMap<Pid, usize>,
}

impl ProcessTable {
    /// Build the table, optionally in ascending pid order (stable)
    pub fn new(descriptors: &[ProcessDescriptor], order_by_id: bool) -> Result<Self, InputError> {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (record, descriptor) in descriptors.iter().enumerate() {
            if index.insert(descriptor.pid, record).is_some() {
                return Err(InputError::DuplicatePid {
                    pid: descriptor.pid,
                    record: record + 1,
                });
            }
        }

        let mut processes: Vec<Process> = descriptors.iter().copied().map(Process::new).collect();
        if order_by_id {
            processes.sort_by_key(|p| p.pid);
        }

        let index = processes
            .iter()
            .enumerate()
            .map(|(slot, p)| (p.pid, slot))
            .collect();

        Ok(Self { processes, index })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.index.get(&pid).map(|&slot| &self.processes[slot])
    }

    pub(crate) fn get_mut(&mut self, pid: Pid) -> Result<&mut Process, SchedulerError> {
        match self.index.get(&pid) {
            Some(&slot) => Ok(&mut self.processes[slot]),
            None => Err(SchedulerError::ProcessNotFound(pid)),
        }
    }

    /// Processes in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Process> {
        self.processes.iter_mut()
    }

    /// Pids in a given state, in table order
    pub fn pids_in(&self, state: ProcessState) -> Vec<Pid> {
        self.processes
            .iter()
            .filter(|p| p.state() == state)
            .map(|p| p.pid)
            .collect()
    }

    pub fn count_in(&self, state: ProcessState) -> usize {
        self.processes.iter().filter(|p| p.state() == state).count()
    }

    /// True once every process has reached Finished (vacuously for an empty table)
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
