/*!
 * Ready Queue
 * Bounded circular FIFO of process identifiers
 */

use crate::core::errors::SchedulerError;
use crate::core::types::Pid;

/// Fixed-capacity ring buffer of pids
///
/// Holds identifiers only; the process table owns the records. `len` is
/// tracked separately from `head`, so a full queue and an empty one never
/// look alike.
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    slots: Box<[Pid]>,
    head: usize,
    len: usize,
}

impl ReadyQueue {
    /// Create a queue able to hold `capacity` pids
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Append at the tail
    pub fn enqueue(&mut self, pid: Pid) -> Result<(), SchedulerError> {
        debug_assert!(!self.is_full(), "ready queue overflow at capacity {}", self.capacity());
        if self.is_full() {
            return Err(SchedulerError::QueueFull {
                capacity: self.capacity(),
            });
        }
        debug_assert!(!self.contains(pid), "process {} queued twice", pid);
        if self.contains(pid) {
            return Err(SchedulerError::DuplicateEntry(pid));
        }

        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = pid;
        self.len += 1;
        Ok(())
    }

    /// Remove from the front
    pub fn dequeue(&mut self) -> Result<Pid, SchedulerError> {
        debug_assert!(!self.is_empty(), "dequeue from empty ready queue");
        if self.is_empty() {
            return Err(SchedulerError::QueueEmpty);
        }

        let pid = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Ok(pid)
    }

    /// Front pid without removing it
    #[inline]
    pub fn peek_front(&self) -> Option<Pid> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Move the front pid to the tail
    pub fn rotate(&mut self) -> Result<Pid, SchedulerError> {
        let pid = self.dequeue()?;
        self.enqueue(pid)?;
        Ok(pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.iter().any(|queued| queued == pid)
    }

    /// Pids from front to back
    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        (0..self.len).map(move |offset| self.slots[(self.head + offset) % self.slots.len()])
    }
}
