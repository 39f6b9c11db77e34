/*!
 * Core Types
 * Common types used across the simulator
 */

/// External process identifier, as given in the input description
pub type Pid = u32;

/// Simulated time, and every duration measured in it (bursts, I/O waits)
pub type Cycle = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
