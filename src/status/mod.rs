//! Job status resolution
//!
//! This module contains:
//! - `state` - The commit status state reported per job
//! - `conditions` - Reduction of a condition history to a state
//! - `resolver` - Lookup of a job's sub-execution and its resolved state
//! - `result` - Per-job status details and outbound status reports

pub mod conditions;
pub mod resolver;
pub mod result;
pub mod state;

pub use resolver::StatusResolver;
pub use result::{JobStatus, StatusReport};
pub use state::CommitStatusState;
