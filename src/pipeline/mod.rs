//! Pipeline execution inputs
//!
//! This module contains the read-only shapes consumed by status resolution:
//! - `snapshot` - Pipeline execution snapshots and their task/run sub-executions
//! - `job` - Job definitions and integration job lists
//! - `loader` - Load snapshots and job lists from YAML or JSON files
//! - `config` - Status reporting configuration (description budgets per backend)

pub mod config;
pub mod job;
pub mod loader;
pub mod snapshot;

pub use config::StatusConfig;
pub use job::{IntegrationJobs, JobDefinition, JobKind};
pub use loader::{LoadError, SnapshotLoader};
pub use snapshot::{
    Condition, ConditionStatus, ExecutionKind, ExecutionStatus, Observation,
    PipelineExecutionSnapshot, RunExecution, SubExecution, TaskExecution,
};
