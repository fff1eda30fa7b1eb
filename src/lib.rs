//! # Pipeline Status
//!
//! Commit-status reconciliation for pipeline executions triggered by
//! source-control events.
//!
//! ## Features
//!
//! - **Job status resolution** - Map a pipeline execution's task/run records to
//!   a pending, success or failure state per declared job
//! - **Description codec** - Embed a base commit SHA in a length-bounded status
//!   description and recover it on the next reconciliation pass
//! - **Per-backend budgets** - Description limits configured per code host
//!
//! Everything here is pure: no I/O beyond the optional file loaders, no
//! shared state. Callers own the reconcile loop and the HTTP client.
//!
//! ## Quick Start
//!
//! ```rust
//! use pipeline_status::prelude::*;
//!
//! let snapshot: PipelineExecutionSnapshot = serde_yaml::from_str(r#"
//! taskRuns:
//!   pr-42-build-x7k2p:
//!     pipelineTaskName: build
//!     status:
//!       startTime: "2021-06-01T10:00:00Z"
//!       conditions:
//!         - status: "Unknown"
//! "#).unwrap();
//!
//! let job = JobDefinition::new("build");
//! let status = StatusResolver::resolve_job(&snapshot, &job);
//! assert_eq!(status.state, CommitStatusState::Pending);
//!
//! let codec = DescriptionCodec::default();
//! let report = status.to_report(&codec, "2641c89aac959fb804ec6f2a4a22e129f4ac4900");
//! assert_eq!(
//!     codec.parse_base_sha(&report.description),
//!     Some("2641c89aac959fb804ec6f2a4a22e129f4ac4900")
//! );
//! ```

pub mod description;
pub mod pipeline;
pub mod status;

// Re-export main types
pub use description::{append_base_sha, parse_base_sha, CodecConfig, CodecError, DescriptionCodec};
pub use pipeline::{
    Condition, ConditionStatus, ExecutionKind, ExecutionStatus, IntegrationJobs, JobDefinition,
    JobKind, LoadError, Observation, PipelineExecutionSnapshot, RunExecution, SnapshotLoader,
    StatusConfig, SubExecution, TaskExecution,
};
pub use status::{CommitStatusState, JobStatus, StatusReport, StatusResolver};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::description::{append_base_sha, parse_base_sha, CodecConfig, DescriptionCodec};
    pub use crate::pipeline::{
        Condition, ConditionStatus, IntegrationJobs, JobDefinition, JobKind, LoadError,
        PipelineExecutionSnapshot, RunExecution, SnapshotLoader, StatusConfig, TaskExecution,
    };
    pub use crate::status::{CommitStatusState, JobStatus, StatusReport, StatusResolver};
}
