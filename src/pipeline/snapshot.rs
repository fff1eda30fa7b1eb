//! Pipeline execution snapshots
//!
//! A point-in-time view of a pipeline execution, as handed over by the
//! watch layer. Task executions and custom-run executions are kept in two
//! maps keyed by execution-record identifier; both expose the same
//! [`SubExecution`] capability so lookups don't care which map they search.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Conditions
// ============================================================================

/// Tri-state value carried by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single observation in a sub-execution's condition history
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub status: ConditionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn new(status: ConditionStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// ============================================================================
// Sub-executions
// ============================================================================

/// Reported status of a task or run sub-execution
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,

    /// Only task executions run in a pod
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,
}

/// Whether a sub-execution has reported a status yet
#[derive(Debug, Clone, Copy)]
pub enum Observation<'a> {
    Unobserved,
    Observed(&'a ExecutionStatus),
}

/// Which snapshot map a sub-execution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionKind {
    Task,
    Run,
}

/// Capability shared by every sub-execution record
pub trait SubExecution {
    /// Name of the pipeline task this record executes
    fn declared_name(&self) -> &str;

    fn observation(&self) -> Observation<'_>;

    fn kind(&self) -> ExecutionKind;
}

/// A task sub-execution
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecution {
    pub pipeline_task_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExecutionStatus>,
}

/// A custom-run sub-execution
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunExecution {
    pub pipeline_task_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExecutionStatus>,
}

fn observe(status: &Option<ExecutionStatus>) -> Observation<'_> {
    match status {
        Some(status) => Observation::Observed(status),
        None => Observation::Unobserved,
    }
}

impl SubExecution for TaskExecution {
    fn declared_name(&self) -> &str {
        &self.pipeline_task_name
    }

    fn observation(&self) -> Observation<'_> {
        observe(&self.status)
    }

    fn kind(&self) -> ExecutionKind {
        ExecutionKind::Task
    }
}

impl SubExecution for RunExecution {
    fn declared_name(&self) -> &str {
        &self.pipeline_task_name
    }

    fn observation(&self) -> Observation<'_> {
        observe(&self.status)
    }

    fn kind(&self) -> ExecutionKind {
        ExecutionKind::Run
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Point-in-time view of a pipeline execution
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PipelineExecutionSnapshot {
    /// Task sub-executions keyed by execution-record identifier
    #[serde(default)]
    pub task_runs: HashMap<String, TaskExecution>,

    /// Custom-run sub-executions keyed by execution-record identifier
    #[serde(default)]
    pub runs: HashMap<String, RunExecution>,
}

impl PipelineExecutionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, id: impl Into<String>, task: TaskExecution) -> Self {
        self.task_runs.insert(id.into(), task);
        self
    }

    pub fn with_run(mut self, id: impl Into<String>, run: RunExecution) -> Self {
        self.runs.insert(id.into(), run);
        self
    }

    /// All sub-executions in lookup priority order: tasks first, then runs.
    pub fn sub_executions(&self) -> impl Iterator<Item = &dyn SubExecution> {
        self.task_runs
            .values()
            .map(|t| t as &dyn SubExecution)
            .chain(self.runs.values().map(|r| r as &dyn SubExecution))
    }

    /// Find the sub-execution declared under `name`. A task match always
    /// wins over a run match.
    pub fn find(&self, name: &str) -> Option<&dyn SubExecution> {
        self.sub_executions().find(|e| e.declared_name() == name)
    }
}
