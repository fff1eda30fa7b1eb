//! Job definitions
//!
//! Jobs are declared per integration config, split into pre-submit jobs
//! (pull-request events) and post-submit jobs (push and tag events).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A declared unit of work. Its name matches the `pipelineTaskName` of
/// exactly one sub-execution in a pipeline execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobDefinition {
    pub name: String,
}

impl JobDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Which job list an event selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    PreSubmit,
    PostSubmit,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::PreSubmit => write!(f, "pre-submit"),
            JobKind::PostSubmit => write!(f, "post-submit"),
        }
    }
}

/// Jobs declared by an integration config
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationJobs {
    /// Jobs run for pull-request events
    #[serde(default)]
    pub pre_submit: Vec<JobDefinition>,

    /// Jobs run for push events, including tags
    #[serde(default)]
    pub post_submit: Vec<JobDefinition>,
}

impl IntegrationJobs {
    pub fn jobs(&self, kind: JobKind) -> &[JobDefinition] {
        match kind {
            JobKind::PreSubmit => &self.pre_submit,
            JobKind::PostSubmit => &self.post_submit,
        }
    }

    /// Names declared more than once within the same list.
    pub fn duplicate_names(&self, kind: JobKind) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for job in self.jobs(kind) {
            if !seen.insert(job.name.as_str()) && !duplicates.contains(&job.name) {
                duplicates.push(job.name.clone());
            }
        }
        duplicates
    }
}
