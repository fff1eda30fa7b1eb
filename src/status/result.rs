//! Resolution result types

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::CommitStatusState;
use crate::description::DescriptionCodec;
use crate::pipeline::ExecutionKind;

/// Resolved status of one job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub name: String,
    pub state: CommitStatusState,

    /// Message of the condition that decided the state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Which sub-execution map matched, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExecutionKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl JobStatus {
    /// A job with no matching or reporting sub-execution
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: CommitStatusState::Pending,
            message: None,
            kind: None,
            pod_name: None,
            start_time: None,
            completion_time: None,
        }
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.start_time, self.completion_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Human-readable description: the deciding condition's message, or a
    /// default phrase for the state.
    pub fn description(&self) -> String {
        if let Some(message) = self.message.as_deref().map(str::trim) {
            if !message.is_empty() {
                return message.to_string();
            }
        }

        let phrase = match self.state {
            CommitStatusState::Pending if self.start_time.is_some() => "Job is running...",
            CommitStatusState::Pending => "Job is pending...",
            CommitStatusState::Success => "Job succeeded",
            CommitStatusState::Failure => "Job failed",
        };
        phrase.to_string()
    }

    /// Build the report posted for this job, embedding `base_sha` (if any)
    /// in the description.
    pub fn to_report(&self, codec: &DescriptionCodec, base_sha: &str) -> StatusReport {
        let description = if base_sha.is_empty() {
            codec.append_base_sha(&self.description(), "")
        } else {
            codec.append_base_sha(&format!("{} ", self.description()), base_sha)
        };

        StatusReport {
            context: self.name.clone(),
            state: self.state,
            description,
        }
    }
}

/// A commit status as posted to the code host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Status context, the job name
    pub context: String,
    pub state: CommitStatusState,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::parse_base_sha;
    use chrono::TimeZone;

    const SHA: &str = "2641c89aac959fb804ec6f2a4a22e129f4ac4900";

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_duration() {
        let mut status = JobStatus::pending("build");
        assert!(status.duration().is_none());

        status.start_time = Some(started());
        assert!(status.duration().is_none());

        status.completion_time = Some(started() + TimeDelta::minutes(90));
        assert_eq!(status.duration(), Some(TimeDelta::minutes(90)));
    }

    #[test]
    fn test_default_descriptions() {
        let mut status = JobStatus::pending("build");
        assert_eq!(status.description(), "Job is pending...");

        status.start_time = Some(started());
        assert_eq!(status.description(), "Job is running...");

        status.state = CommitStatusState::Success;
        assert_eq!(status.description(), "Job succeeded");

        status.state = CommitStatusState::Failure;
        status.message = Some("   ".to_string());
        assert_eq!(status.description(), "Job failed");

        status.message = Some("step-test exited with code 1".to_string());
        assert_eq!(status.description(), "step-test exited with code 1");
    }

    #[test]
    fn test_to_report() {
        let mut status = JobStatus::pending("build");
        status.start_time = Some(started());

        let codec = DescriptionCodec::default();
        let report = status.to_report(&codec, SHA);
        assert_eq!(report.context, "build");
        assert_eq!(report.state, CommitStatusState::Pending);
        assert_eq!(report.description, format!("Job is running... BaseSHA:{}", SHA));
        assert_eq!(parse_base_sha(&report.description), SHA);

        let report = status.to_report(&codec, "");
        assert_eq!(report.description, "Job is running...");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_value(JobStatus::pending("lint")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "lint", "state": "pending"}));
    }
}
