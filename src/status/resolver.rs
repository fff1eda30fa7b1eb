//! Job status resolution
//!
//! Maps a pipeline execution snapshot and a declared job to the single
//! commit status state reported for that job:
//!
//! 1. Find the sub-execution whose declared name equals the job name,
//!    searching task executions before run executions.
//! 2. No match, or a match that has not reported a status: `Pending`.
//! 3. Otherwise reduce its conditions: any `False` is `Failure`, else any
//!    `True` is `Success`, else `Pending`.
//!
//! Resolution never fails. Missing data is a normal transient state of a
//! running pipeline and degrades to `Pending`.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::conditions;
use super::{CommitStatusState, JobStatus};
use crate::pipeline::{JobDefinition, Observation, PipelineExecutionSnapshot};

pub struct StatusResolver;

impl StatusResolver {
    /// Resolve the state of one job.
    pub fn resolve(snapshot: &PipelineExecutionSnapshot, job: &JobDefinition) -> CommitStatusState {
        Self::resolve_job(snapshot, job).state
    }

    /// Resolve one job, keeping the deciding message and timing alongside
    /// the state.
    pub fn resolve_job(snapshot: &PipelineExecutionSnapshot, job: &JobDefinition) -> JobStatus {
        let mut status = JobStatus::pending(&job.name);

        let Some(execution) = snapshot.find(&job.name) else {
            debug!("No sub-execution found for job '{}'", job.name);
            return status;
        };
        status.kind = Some(execution.kind());

        match execution.observation() {
            Observation::Unobserved => {
                debug!("Sub-execution for job '{}' has no status yet", job.name);
            }
            Observation::Observed(observed) => {
                status.state = conditions::evaluate(&observed.conditions);
                status.message = conditions::decisive(&observed.conditions)
                    .and_then(|c| c.message.clone());
                status.pod_name = observed.pod_name.clone();
                status.start_time = observed.start_time;
                status.completion_time = observed.completion_time;
            }
        }

        debug!(
            "Job '{}' resolved to {} ({:?} execution)",
            job.name,
            status.state,
            execution.kind()
        );
        status
    }

    /// Resolve every job, in declared order.
    pub fn resolve_all(
        snapshot: &PipelineExecutionSnapshot,
        jobs: &[JobDefinition],
    ) -> Vec<JobStatus> {
        let mut seen = HashSet::new();
        for job in jobs {
            if !seen.insert(job.name.as_str()) {
                warn!("Job '{}' is declared more than once", job.name);
            }
        }

        jobs.iter()
            .map(|job| Self::resolve_job(snapshot, job))
            .collect()
    }

    /// Combine job states into one: `Failure` if any job failed, `Success`
    /// if there is at least one job and all succeeded, `Pending` otherwise.
    pub fn aggregate<I>(states: I) -> CommitStatusState
    where
        I: IntoIterator<Item = CommitStatusState>,
    {
        let mut any = false;
        let mut all_success = true;

        for state in states {
            any = true;
            match state {
                CommitStatusState::Failure => return CommitStatusState::Failure,
                CommitStatusState::Pending => all_success = false,
                CommitStatusState::Success => {}
            }
        }

        if any && all_success {
            CommitStatusState::Success
        } else {
            CommitStatusState::Pending
        }
    }
}
