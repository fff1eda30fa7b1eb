//! Commit status state

use std::fmt;

use serde::{Deserialize, Serialize};

/// State reported to the code host for one job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatusState {
    #[default]
    Pending,
    Success,
    Failure,
}

impl CommitStatusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitStatusState::Pending => "pending",
            CommitStatusState::Success => "success",
            CommitStatusState::Failure => "failure",
        }
    }
}

impl fmt::Display for CommitStatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
