//! Snapshot and job list loader
//!
//! Load pipeline execution snapshots and job lists from YAML or JSON files.
//! The format is picked from the file extension.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::{IntegrationJobs, PipelineExecutionSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },

    #[error("JSON parse error in {file}: {error}")]
    Json {
        file: String,
        error: serde_json::Error,
    },

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),
}

pub struct SnapshotLoader;

impl SnapshotLoader {
    pub fn load_snapshot(path: &Path) -> Result<PipelineExecutionSnapshot, LoadError> {
        let snapshot: PipelineExecutionSnapshot = load_file(path)?;
        tracing::debug!(
            "Loaded snapshot from {} ({} task runs, {} runs)",
            path.display(),
            snapshot.task_runs.len(),
            snapshot.runs.len()
        );
        Ok(snapshot)
    }

    pub fn load_jobs(path: &Path) -> Result<IntegrationJobs, LoadError> {
        load_file(path)
    }
}

/// Deserialize a YAML (`.yaml`, `.yml`) or JSON (`.json`) file.
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content).map_err(|e| LoadError::Yaml {
                file: path.display().to_string(),
                error: e,
            })
        }
        "json" => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| LoadError::Json {
                file: path.display().to_string(),
                error: e,
            })
        }
        _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}
