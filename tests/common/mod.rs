#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const FAKE_SHA: &str = "2641c89aac959fb804ec6f2a4a22e129f4ac4900";

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_file(dir: &Path, filename: &str, content: &str) {
    fs::write(dir.join(filename), content).expect("Failed to write test file");
}

pub fn write_status_config(dir: &Path, content: &str) {
    fs::write(dir.join("status.yaml"), content).expect("Failed to write status.yaml");
}

/// A task run entry with the given condition statuses ("True", "False", "Unknown")
pub fn task_run(id: &str, task_name: &str, conditions: &[&str]) -> String {
    format!(
        r#"
  {}:
    pipelineTaskName: {}
    status:
      podName: {}-pod
      startTime: "2021-06-01T10:00:00Z"
      conditions:
{}"#,
        id,
        task_name,
        id,
        condition_list(conditions)
    )
}

/// A task run entry that has not reported a status yet
pub fn task_run_without_status(id: &str, task_name: &str) -> String {
    format!(
        r#"
  {}:
    pipelineTaskName: {}
"#,
        id, task_name
    )
}

/// A custom run entry with the given condition statuses
pub fn run(id: &str, task_name: &str, conditions: &[&str]) -> String {
    format!(
        r#"
  {}:
    pipelineTaskName: {}
    status:
      conditions:
{}"#,
        id,
        task_name,
        condition_list(conditions)
    )
}

pub fn snapshot_yaml(task_runs: &[String], runs: &[String]) -> String {
    let mut yaml = String::new();
    if !task_runs.is_empty() {
        yaml.push_str("taskRuns:");
        for entry in task_runs {
            yaml.push_str(entry);
        }
        yaml.push('\n');
    }
    if !runs.is_empty() {
        yaml.push_str("runs:");
        for entry in runs {
            yaml.push_str(entry);
        }
        yaml.push('\n');
    }
    if yaml.is_empty() {
        yaml.push_str("{}\n");
    }
    yaml
}

pub fn jobs_yaml(pre_submit: &[&str], post_submit: &[&str]) -> String {
    let list = |names: &[&str]| {
        names
            .iter()
            .map(|n| format!("\n  - name: {}", n))
            .collect::<String>()
    };
    let section = |names: &[&str]| {
        if names.is_empty() {
            " []".to_string()
        } else {
            list(names)
        }
    };
    format!(
        "preSubmit:{}\npostSubmit:{}\n",
        section(pre_submit),
        section(post_submit)
    )
}

fn condition_list(conditions: &[&str]) -> String {
    if conditions.is_empty() {
        return "        []\n".to_string();
    }
    conditions
        .iter()
        .map(|c| format!("        - status: \"{}\"\n          message: {} condition\n", c, c))
        .collect()
}
