use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pipeline_status::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipeline-status")]
#[command(about = "Resolve pipeline job statuses and build commit status descriptions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to status.yaml (description budgets)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the status of every declared job against a snapshot
    Resolve {
        /// Path to the pipeline execution snapshot (YAML or JSON)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Path to the job list (YAML or JSON)
        #[arg(long, value_name = "FILE")]
        jobs: PathBuf,

        /// Which job list to resolve
        #[arg(short, long, value_enum, default_value = "pre-submit")]
        kind: KindArg,

        /// Base commit SHA to embed in each description
        #[arg(long)]
        base_sha: Option<String>,

        /// Status backend whose description budget applies
        #[arg(short, long)]
        backend: Option<String>,

        /// Print reports as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Append a base commit SHA to a description
    Encode {
        description: String,

        #[arg(long, default_value = "")]
        base_sha: String,

        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Recover the base commit SHA from a description
    Decode {
        description: String,

        #[arg(short, long)]
        backend: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    PreSubmit,
    PostSubmit,
}

impl From<KindArg> for JobKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::PreSubmit => JobKind::PreSubmit,
            KindArg::PostSubmit => JobKind::PostSubmit,
        }
    }
}

#[derive(Serialize)]
struct ResolveOutput {
    state: CommitStatusState,
    jobs: Vec<JobStatus>,
    reports: Vec<StatusReport>,
}

fn status_icon(state: CommitStatusState) -> &'static str {
    match state {
        CommitStatusState::Success => "✓",
        CommitStatusState::Failure => "✗",
        CommitStatusState::Pending => "○",
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "pipeline_status=debug"
    } else {
        "pipeline_status=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn load_codec(
    config: Option<&PathBuf>,
    backend: Option<&str>,
) -> anyhow::Result<DescriptionCodec> {
    let status_config = match config {
        Some(path) => StatusConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StatusConfig::default(),
    };
    let codec = status_config.codec_for(backend.unwrap_or("default"))?;
    Ok(codec)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "pipeline-status failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Resolve {
            snapshot,
            jobs,
            kind,
            base_sha,
            backend,
            json,
        } => {
            let codec = load_codec(cli.config.as_ref(), backend.as_deref())?;
            cmd_resolve(snapshot, jobs, kind.into(), base_sha.as_deref(), &codec, json)
        }
        Commands::Encode {
            description,
            base_sha,
            backend,
        } => {
            let codec = load_codec(cli.config.as_ref(), backend.as_deref())?;
            println!("{}", codec.append_base_sha(&description, &base_sha));
            Ok(true)
        }
        Commands::Decode {
            description,
            backend,
        } => {
            let codec = load_codec(cli.config.as_ref(), backend.as_deref())?;
            match codec.parse_base_sha(&description) {
                Some(sha) => {
                    println!("{}", sha);
                    Ok(true)
                }
                None => {
                    eprintln!("No base SHA found in description");
                    Ok(false)
                }
            }
        }
    }
}

fn cmd_resolve(
    snapshot_path: PathBuf,
    jobs_path: PathBuf,
    kind: JobKind,
    base_sha: Option<&str>,
    codec: &DescriptionCodec,
    json_output: bool,
) -> anyhow::Result<bool> {
    let snapshot = SnapshotLoader::load_snapshot(&snapshot_path)?;
    let jobs = SnapshotLoader::load_jobs(&jobs_path)?;

    let duplicates = jobs.duplicate_names(kind);
    if !duplicates.is_empty() {
        anyhow::bail!("Duplicate {} job names: {}", kind, duplicates.join(", "));
    }

    let statuses = StatusResolver::resolve_all(&snapshot, jobs.jobs(kind));
    let state = StatusResolver::aggregate(statuses.iter().map(|s| s.state));
    let reports: Vec<_> = statuses
        .iter()
        .map(|s| s.to_report(codec, base_sha.unwrap_or("")))
        .collect();

    tracing::info!("Resolved {} {} job(s): {}", statuses.len(), kind, state);

    if json_output {
        let output = ResolveOutput {
            state,
            jobs: statuses,
            reports,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if reports.is_empty() {
        println!("No {} jobs declared.", kind);
    } else {
        for (status, report) in statuses.iter().zip(&reports) {
            print!("{} {} [{}]", status_icon(report.state), report.context, report.state);
            if let Some(duration) = status.duration() {
                print!(" ({}s)", duration.num_seconds());
            }
            println!();
            println!("    {}", report.description);
        }
        println!();
        println!("Overall: {} {}", status_icon(state), state);
    }

    Ok(state != CommitStatusState::Failure)
}
