//! Orchestration of a full comparison run.
//!
//! Single-threaded and sequential: suites are processed one at a time,
//! images within a suite one at a time, each comparator invocation
//! awaited to completion. Per-image problems are classified and the
//! run continues; only environment failures abort.

use chrono::Utc;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::classify::RunSummary;
use crate::compare::{Comparator, GateResult};
use crate::config;
use crate::report;
use crate::walker::TreeWalker;

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Root directory of golden reference images
    pub results_root: PathBuf,

    /// Root directory of candidate (emulator) images
    pub candidate_root: PathBuf,

    /// Directory where diff artifacts are written, mirroring suite names
    pub output_dir: PathBuf,

    /// Path of the run log
    pub log_path: PathBuf,

    /// Comparator binary
    pub comparator: PathBuf,

    /// Suite names excluded from traversal
    pub ignored: HashSet<String>,
}

impl GateConfig {
    /// Build a config for the given candidate root, taking everything
    /// else from the environment-backed defaults.
    pub fn for_candidate(candidate_root: impl Into<PathBuf>) -> Self {
        let cfg = config::get();
        Self {
            results_root: PathBuf::from(&cfg.results_dir),
            candidate_root: candidate_root.into(),
            output_dir: PathBuf::from(&cfg.output_dir),
            log_path: PathBuf::from(&cfg.run_log),
            comparator: PathBuf::from(&cfg.comparator),
            ignored: cfg.ignored_suites.iter().cloned().collect(),
        }
    }
}

/// Run the full comparison: walk, invoke, classify, emit.
///
/// The run log is truncated up front and rewritten at the end; diff
/// artifacts land under `output_dir/<suite>/<image>`.
pub fn run_gate(config: &GateConfig) -> GateResult<RunSummary> {
    fs::create_dir_all(&config.output_dir)?;
    report::truncate_run_log(&config.log_path)?;
    write_run_metadata(config)?;

    let walker = TreeWalker::new(&config.results_root, &config.candidate_root)
        .ignore(config.ignored.iter().cloned());
    let comparator = Comparator::new(&config.comparator);

    let mut summary = RunSummary::new();

    for suite in walker.suites()? {
        summary.begin_suite(&suite);
        for pair in walker.pairs(&suite)? {
            let diff_path = TreeWalker::diff_path(&config.output_dir, &pair);
            let outcome = comparator.compare(&pair, &diff_path)?;
            summary.record(&pair, outcome, &diff_path)?;
        }
    }

    report::write_run_log(&summary, &config.log_path)?;

    Ok(summary)
}

/// Write run metadata next to the diff artifacts.
fn write_run_metadata(config: &GateConfig) -> GateResult<()> {
    let metadata = serde_json::json!({
        "started": Utc::now().to_rfc3339(),
        "host": hostname::get().map(|h| h.to_string_lossy().to_string()).unwrap_or_default(),
        "results_root": config.results_root,
        "candidate_root": config.candidate_root,
        "comparator": config.comparator,
    });

    let metadata_path = config.output_dir.join(".run.json");
    fs::write(metadata_path, serde_json::to_string_pretty(&metadata)?)?;

    Ok(())
}
