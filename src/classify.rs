//! Aggregation of per-image outcomes into a run summary.
//!
//! The summary is an explicit aggregator passed through the traversal;
//! there is no process-wide mutable state. It owns the ordered run log
//! lines, the per-suite reports, and the failure count that decides
//! the process exit status.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::compare::{ComparisonOutcome, ImagePair};

/// Outcome of one image within a suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Image filename within the suite
    pub filename: String,

    /// Terminal outcome for this image
    pub outcome: ComparisonOutcome,
}

/// Ordered results for one test suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name
    pub suite: String,

    /// Results in traversal order
    pub cases: Vec<CaseResult>,
}

impl SuiteReport {
    /// Number of non-Pass outcomes in this suite.
    pub fn failures(&self) -> usize {
        self.cases.iter().filter(|c| c.outcome.is_failure()).count()
    }
}

/// Accumulated results for a whole comparison run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-suite reports in traversal order
    pub suites: Vec<SuiteReport>,

    /// Run log lines (`PASS: <path>` / `FAIL: <path>`) in traversal order
    pub log_lines: Vec<String>,

    /// Count of Fail and Missing outcomes across all suites
    pub failures: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new suite; subsequent `record` calls append to it.
    pub fn begin_suite(&mut self, suite: impl Into<String>) {
        self.suites.push(SuiteReport {
            suite: suite.into(),
            cases: Vec::new(),
        });
    }

    /// Record one outcome: append the log line, bump the failure count
    /// for non-Pass outcomes, and clean up any stale diff artifact on
    /// Pass (deleting a file that is not there is a no-op).
    ///
    /// Calling this without an open suite is an error, not a panic.
    pub fn record(
        &mut self,
        pair: &ImagePair,
        outcome: ComparisonOutcome,
        diff_path: &Path,
    ) -> io::Result<()> {
        let Some(suite) = self.suites.last_mut() else {
            return Err(io::Error::other("record called before begin_suite"));
        };
        suite.cases.push(CaseResult {
            filename: pair.filename.clone(),
            outcome: outcome.clone(),
        });

        match &outcome {
            ComparisonOutcome::Pass => {
                self.log_lines
                    .push(format!("PASS: {}", pair.candidate.display()));
                remove_if_exists(diff_path)?;
            }
            ComparisonOutcome::Fail(_) | ComparisonOutcome::Missing(_) => {
                self.log_lines
                    .push(format!("FAIL: {}", pair.candidate.display()));
                self.failures += 1;
            }
        }

        Ok(())
    }

    /// Total number of images checked.
    pub fn total(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failures == 0
    }

    /// Process exit code for CI gating: non-zero iff any failure or
    /// missing counterpart was recorded.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Delete a diff artifact if present; absence is not an error.
fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn pair(suite: &str, file: &str) -> ImagePair {
        ImagePair::new(
            suite,
            file,
            format!("results/{}/{}", suite, file),
            format!("candidate/{}/{}", suite, file),
        )
    }

    #[test]
    fn test_log_line_format() {
        let dir = tempdir().expect("tempdir");
        let mut summary = RunSummary::new();
        summary.begin_suite("shader_tests");

        let a = pair("shader_tests", "a.png");
        let b = pair("shader_tests", "b.png");
        let c = pair("shader_tests", "c.png");

        summary
            .record(&a, ComparisonOutcome::Pass, &dir.path().join("a.png"))
            .unwrap();
        summary
            .record(
                &b,
                ComparisonOutcome::Fail(dir.path().join("b.png")),
                &dir.path().join("b.png"),
            )
            .unwrap();
        summary
            .record(
                &c,
                ComparisonOutcome::Missing(c.candidate.clone()),
                &dir.path().join("c.png"),
            )
            .unwrap();

        assert_eq!(
            summary.log_lines,
            vec![
                "PASS: candidate/shader_tests/a.png",
                "FAIL: candidate/shader_tests/b.png",
                "FAIL: candidate/shader_tests/c.png",
            ]
        );
        assert_eq!(summary.failures, 2);
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_pass_removes_stale_artifact() {
        let dir = tempdir().expect("tempdir");
        let stale = dir.path().join("suite/a.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"stale diff from a previous run").unwrap();

        let mut summary = RunSummary::new();
        summary.begin_suite("suite");
        summary
            .record(&pair("suite", "a.png"), ComparisonOutcome::Pass, &stale)
            .unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_pass_with_no_artifact_is_noop() {
        let dir = tempdir().expect("tempdir");
        let mut summary = RunSummary::new();
        summary.begin_suite("suite");
        summary
            .record(
                &pair("suite", "a.png"),
                ComparisonOutcome::Pass,
                &dir.path().join("never-written.png"),
            )
            .unwrap();
        assert_eq!(summary.failures, 0);
    }

    #[test]
    fn test_empty_run_is_success() {
        let summary = RunSummary::new();
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);
        assert!(summary.log_lines.is_empty());
    }

    #[test]
    fn test_record_without_open_suite_is_error() {
        let dir = tempdir().expect("tempdir");
        let mut summary = RunSummary::new();

        let result = summary.record(
            &pair("suite", "a.png"),
            ComparisonOutcome::Pass,
            &dir.path().join("a.png"),
        );

        assert!(result.is_err());
        assert!(summary.log_lines.is_empty());
        assert_eq!(summary.failures, 0);
    }

    #[test]
    fn test_suite_report_failures() {
        let report = SuiteReport {
            suite: "s".to_string(),
            cases: vec![
                CaseResult {
                    filename: "a.png".to_string(),
                    outcome: ComparisonOutcome::Pass,
                },
                CaseResult {
                    filename: "b.png".to_string(),
                    outcome: ComparisonOutcome::Missing(PathBuf::from("b.png")),
                },
            ],
        };
        assert_eq!(report.failures(), 1);
    }
}
