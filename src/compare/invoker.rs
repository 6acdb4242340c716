//! Invocation of the external perceptual comparator.
//!
//! The comparator is treated as a black box: it is handed a reference
//! image, a candidate image, and a path at which to write a diff
//! artifact, and its exit status is the verdict. This module never
//! inspects pixels itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::compare::types::{ComparisonOutcome, GateError, GateResult, ImagePair};

/// Wraps calls to the external diff binary for one image pair at a time.
#[derive(Debug, Clone)]
pub struct Comparator {
    /// Path or name of the comparator binary (resolved via PATH if bare)
    pub binary: PathBuf,
}

impl Comparator {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Compare one image pair, writing the diff artifact to `diff_path`
    /// on mismatch.
    ///
    /// A candidate that does not exist on disk short-circuits to
    /// `Missing` without running the comparator. A comparator that
    /// cannot be executed at all is a fatal `GateError::Comparator`,
    /// distinct from a reported image difference.
    pub fn compare(&self, pair: &ImagePair, diff_path: &Path) -> GateResult<ComparisonOutcome> {
        if !pair.candidate.exists() {
            eprintln!(
                "Missing candidate for {}/{}: expected {}",
                pair.suite,
                pair.filename,
                pair.candidate.display()
            );
            return Ok(ComparisonOutcome::Missing(pair.candidate.clone()));
        }

        if let Some(parent) = diff_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let output = Command::new(&self.binary)
            .arg(&pair.reference)
            .arg(&pair.candidate)
            .arg("--verbose")
            .arg("--output")
            .arg(diff_path)
            .output()
            .map_err(|e| {
                GateError::Comparator(format!(
                    "Failed to execute '{}': {}",
                    self.binary.display(),
                    e
                ))
            })?;

        if output.status.success() {
            Ok(ComparisonOutcome::Pass)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                eprintln!("Comparator output for {}/{}: {}", pair.suite, pair.filename, stderr.trim());
            }
            Ok(ComparisonOutcome::Fail(diff_path.to_path_buf()))
        }
    }
}
