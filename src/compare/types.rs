// Core types for golden-image comparison.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One reference/candidate image pairing within a test suite.
///
/// Built by the tree walker when the reference image is found; the
/// candidate path is where the emulator output is expected to live,
/// whether or not it actually exists on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePair {
    /// Name of the test suite (depth-1 subdirectory of the results root)
    pub suite: String,

    /// Image filename within the suite (e.g., "DepthBias_default.png")
    pub filename: String,

    /// Path to the golden reference image
    pub reference: PathBuf,

    /// Path at which the candidate image is expected
    pub candidate: PathBuf,
}

impl ImagePair {
    pub fn new(
        suite: impl Into<String>,
        filename: impl Into<String>,
        reference: impl Into<PathBuf>,
        candidate: impl Into<PathBuf>,
    ) -> Self {
        Self {
            suite: suite.into(),
            filename: filename.into(),
            reference: reference.into(),
            candidate: candidate.into(),
        }
    }
}

/// Terminal outcome of checking one image pair.
///
/// Each pair transitions exactly once, from unchecked to one of these;
/// there are no retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOutcome {
    /// The comparator reported the images as matching
    Pass,

    /// The comparator reported a difference; the diff artifact it wrote
    /// is retained at this path
    Fail(PathBuf),

    /// No candidate image exists at the expected path; always counted
    /// as a failure
    Missing(PathBuf),
}

impl ComparisonOutcome {
    /// Whether this outcome counts against the run's exit status.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ComparisonOutcome::Pass)
    }
}

/// Result type for gate operations
pub type GateResult<T> = Result<T, GateError>;

/// Error types for gate operations.
///
/// Per-image problems (mismatch, missing candidate) are not errors;
/// they are classified outcomes. These variants cover environment
/// failures that abort the run.
#[derive(Debug)]
pub enum GateError {
    /// The comparator binary itself could not be executed
    Comparator(String),

    /// I/O error walking directories or writing artifacts
    Io(std::io::Error),

    /// Serialization error
    Serialization(serde_json::Error),
}

impl std::fmt::Display for GateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateError::Comparator(msg) => write!(f, "Comparator error: {}", msg),
            GateError::Io(err) => write!(f, "I/O error: {}", err),
            GateError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GateError::Comparator(_) => None,
            GateError::Io(err) => Some(err),
            GateError::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for GateError {
    fn from(err: std::io::Error) -> Self {
        GateError::Io(err)
    }
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_failure_classification() {
        assert!(!ComparisonOutcome::Pass.is_failure());
        assert!(ComparisonOutcome::Fail(PathBuf::from("diff.png")).is_failure());
        assert!(ComparisonOutcome::Missing(PathBuf::from("missing.png")).is_failure());
    }

    #[test]
    fn test_image_pair_new() {
        let pair = ImagePair::new("shader_tests", "a.png", "results/shader_tests/a.png", "out/shader_tests/a.png");
        assert_eq!(pair.suite, "shader_tests");
        assert_eq!(pair.filename, "a.png");
        assert!(pair.reference.ends_with("shader_tests/a.png"));
    }
}
