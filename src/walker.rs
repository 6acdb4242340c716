//! Traversal of the golden-results directory tree.
//!
//! The results root holds one subdirectory per test suite, each with
//! zero or more PNG images. The candidate root mirrors that layout
//! with emulator-produced output. The walker enumerates suites and
//! images and pairs each reference image with its expected candidate
//! path.
//!
//! Enumeration follows directory order as returned by the OS; the
//! comparison traversal imposes no sorting of its own.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::compare::ImagePair;

/// File extension recognized as a test image
const IMAGE_EXTENSION: &str = "png";

/// Enumerates test suites and their images under a results root.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    /// Root directory of golden reference images
    pub results_root: PathBuf,

    /// Root directory of candidate (emulator) images, mirroring the
    /// results layout
    pub candidate_root: PathBuf,

    /// Suite names to skip entirely (exact, case-sensitive match)
    pub ignored: HashSet<String>,
}

impl TreeWalker {
    pub fn new(results_root: impl Into<PathBuf>, candidate_root: impl Into<PathBuf>) -> Self {
        Self {
            results_root: results_root.into(),
            candidate_root: candidate_root.into(),
            ignored: HashSet::new(),
        }
    }

    /// Set the suite names to exclude from traversal.
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = names.into_iter().map(Into::into).collect();
        self
    }

    /// List suite names: depth-1 subdirectories of the results root,
    /// minus the ignore set.
    pub fn suites(&self) -> io::Result<Vec<String>> {
        let mut suites = Vec::new();
        for entry in fs::read_dir(&self.results_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if self.ignored.contains(&name) {
                continue;
            }
            suites.push(name);
        }
        Ok(suites)
    }

    /// List image filenames directly inside one suite directory.
    ///
    /// A suite with no images yields an empty list, not an error.
    pub fn images(&self, suite: &str) -> io::Result<Vec<String>> {
        let mut images = Vec::new();
        for entry in fs::read_dir(self.results_root.join(suite))? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path
                .extension()
                .map(|e| e == IMAGE_EXTENSION)
                .unwrap_or(false)
            {
                images.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        Ok(images)
    }

    /// Build the image pairs for one suite.
    pub fn pairs(&self, suite: &str) -> io::Result<Vec<ImagePair>> {
        let images = self.images(suite)?;
        Ok(images
            .into_iter()
            .map(|filename| {
                let reference = self.results_root.join(suite).join(&filename);
                let candidate = self.candidate_root.join(suite).join(&filename);
                ImagePair::new(suite, filename, reference, candidate)
            })
            .collect())
    }

    /// Diff artifact path for a pair, mirroring the suite subdirectory
    /// under the given output root.
    pub fn diff_path(output_root: &Path, pair: &ImagePair) -> PathBuf {
        output_root.join(&pair.suite).join(&pair.filename)
    }
}
