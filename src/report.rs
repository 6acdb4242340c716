//! Rendering of run results into files.
//!
//! Two surfaces:
//! - The run log: one `PASS:`/`FAIL:` line per image, truncated at run
//!   start and written once at run end.
//! - GitHub-wiki markdown: one page per suite embedding every golden
//!   image via a raw-content URL, plus a Home index page.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::classify::RunSummary;
use crate::walker::TreeWalker;

/// Create or truncate the run log file so a failed run never leaves a
/// stale log from a previous one behind.
pub fn truncate_run_log(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::File::create(path)?;
    Ok(())
}

/// Write the full ordered run log. An empty run produces an empty file.
pub fn write_run_log(summary: &RunSummary, path: &Path) -> io::Result<()> {
    let mut contents = summary.log_lines.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents)
}

/// Print a per-suite summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    for suite in &summary.suites {
        println!(
            "  {}: {} checked, {} failed",
            suite.suite,
            suite.cases.len(),
            suite.failures()
        );
    }
    println!(
        "Total: {} checked, {} failed",
        summary.total(),
        summary.failures
    );
}

/// Generates GitHub-wiki markdown pages for a golden results tree.
#[derive(Debug, Clone)]
pub struct WikiWriter {
    /// Root directory of golden images (one subdirectory per suite)
    pub results_root: PathBuf,

    /// Directory into which markdown pages are written
    pub output_dir: PathBuf,

    /// Base raw-content URL under which the golden images are published
    pub base_url: String,
}

impl WikiWriter {
    pub fn new(
        results_root: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            results_root: results_root.into(),
            output_dir: output_dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Scan the results tree and write all pages. Returns the number of
    /// suite pages written.
    ///
    /// Unlike the comparison traversal, the wiki scan recurses within
    /// each suite: nested artifacts are listed with their suite-relative
    /// path.
    pub fn write(&self) -> io::Result<usize> {
        let walker = TreeWalker::new(&self.results_root, &self.results_root);

        // BTreeMap keeps suites sorted for the index page.
        let mut suites: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for suite in walker.suites()? {
            let mut images = Vec::new();
            collect_artifacts(&self.results_root.join(&suite), "", &mut images)?;
            images.sort();
            suites.insert(suite, images);
        }

        fs::create_dir_all(&self.output_dir)?;
        self.clean_output_dir()?;

        self.write_index(&suites)?;
        for (suite, images) in &suites {
            self.write_suite_page(suite, images)?;
        }

        Ok(suites.len())
    }

    /// Remove markdown pages from a previous generation so renamed or
    /// deleted suites do not leave orphan pages.
    fn clean_output_dir(&self) -> io::Result<()> {
        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().map(|e| e == "md").unwrap_or(false) {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn write_index(&self, suites: &BTreeMap<String, Vec<String>>) -> io::Result<()> {
        let mut page = String::from("Results\n---\n");
        for suite in suites.keys() {
            page.push_str(&format!("- [[{}|Results-{}]]\n", suite, suite));
        }
        fs::write(self.output_dir.join("Home.md"), page)
    }

    fn write_suite_page(&self, suite: &str, images: &[String]) -> io::Result<()> {
        // Wiki pages cannot live in subdirectories, so the suite name
        // is flattened into the page filename; suite names are unique.
        let mut page = format!("{}\n---\n", suite);

        let results_dir_name = self
            .results_root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        for image in images {
            let image_path = format!("{}/{}/{}", results_dir_name, suite, image);
            let image_url = format!("{}/{}", self.base_url, urlsafe(&image_path));
            page.push_str(&format!("## {}\n![{}]({})\n", image, image, image_url));
        }

        fs::write(
            self.output_dir.join(format!("Results-{}.md", suite)),
            page,
        )
    }
}

/// Collect PNG paths under `dir` recursively, relative to the suite
/// directory (`prefix` is the relative path accumulated so far).
fn collect_artifacts(dir: &Path, prefix: &str, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        if path.is_dir() {
            collect_artifacts(&path, &relative, out)?;
        } else if path.extension().map(|e| e == "png").unwrap_or(false) {
            out.push(relative);
        }
    }
    Ok(())
}

/// Percent-encode a path for use in a raw-content URL, leaving `/`
/// separators intact.
fn urlsafe(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}
