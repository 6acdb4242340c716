//! pixel-gate - Golden-image regression gating for CI.
//!
//! This crate provides:
//! - Directory-tree traversal pairing golden images with emulator output
//! - Invocation of an external perceptual comparator per image pair
//! - Classification of outcomes (pass, fail, missing counterpart)
//! - Run log and GitHub-wiki markdown emission
//!
//! # Example
//!
//! ```rust,no_run
//! use pixel_gate::runner::{GateConfig, run_gate};
//!
//! let config = GateConfig::for_candidate("./emulator_output");
//! let summary = run_gate(&config).unwrap();
//! std::process::exit(summary.exit_code());
//! ```

pub mod classify;
pub mod compare;
pub mod config;
pub mod mock;
pub mod report;
pub mod runner;
pub mod walker;

// Re-export compare types
pub use compare::{Comparator, ComparisonOutcome, GateError, GateResult, ImagePair};

// Re-export classifier types
pub use classify::{CaseResult, RunSummary, SuiteReport};

// Re-export orchestration
pub use runner::{GateConfig, run_gate};

// Re-export reporting
pub use report::{WikiWriter, print_summary, write_run_log};

// Re-export tree walking
pub use walker::TreeWalker;
