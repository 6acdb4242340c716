//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for pixel-gate,
//! supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults matching the CI job's conventional layout
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PIXEL_GATE_COMPARATOR` | Perceptual comparator binary | `perceptualdiff` |
//! | `PIXEL_GATE_RESULTS_DIR` | Golden results root | `results` |
//! | `PIXEL_GATE_OUTPUT_DIR` | Diff artifact output directory | `./diff-artifacts` |
//! | `PIXEL_GATE_RUN_LOG` | Run log path | `./comparison.log` |
//! | `PIXEL_GATE_IGNORE` | Comma-separated suites to skip | (empty) |

use std::env;
use std::sync::OnceLock;

/// Default comparator binary, resolved via PATH
pub const DEFAULT_COMPARATOR: &str = "perceptualdiff";

/// Default golden results root
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Default diff artifact output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./diff-artifacts";

/// Default run log path
pub const DEFAULT_RUN_LOG: &str = "./comparison.log";

/// Environment variable for the comparator binary
pub const ENV_COMPARATOR: &str = "PIXEL_GATE_COMPARATOR";

/// Environment variable for the golden results root
pub const ENV_RESULTS_DIR: &str = "PIXEL_GATE_RESULTS_DIR";

/// Environment variable for the diff artifact output directory
pub const ENV_OUTPUT_DIR: &str = "PIXEL_GATE_OUTPUT_DIR";

/// Environment variable for the run log path
pub const ENV_RUN_LOG: &str = "PIXEL_GATE_RUN_LOG";

/// Environment variable for the ignored suite list
pub const ENV_IGNORE: &str = "PIXEL_GATE_IGNORE";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for pixel-gate
#[derive(Debug, Clone)]
pub struct Config {
    /// Comparator binary path or name
    pub comparator: String,
    /// Golden results root
    pub results_dir: String,
    /// Diff artifact output directory
    pub output_dir: String,
    /// Run log path
    pub run_log: String,
    /// Suites excluded from traversal
    pub ignored_suites: Vec<String>,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            comparator: env::var(ENV_COMPARATOR)
                .unwrap_or_else(|_| DEFAULT_COMPARATOR.to_string()),
            results_dir: env::var(ENV_RESULTS_DIR)
                .unwrap_or_else(|_| DEFAULT_RESULTS_DIR.to_string()),
            output_dir: env::var(ENV_OUTPUT_DIR)
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
            run_log: env::var(ENV_RUN_LOG).unwrap_or_else(|_| DEFAULT_RUN_LOG.to_string()),
            ignored_suites: env::var(ENV_IGNORE)
                .map(|v| parse_ignore_list(&v))
                .unwrap_or_default(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            comparator: DEFAULT_COMPARATOR.to_string(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            run_log: DEFAULT_RUN_LOG.to_string(),
            ignored_suites: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse a comma-separated ignore list, dropping empty entries.
pub fn parse_ignore_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
