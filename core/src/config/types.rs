use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Child counts passed to the forkbomb binary via `-c`, one table column
    /// per entry, in this order.
    #[serde(default = "default_child_counts")]
    pub child_counts: Vec<u64>,

    /// Number of iterations per child count, one table row per iteration.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default = "default_forkbomb_bin")]
    pub forkbomb_bin: String,

    #[serde(default = "default_analyze_bin")]
    pub analyze_bin: String,

    /// Directory receiving the per-task output files and the CSV.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// CSV file name, resolved relative to `output_dir`.
    #[serde(default = "default_csv_out")]
    pub csv_out: String,

    /// Cap on concurrently running forkbomb processes. The effective pool
    /// size is min(max_workers, total task count).
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// If true, draw a progress bar on stderr during the run stage.
    #[serde(default = "default_progress")]
    pub progress: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_child_counts() -> Vec<u64> {
    vec![10, 100, 1000, 10000, 100000]
}

fn default_iterations() -> u32 {
    20
}

fn default_forkbomb_bin() -> String {
    "./forkbomb".to_string()
}

fn default_analyze_bin() -> String {
    "./analyze_forkbomb".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_csv_out() -> String {
    "forkbomb_results.csv".to_string()
}

fn default_max_workers() -> usize {
    32
}

fn default_progress() -> bool {
    true
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            child_counts: default_child_counts(),
            iterations: default_iterations(),
            forkbomb_bin: default_forkbomb_bin(),
            analyze_bin: default_analyze_bin(),
            output_dir: default_output_dir(),
            csv_out: default_csv_out(),
            max_workers: default_max_workers(),
            progress: default_progress(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BenchConfig {
    pub fn output_dir_path(&self) -> &Path {
        Path::new(&self.output_dir)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir_path().join(&self.csv_out)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "forkbench_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}
