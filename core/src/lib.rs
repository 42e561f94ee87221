//! Core stages of the forkbomb benchmarking harness.
//!
//! The pipeline is strictly Run -> Analyze -> Report: [`runner`] fans out
//! forkbomb invocations over a bounded pool and persists one output file per
//! task, [`analyzer`] sequentially turns each file into a single-line value,
//! and [`report`] renders the aligned table and the CSV.

pub mod analyzer;
pub mod capture;
pub mod config;
pub mod error;
pub mod progress;
pub mod report;
pub mod runner;
pub mod task;

pub use config::{BenchConfig, LoggingConfig};
pub use error::{CliError, HarnessError};
