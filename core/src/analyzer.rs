//! Analyze stage: turn each run-output file into a single-line value by
//! invoking the external analyzer, sequentially and in deterministic order.

use std::collections::BTreeMap;
use std::path::Path;

use crate::capture::{self, Captured};
use crate::config::BenchConfig;
use crate::task::{self, Task};

/// Sentinel value for a run-output file that was absent at analysis time.
pub const MISSING_FILE: &str = "MISSING_FILE";

/// Analysis values keyed by (iteration, child count).
pub type AnalysisResults = BTreeMap<(u32, u64), String>;

/// Collapse multi-line analyzer output to one line: non-empty trimmed lines
/// joined with " | ", so a table/CSV cell never embeds a line break.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Invoke the analyzer on one file and normalize its output.
///
/// Exit status zero means stdout is the metric; non-zero means the metric is
/// stdout and stderr concatenated (the exit code itself is not surfaced).
/// A launch failure becomes the `ERROR_ANALYZE:` marker value.
pub async fn analyze_file(analyze_bin: &str, path: &Path) -> String {
    let raw = match capture::run(analyze_bin, &[path.display().to_string()]).await {
        Captured::Completed { status, stdout, stderr } => {
            if status.success() {
                stdout.trim().to_string()
            } else {
                format!("{stdout}\n{stderr}").trim().to_string()
            }
        }
        Captured::LaunchFailed(desc) => format!("ERROR_ANALYZE: {desc}"),
    };
    normalize(&raw)
}

/// Analyze every (count, iteration) pair of the configured matrix.
///
/// File names are re-derived from the coordinates rather than taken from the
/// run stage's results, so a partial or externally-provided output directory
/// analyzes the same way. The analyzer is never invoked on a missing file;
/// the value is [`MISSING_FILE`] instead.
pub async fn analyze_stage(cfg: &BenchConfig) -> AnalysisResults {
    let mut results = AnalysisResults::new();

    for &count in &cfg.child_counts {
        for iteration in 1..=cfg.iterations {
            let task = Task { count, iteration };
            let path = task::output_file(cfg.output_dir_path(), task);

            let value = if path.exists() {
                analyze_file(&cfg.analyze_bin, &path).await
            } else {
                MISSING_FILE.to_string()
            };

            tracing::info!(path = %path.display(), value = %value, "analyzed");
            results.insert((iteration, count), value);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_joins_non_blank_trimmed_lines() {
        let raw = "  first line \n\n   \nsecond\n\tthird\t\n";
        assert_eq!(normalize(raw), "first line | second | third");
    }

    #[test]
    fn normalize_of_all_blank_input_is_empty() {
        assert_eq!(normalize("\n   \n\t\n"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_keeps_single_line_untouched() {
        assert_eq!(normalize("max_children=42"), "max_children=42");
    }

    #[tokio::test]
    async fn unlaunchable_analyzer_degrades_to_marker() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("forkbomb_1_1.txt");
        std::fs::write(&file, "whatever\n").unwrap();

        let value = analyze_file("/nonexistent/forkbench-no-such-bin", &file).await;
        assert!(value.starts_with("ERROR_ANALYZE: "), "got: {value}");
    }
}
