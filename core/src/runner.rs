//! Run stage: fan out forkbomb invocations over a bounded pool and persist
//! one output file per task.

use std::path::PathBuf;
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;

use crate::capture::{self, Captured};
use crate::config::BenchConfig;
use crate::error::HarnessError;
use crate::progress::RunProgress;
use crate::task::{self, Task};

/// A completed task and the file its output was written to.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub task: Task,
    pub path: PathBuf,
}

/// Invoke the forkbomb binary for one task and return the text to persist.
///
/// The exit status is deliberately ignored: whatever the forkbomb wrote to
/// stdout/stderr is the artifact, non-zero exit included. Only a process that
/// could not be launched at all degrades to the error marker.
async fn capture_forkbomb(bin: &str, task: Task) -> String {
    match capture::run(bin, &["-c".to_string(), task.count.to_string()]).await {
        Captured::Completed { stdout, stderr, .. } => {
            let mut text = stdout;
            text.push_str(&stderr);
            text
        }
        Captured::LaunchFailed(desc) => format!("ERROR_RUNNING_FORKBOMB: {desc}\n"),
    }
}

/// Execute all tasks in parallel, bounded by `min(max_workers, task count)`.
///
/// Every task writes its file unconditionally, so the analyze stage always
/// has a readable artifact per task unless disk I/O itself failed. A failed
/// write is logged and skipped without aborting the other tasks; the only
/// fatal error is an uncreatable output directory.
pub async fn run_stage(cfg: &BenchConfig, tasks: &[Task]) -> Result<Vec<RunResult>, HarnessError> {
    tokio::fs::create_dir_all(cfg.output_dir_path()).await?;

    tracing::info!(total = tasks.len(), "launching forkbomb runs");

    let pool_size = cfg.max_workers.min(tasks.len()).max(1);
    let sem = Arc::new(Semaphore::new(pool_size));
    let mut futs: FuturesUnordered<_> = FuturesUnordered::new();

    for &task in tasks {
        let sem = sem.clone();
        let bin = cfg.forkbomb_bin.clone();
        let dir = cfg.output_dir_path().to_path_buf();

        futs.push(async move {
            let res = async {
                let _permit = sem
                    .acquire_owned()
                    .await
                    .map_err(|_| HarnessError::Pool("semaphore closed unexpectedly".into()))?;

                let text = capture_forkbomb(&bin, task).await;
                let path = task::output_file(&dir, task);
                tokio::fs::write(&path, &text).await?;
                Ok::<PathBuf, HarnessError>(path)
            }
            .await;
            (task, res)
        });
    }

    let progress = RunProgress::new(tasks.len(), cfg.progress);
    let mut results = Vec::with_capacity(tasks.len());

    while let Some((task, res)) = futs.next().await {
        match res {
            Ok(path) => {
                tracing::info!(
                    count = task.count,
                    iteration = task.iteration,
                    path = %path.display(),
                    "forkbomb run finished"
                );
                results.push(RunResult { task, path });
            }
            Err(e) => {
                tracing::warn!(
                    count = task.count,
                    iteration = task.iteration,
                    "forkbomb run produced no file: {e}"
                );
            }
        }
        progress.task_done();
    }

    progress.finish();
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &std::path::Path, forkbomb_bin: &str) -> BenchConfig {
        BenchConfig {
            child_counts: vec![2, 5],
            iterations: 2,
            forkbomb_bin: forkbomb_bin.to_string(),
            output_dir: dir.display().to_string(),
            progress: false,
            ..BenchConfig::default()
        }
    }

    #[tokio::test]
    async fn launch_failure_still_writes_marker_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path(), "/nonexistent/forkbench-no-such-bin");
        let tasks = task::generate(&cfg.child_counts, cfg.iterations);

        let results = run_stage(&cfg, &tasks).await.unwrap();
        assert_eq!(results.len(), 4);

        for t in tasks {
            let content =
                std::fs::read_to_string(task::output_file(dir.path(), t)).unwrap();
            assert!(
                content.starts_with("ERROR_RUNNING_FORKBOMB: "),
                "unexpected file content: {content}"
            );
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_output_is_persisted_verbatim() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        // Stub that ignores -c, writes to both streams and exits non-zero.
        let stub = dir.path().join("forkbomb");
        std::fs::write(&stub, "#!/bin/sh\necho out\necho err >&2\nexit 7\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut cfg = test_config(dir.path(), stub.to_str().unwrap());
        cfg.child_counts = vec![3];
        cfg.iterations = 1;

        let results = run_stage(&cfg, &[Task { count: 3, iteration: 1 }])
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        let content = std::fs::read_to_string(&results[0].path).unwrap();
        assert_eq!(content, "out\nerr\n");
    }
}
