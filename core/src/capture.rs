use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

/// Outcome of one external process invocation.
///
/// A process that could be launched always yields `Completed`, whatever its
/// exit status; the stages decide what a non-zero exit means. Only a spawn
/// failure (binary missing, permission denied) becomes `LaunchFailed`, and
/// even that is a value, never an `Err` — per-task failures must not abort
/// the pipeline.
#[derive(Debug)]
pub enum Captured {
    Completed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
    LaunchFailed(String),
}

/// Run `bin args..` to completion, capturing both output streams as text.
///
/// No timeout: a hung external process blocks its caller indefinitely.
pub async fn run(bin: &str, args: &[String]) -> Captured {
    let result = Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await;

    match result {
        Ok(out) => Captured::Completed {
            status: out.status,
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        },
        Err(e) => Captured::LaunchFailed(e.to_string()),
    }
}
