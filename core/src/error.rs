use thiserror::Error;

/// Fatal harness errors.
///
/// Per-task failures (unlaunchable forkbomb, non-zero analyzer exit, missing
/// files) never surface here: they degrade to marker strings that flow
/// through the table and CSV like any other value. Only filesystem-level
/// failures that make a result impossible are typed.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("worker pool error: {0}")]
    Pool(String),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("harness failed: {0}")]
    Harness(#[from] HarnessError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
