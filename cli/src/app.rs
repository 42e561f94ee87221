//! Pipeline orchestration: run stage, analyze stage, then the report.

use forkbench_core::error::CliError;
use forkbench_core::report::{self, ResultTable};
use forkbench_core::{analyzer, runner, task, BenchConfig};

pub async fn run_pipeline(cfg: BenchConfig) -> Result<i32, CliError> {
    let tasks = task::generate(&cfg.child_counts, cfg.iterations);

    println!("Launching {} forkbomb runs...", tasks.len());
    runner::run_stage(&cfg, &tasks).await?;

    println!("Analyzing files...");
    let results = analyzer::analyze_stage(&cfg).await;

    let table = ResultTable::build(&cfg.child_counts, cfg.iterations, &results);
    println!("\nResults table:");
    print!("{}", table.render());

    let csv_path = cfg.csv_path();
    report::write_csv(&table, &csv_path)?;
    println!("\nCSV written to {}", csv_path.display());

    // Echo the file as written, not the in-memory table.
    println!("\nCSV output:");
    let content = std::fs::read_to_string(&csv_path)?;
    println!("{content}");

    Ok(0)
}
