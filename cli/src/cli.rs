use std::path::PathBuf;

use clap::Parser;

/// All flags are optional overrides; omitted ones fall back to
/// `./forkbench.toml` (or `--config`) and built-in defaults. After startup
/// the configuration is fixed.
#[derive(Parser, Debug)]
#[command(name = "forkbench", about = "Forkbomb benchmarking harness")]
pub struct Args {
    /// Child counts to benchmark, e.g. --counts 10,100,1000
    #[arg(long, value_delimiter = ',')]
    pub counts: Option<Vec<u64>>,

    /// Iterations per child count.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Path to the forkbomb binary.
    #[arg(long)]
    pub forkbomb_bin: Option<String>,

    /// Path to the analyze binary.
    #[arg(long)]
    pub analyze_bin: Option<String>,

    /// Directory for per-run output files and the CSV.
    #[arg(long)]
    pub output_dir: Option<String>,

    /// CSV file name, relative to the output directory.
    #[arg(long)]
    pub csv_out: Option<String>,

    /// Cap on concurrently running forkbomb processes.
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Disable the run-stage progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Explicit config file instead of ./forkbench.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Fold CLI overrides into a loaded config.
    pub fn apply_to(&self, cfg: &mut forkbench_core::BenchConfig) {
        if let Some(counts) = &self.counts {
            cfg.child_counts = counts.clone();
        }
        if let Some(iterations) = self.iterations {
            cfg.iterations = iterations;
        }
        if let Some(bin) = &self.forkbomb_bin {
            cfg.forkbomb_bin = bin.clone();
        }
        if let Some(bin) = &self.analyze_bin {
            cfg.analyze_bin = bin.clone();
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if let Some(name) = &self.csv_out {
            cfg.csv_out = name.clone();
        }
        if let Some(workers) = self.max_workers {
            cfg.max_workers = workers;
        }
        if self.no_progress {
            cfg.progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_replace_given_fields() {
        let args = Args::parse_from([
            "forkbench",
            "--counts",
            "10,100",
            "--iterations",
            "2",
            "--no-progress",
        ]);

        let mut cfg = forkbench_core::BenchConfig::default();
        args.apply_to(&mut cfg);

        assert_eq!(cfg.child_counts, vec![10, 100]);
        assert_eq!(cfg.iterations, 2);
        assert!(!cfg.progress);
        // untouched
        assert_eq!(cfg.forkbomb_bin, "./forkbomb");
        assert_eq!(cfg.max_workers, 32);
    }
}
