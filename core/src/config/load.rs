use std::path::Path;

use super::types::BenchConfig;

/// Load configuration from `./forkbench.toml` if present, falling back to
/// built-in defaults, then apply environment overrides.
pub fn load_default() -> anyhow::Result<BenchConfig> {
    load_from(None)
}

/// Like [`load_default`], but an explicit config path takes priority over
/// `./forkbench.toml`. A missing explicit path is an error; a missing
/// implicit one is not.
pub fn load_from(path: Option<&Path>) -> anyhow::Result<BenchConfig> {
    let mut cfg: BenchConfig = match path {
        Some(p) => {
            let s = std::fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", p.display()))?;
            toml::from_str(&s)?
        }
        None => {
            let local = Path::new("forkbench.toml");
            if local.exists() {
                let s = std::fs::read_to_string(local)?;
                toml::from_str(&s)?
            } else {
                BenchConfig::default()
            }
        }
    };

    // Environment variable overrides (highest priority below CLI flags)
    if let Ok(v) = std::env::var("FORKBENCH_FORKBOMB_BIN") {
        if !v.trim().is_empty() {
            cfg.forkbomb_bin = v;
        }
    }
    if let Ok(v) = std::env::var("FORKBENCH_ANALYZE_BIN") {
        if !v.trim().is_empty() {
            cfg.analyze_bin = v;
        }
    }
    if let Ok(v) = std::env::var("FORKBENCH_OUTPUT_DIR") {
        if !v.trim().is_empty() {
            cfg.output_dir = v;
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_required_to_exist() {
        let err = load_from(Some(Path::new("/nonexistent/forkbench.toml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forkbench.toml");
        std::fs::write(&path, "iterations = 3\nmax_workers = 4\n").unwrap();

        let cfg = load_from(Some(&path)).unwrap();
        assert_eq!(cfg.iterations, 3);
        assert_eq!(cfg.max_workers, 4);
        // untouched fields keep their defaults
        assert_eq!(cfg.csv_out, "forkbomb_results.csv");
    }
}
