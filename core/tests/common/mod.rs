use std::path::{Path, PathBuf};

use forkbench_core::BenchConfig;

/// Write an executable `#!/bin/sh` stub into `dir`.
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

pub fn bench_config(
    out_dir: &Path,
    counts: &[u64],
    iterations: u32,
    forkbomb_bin: &Path,
    analyze_bin: &Path,
) -> BenchConfig {
    BenchConfig {
        child_counts: counts.to_vec(),
        iterations,
        forkbomb_bin: forkbomb_bin.display().to_string(),
        analyze_bin: analyze_bin.display().to_string(),
        output_dir: out_dir.display().to_string(),
        progress: false,
        ..BenchConfig::default()
    }
}
