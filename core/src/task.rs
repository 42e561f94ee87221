use std::path::{Path, PathBuf};

/// One forkbomb invocation: a child count and a 1-based iteration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    pub count: u64,
    pub iteration: u32,
}

/// Cartesian product of the configured child counts and `1..=iterations`.
///
/// The order only matters for submission bookkeeping; the run stage completes
/// tasks in arbitrary order and the later stages re-derive their own order.
pub fn generate(child_counts: &[u64], iterations: u32) -> Vec<Task> {
    let mut tasks = Vec::with_capacity(child_counts.len() * iterations as usize);
    for &count in child_counts {
        for iteration in 1..=iterations {
            tasks.push(Task { count, iteration });
        }
    }
    tasks
}

/// Deterministic per-task output file. Both the run and analyze stages go
/// through this one function, so names can never collide or drift apart.
pub fn output_file(dir: &Path, task: Task) -> PathBuf {
    dir.join(format!("forkbomb_{}_{}.txt", task.count, task.iteration))
}
