use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the run stage, drawn on stderr so it never interleaves
/// with the report on stdout. Disabled for non-TTY runs.
pub struct RunProgress {
    bar: ProgressBar,
    enabled: bool,
}

impl RunProgress {
    pub fn new(total_tasks: usize, enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
                enabled: false,
            };
        }

        let bar = ProgressBar::new(total_tasks as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} runs ({percent}%) {msg}")
                .unwrap()
                .progress_chars("█▓▒░  "),
        );
        bar.set_message("launching...");

        Self { bar, enabled: true }
    }

    pub fn task_done(&self) {
        if self.enabled {
            self.bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if self.enabled {
            self.bar.finish_with_message("runs complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_progress_is_inert() {
        let progress = RunProgress::new(3, false);
        progress.task_done();
        progress.task_done();
        progress.finish();
    }

    #[test]
    fn enabled_progress_counts_to_total() {
        let progress = RunProgress::new(2, true);
        progress.task_done();
        progress.task_done();
        progress.finish();
    }
}
