//! Stage and batch progress bars for mosaic generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Coordinates progress display for tile loading, stamping and batches
///
/// A batch bar is only shown when more than one target is processed; stage
/// bars are replaced each time a new stage starts.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    stage_started: Option<Instant>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>14}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent:>3}}% ({{pos}}/{{len}}) {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mosaics: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bar: None,
            stage_started: None,
        }
    }

    /// Prepare the batch bar for the given number of targets
    pub fn initialize(&mut self, target_count: usize) {
        if target_count > 1 {
            let batch_bar = ProgressBar::new(target_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a new stage bar, finishing any previous one
    pub fn start_stage(&mut self, label: &str, total: usize) {
        if let Some(previous) = self.stage_bar.take() {
            previous.finish_and_clear();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.stage_bar = Some(self.multi_progress.add(bar));
        self.stage_started = Some(Instant::now());
    }

    /// Report how many of `total` items of the current stage are done
    pub fn update(&self, position: usize, total: usize) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_length(total as u64);
            bar.set_position(position as u64);
        }
    }

    /// Finish the current stage and return how long it took
    pub fn complete_stage(&mut self) -> Duration {
        let elapsed = self
            .stage_started
            .take()
            .map_or(Duration::ZERO, |started| started.elapsed());

        if let Some(bar) = self.stage_bar.take() {
            bar.finish_with_message(format!("done in {elapsed:.2?}"));
        }
        elapsed
    }

    /// Advance the batch bar after a target's mosaic has been written
    pub fn complete_target(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All mosaics generated");
        }
        let _ = self.multi_progress.clear();
    }
}
