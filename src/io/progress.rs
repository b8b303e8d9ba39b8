//! Per-stage progress bars for cascade runs

use crate::algorithm::cascade::CascadeObserver;
use crate::algorithm::direction::Direction;
use crate::algorithm::lattice::{OrderReport, Prediction};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>12}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one progress bar per cascade stage, advanced once per order
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to the terminal
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bars: Vec::new(),
        }
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            stage_bars: Vec::new(),
        }
    }

    /// Orders completed so far by `stage`
    pub fn position(&self, stage: usize) -> Option<u64> {
        self.stage_bars.get(stage).map(ProgressBar::position)
    }

    /// Whether `stage` has been marked complete
    pub fn is_finished(&self, stage: usize) -> bool {
        self.stage_bars.get(stage).is_some_and(ProgressBar::is_finished)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }
}

impl<T> CascadeObserver<T> for ProgressManager {
    fn stage_started(&mut self, stage: usize, direction: Direction, order: usize) {
        if stage >= self.stage_bars.len() {
            self.stage_bars.resize_with(stage + 1, ProgressBar::hidden);
        }
        let bar = self.multi_progress.add(ProgressBar::new(order as u64));
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(direction.label());
        if let Some(slot) = self.stage_bars.get_mut(stage) {
            *slot = bar;
        }
    }

    fn order_completed(&mut self, stage: usize, _report: &OrderReport<T>) {
        if let Some(bar) = self.stage_bars.get(stage) {
            bar.inc(1);
        }
    }

    fn stage_completed(&mut self, stage: usize, _prediction: &Prediction<T>) {
        if let Some(bar) = self.stage_bars.get(stage) {
            bar.finish_with_message("done");
        }
    }
}
