//! Progress display for long-running score matrix computations

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar counting scored anchor tiles
///
/// Hidden bars accept updates but draw nothing, so callers never need to
/// branch on `--quiet`.
pub struct ScoringProgress {
    bar: ProgressBar,
}

impl ScoringProgress {
    /// Create a visible bar for `anchors` anchor tiles
    pub fn new(anchors: usize) -> Self {
        let bar = ProgressBar::new(bar_length(anchors));
        bar.set_style(Self::style());
        bar.set_message("scoring");
        Self { bar }
    }

    /// Create a bar that never draws
    pub fn hidden(anchors: usize) -> Self {
        let bar =
            ProgressBar::with_draw_target(Some(bar_length(anchors)), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Record one finished anchor tile
    ///
    /// Safe to call from several threads.
    pub fn anchor_done(&self) {
        self.bar.inc(1);
    }

    /// Number of anchors recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the computation as complete and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Total number of anchors the bar counts towards
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    fn style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}

// Saturates on targets where `usize` is wider than 64 bits
fn bar_length(anchors: usize) -> u64 {
    u64::try_from(anchors).unwrap_or(u64::MAX)
}
