//! Progress display for batch rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Words: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered, skipped and remaining words of a batch
///
/// A manager created hidden keeps the counters but draws nothing.
pub struct RenderProgress {
    bar: Option<ProgressBar>,
    rendered: usize,
    skipped: usize,
}

impl RenderProgress {
    /// Create a progress bar for `total` words
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = visible.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });

        Self {
            bar,
            rendered: 0,
            skipped: 0,
        }
    }

    /// Show the word currently being rendered
    pub fn start_word(&self, word: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(word.to_string());
        }
    }

    /// Count a rendered word
    pub fn complete_word(&mut self) {
        self.rendered += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Count a word whose output already existed
    pub fn skip_word(&mut self) {
        self.skipped += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of words rendered so far
    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Number of words skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "{} rendered, {} skipped",
                self.rendered, self.skipped
            ));
        }
    }
}
