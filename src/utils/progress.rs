//! Progress bar utilities using indicatif
//!
//! Provides a wrapper around indicatif's `ProgressBar` so every command
//! reports reading progress the same way.

use indicatif::{ProgressBar as IndicatifBar, ProgressBarIter, ProgressStyle};
use std::io::Read;

/// Progress bar wrapper for displaying processing status.
///
/// Cloning is cheap and clones drive the same bar, so one bar can be shared
/// by parallel workers.
#[derive(Clone)]
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Create a byte-based progress bar with known total
    pub fn new(total_bytes: u64, label: &str) -> Self {
        let bar = IndicatifBar::new(total_bytes);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{msg} [{bar:40.cyan/blue}] {percent:>3}% ({bytes}/{total_bytes}) ({bytes_per_sec}) {eta}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█░"),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Create a progress bar with unknown total (spinner mode)
    pub fn new_spinner(label: &str) -> Self {
        let bar = IndicatifBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg} {spinner} {bytes} ({bytes_per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Pick a bar when the size is known, a spinner otherwise
    pub fn for_size(total_bytes: Option<u64>, label: &str) -> Self {
        match total_bytes {
            Some(total) => Self::new(total, label),
            None => Self::new_spinner(label),
        }
    }

    /// A bar that never draws, for `--no-progress` and tests
    pub fn hidden() -> Self {
        Self {
            bar: IndicatifBar::hidden(),
        }
    }

    /// Wrap a reader so bytes read advance the bar
    pub fn wrap_read<R: Read>(&self, read: R) -> ProgressBarIter<R> {
        self.bar.wrap_read(read)
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the progress bar
    pub fn finish(&self) {
        self.bar.finish();
    }

    /// Finish with custom message
    pub fn finish_with_message(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
