//! Terminal progress spinner

use super::formatters::humanize;
use crate::generator::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner showing the number of lines written so far
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message("Generating passwords...");
        Self { bar }
    }

    /// Stop the spinner, leaving its last message on screen
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerProgress {
    fn on_progress(&self, written: u64) {
        self.bar
            .set_message(format!("Generated {} passwords...", humanize(written)));
    }

    fn on_complete(&self, written: u64) {
        self.bar
            .finish_with_message(format!("Generated {} passwords", humanize(written)));
    }
}
