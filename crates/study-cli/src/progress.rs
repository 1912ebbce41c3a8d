use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TICK: Duration = Duration::from_millis(120);

/// Stderr activity indicator. Drawn hidden when progress output is off, so
/// callers never branch on it.
pub struct Activity(ProgressBar);

impl Activity {
    /// Indeterminate spinner for a single round-trip.
    #[must_use]
    pub fn waiting(message: &str) -> Self {
        if !ui::terminal().progress {
            return Self(ProgressBar::hidden());
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style).with_message(message.to_owned());
        bar.enable_steady_tick(TICK);
        Self(bar)
    }

    /// Bounded bar over `total` steps.
    #[must_use]
    pub fn counting(total: usize, message: &str) -> Self {
        if !ui::terminal().progress || total == 0 {
            return Self(ProgressBar::hidden());
        }
        let style = ProgressStyle::with_template("{wide_bar:.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        Self(ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX)).with_style(style).with_message(message.to_owned()))
    }

    pub fn step(&self) {
        self.0.inc(1);
    }

    pub fn done(&self) {
        self.0.finish_and_clear();
    }

    pub fn failed(&self, message: &str) {
        self.0.abandon_with_message(message.to_owned());
    }
}
