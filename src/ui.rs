//! Step logging and progress display

use std::sync::atomic::{AtomicBool, Ordering};

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress step and detail output; warnings still print
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a build step headline
pub fn step(message: &str) {
    if is_quiet() {
        return;
    }
    println!("{}", Style::new().bold().cyan().apply_to(format!("=> {message}")));
}

/// Print an indented detail line under the current step
pub fn detail(message: &str) {
    if is_quiet() {
        return;
    }
    println!("  {message}");
}

/// Print a non-fatal warning
pub fn warn(message: &str) {
    eprintln!("{}", Style::new().yellow().apply_to(format!("warning: {message}")));
}

/// Progress bar for the archiving stage, driven by percent updates
pub struct ArchiveProgress {
    bar: ProgressBar,
}

impl ArchiveProgress {
    pub fn new() -> Self {
        if is_quiet() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.cyan/blue}] {pos}% Archived")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(100);
        bar.set_style(style);

        Self { bar }
    }

    pub fn set_percent(&self, percent: u8) {
        self.bar.set_position(u64::from(percent.min(100)));
    }

    pub fn finish(&self) {
        self.bar.set_position(100);
        self.bar.finish();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

impl Default for ArchiveProgress {
    fn default() -> Self {
        Self::new()
    }
}
