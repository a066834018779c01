//! Spinner implementations.

use super::SpinnerHandle;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Animated spinner for interactive terminals.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create and start a spinner with the given message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{} {}", style("✓").green(), msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", style("✗").red(), msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{} {}", style("-").dim(), msg);
    }
}

/// Line-based stand-in for spinners in CI/headless environments.
pub struct PlainSpinner {
    quiet: bool,
}

impl PlainSpinner {
    /// Create a plain spinner, printing the start message unless quiet.
    pub fn new(message: &str, quiet: bool) -> Self {
        if !quiet {
            println!("... {}", message);
        }
        Self { quiet }
    }
}

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, msg: &str) {
        if !self.quiet {
            println!("... {}", msg);
        }
    }

    fn finish_success(&mut self, msg: &str) {
        println!("ok: {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("failed: {}", msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        if !self.quiet {
            println!("skipped: {}", msg);
        }
    }
}
