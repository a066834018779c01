//! Interactive terminal UI.

use super::spinner::ProgressSpinner;
use super::{NonInteractiveUI, OutputMode, SpinnerHandle, UserInterface};
use console::style;

/// UI for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✓").green().bold(), msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("error:").red().bold(), msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", style(title).bold());
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the UI appropriate for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
