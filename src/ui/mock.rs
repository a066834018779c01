//! Recording UI for tests.

use super::{OutputMode, SpinnerHandle, UserInterface};
use std::cell::RefCell;
use std::rc::Rc;

/// UI implementation that records everything it is told to display.
#[derive(Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinner_log: Rc<RefCell<Vec<String>>>,
}

impl MockUI {
    /// Create an empty recording UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All recorded warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All recorded errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any warning contains the given substring.
    pub fn has_warning(&self, substring: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(substring))
    }

    /// Whether any plain message contains the given substring.
    pub fn has_message(&self, substring: &str) -> bool {
        self.messages.iter().any(|m| m.contains(substring))
    }

    /// Whether any success message contains the given substring.
    pub fn has_success(&self, substring: &str) -> bool {
        self.successes.iter().any(|m| m.contains(substring))
    }

    /// Spinner events in order, formatted as `start:`/`success:`/`error:`/
    /// `skipped:` lines.
    pub fn spinner_log(&self) -> Vec<String> {
        self.spinner_log.borrow().clone()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinner_log
            .borrow_mut()
            .push(format!("start: {}", message));
        Box::new(MockSpinner {
            log: Rc::clone(&self.spinner_log),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner handle that records its lifecycle into the owning [`MockUI`].
pub struct MockSpinner {
    log: Rc<RefCell<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log.borrow_mut().push(format!("message: {}", msg));
    }

    fn finish_success(&mut self, msg: &str) {
        self.log.borrow_mut().push(format!("success: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.log.borrow_mut().push(format!("error: {}", msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.log.borrow_mut().push(format!("skipped: {}", msg));
    }
}
