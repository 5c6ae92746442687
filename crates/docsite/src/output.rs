//! Colored terminal output utilities.

#[cfg(test)]
use std::cell::RefCell;

use console::{Style, Term};

/// Where command results are written.
enum ResultSink {
    Stdout(Term),
    #[cfg(test)]
    Captured(RefCell<Vec<String>>),
}

/// Terminal output formatter.
///
/// Status messages go to stderr; command results go to stdout.
pub(crate) struct Output {
    err: Term,
    out: ResultSink,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            err: Term::stderr(),
            out: ResultSink::Stdout(Term::stdout()),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Formatter that keeps command results in memory.
    #[cfg(test)]
    pub(crate) fn captured() -> Self {
        Self {
            out: ResultSink::Captured(RefCell::new(Vec::new())),
            ..Self::new()
        }
    }

    /// Results written so far by a [`captured`](Self::captured) formatter.
    #[cfg(test)]
    pub(crate) fn results(&self) -> Vec<String> {
        match &self.out {
            ResultSink::Captured(lines) => lines.borrow().clone(),
            ResultSink::Stdout(_) => Vec::new(),
        }
    }

    /// Print a command result to stdout, unstyled.
    pub(crate) fn result(&self, msg: &str) {
        match &self.out {
            ResultSink::Stdout(term) => {
                let _ = term.write_line(msg);
            }
            #[cfg(test)]
            ResultSink::Captured(lines) => lines.borrow_mut().push(msg.to_owned()),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.err.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.err.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
