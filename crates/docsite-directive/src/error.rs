//! Directive error types.

use std::path::PathBuf;

/// Error type returned by directive handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A directive handler rejected its input.
///
/// Fatal for the page: the processor stops at the first failing directive.
#[derive(Debug, thiserror::Error)]
#[error("{location}: ::{directive}: {source}")]
pub struct DirectiveError {
    /// `path:line` (or `line N` when the source path is unknown).
    pub location: String,
    /// Source file, if known.
    pub path: Option<PathBuf>,
    /// 1-based line of the directive.
    pub line: usize,
    /// Directive name.
    pub directive: String,
    /// Handler error.
    #[source]
    pub source: HandlerError,
}
