//! CLI error types.

use docsite_config::ConfigError;
use docsite_site::BuildError;
use docsite_snippet::SnippetError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Snippet(#[from] SnippetError),
}
