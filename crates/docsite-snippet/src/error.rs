//! Snippet error types.

/// Error returned when a snippet request cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnippetError {
    /// Module id outside the published set.
    #[error("unknown module '{id}' (supported: {supported})")]
    UnknownModule {
        /// Requested id.
        id: String,
        /// Comma-separated supported ids.
        supported: String,
    },
    /// Build tool name outside the supported flavors.
    #[error("unknown build tool '{name}' (supported: {supported})")]
    UnknownBuildTool {
        /// Requested tool name.
        name: String,
        /// Comma-separated supported names.
        supported: String,
    },
    /// Multi-module snippet requested with no modules.
    #[error("at least one module is required")]
    NoModules,
}
