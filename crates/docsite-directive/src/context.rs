//! Directive processing context.

use std::path::Path;

use docsite_config::{SiteConfig, SiteVersion};

/// Context handed to a directive handler for one directive occurrence.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use docsite_config::{SiteConfig, SiteVersion};
/// use docsite_directive::DirectiveContext;
///
/// let site = SiteConfig::with_version(SiteVersion::new("1.0.0").unwrap(), Path::new("."));
/// let ctx = DirectiveContext {
///     source_path: Some(Path::new("docs/install.md")),
///     line: 12,
///     site: &site,
/// };
///
/// assert_eq!(ctx.version().as_str(), "1.0.0");
/// assert_eq!(ctx.location(), "docs/install.md:12");
/// ```
pub struct DirectiveContext<'a> {
    /// Path to the page being processed (if known).
    pub source_path: Option<&'a Path>,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
    /// Build configuration.
    pub site: &'a SiteConfig,
}

impl DirectiveContext<'_> {
    /// Release version of the current build.
    #[must_use]
    pub fn version(&self) -> &SiteVersion {
        self.site.version()
    }

    /// Human-readable source location for messages.
    #[must_use]
    pub fn location(&self) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}", path.display(), self.line),
            None => format!("line {}", self.line),
        }
    }
}
