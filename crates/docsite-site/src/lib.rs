//! Documentation site build.
//!
//! Walks the docs source directory of a [`SiteConfig`](docsite_config::SiteConfig),
//! expands dependency directives in every markdown page and writes the result
//! to the output directory for the site renderer. Pages are expanded in
//! parallel; the configuration is shared read-only between workers.

mod builder;
mod scanner;

pub use builder::{BuildError, BuildReport, SiteBuilder};
