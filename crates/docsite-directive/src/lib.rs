//! Leaf directive expansion for documentation pages.
//!
//! Pages reference dependency snippets with CommonMark leaf directives:
//!
//! ```markdown
//! ::dependency[chatops4s-slack]{tool=sbt}
//! ::dependencies[chatops4s-core chatops4s-slack]
//! ```
//!
//! The [`DirectiveProcessor`] walks a page line by line, dispatches each leaf
//! directive to the registered [`LeafDirective`] handler and splices the
//! returned markdown in place of the directive line. Lines inside fenced code
//! blocks are never expanded, and directives without a handler pass through
//! unchanged.
//!
//! Handlers see the build's [`SiteConfig`](docsite_config::SiteConfig) through
//! [`DirectiveContext`]. A handler error aborts the page with a
//! [`DirectiveError`] carrying the source location.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use docsite_config::{SiteConfig, SiteVersion};
//! use docsite_directive::{DependencyDirective, DirectiveProcessor};
//!
//! let site = SiteConfig::with_version(SiteVersion::new("1.2.3").unwrap(), Path::new("."));
//! let mut processor = DirectiveProcessor::new(&site).with_leaf(DependencyDirective::new());
//!
//! let page = processor.process("::dependency[chatops4s-slack]\n").unwrap();
//! assert!(page.contains(r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#));
//! ```

mod args;
mod context;
mod dependency;
mod error;
mod fence;
mod leaf;
mod output;
mod parser;
mod processor;

pub use args::DirectiveArgs;
pub use context::DirectiveContext;
pub use dependency::{DependenciesDirective, DependencyDirective};
pub use error::{DirectiveError, HandlerError};
pub use leaf::LeafDirective;
pub use output::DirectiveOutput;
pub use processor::DirectiveProcessor;
