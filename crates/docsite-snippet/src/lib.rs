//! Versioned dependency snippets for documentation pages.
//!
//! A snippet is a pure function of a module, a build-tool flavor and the
//! configured release version:
//!
//! ```
//! use docsite_config::SiteVersion;
//! use docsite_snippet::{BuildTool, ModuleId, render};
//!
//! let version = SiteVersion::new("1.2.3").unwrap();
//! let snippet = render(ModuleId::Slack, BuildTool::Sbt, &version);
//! assert_eq!(snippet, r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#);
//! ```
//!
//! Module ids and tool names arriving as strings (from page directives or the
//! CLI) are parsed into the closed [`ModuleId`] and [`BuildTool`] enums first,
//! so an unknown id is rejected before anything is rendered.

mod build_tool;
mod code_block;
mod error;
mod module;
mod render;

pub use build_tool::BuildTool;
pub use code_block::CodeBlock;
pub use error::SnippetError;
pub use module::ModuleId;
pub use render::{ModuleRef, render, render_named, render_sbt_seq};
