//! CLI command implementations.

mod build;
mod check;
pub(crate) mod modules;
mod site_args;
mod snippet;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use snippet::SnippetArgs;
