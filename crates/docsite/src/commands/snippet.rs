//! `docsite snippet` command implementation.

use clap::Args;
use docsite_snippet::ModuleRef;

use super::site_args::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the snippet command.
#[derive(Args)]
pub(crate) struct SnippetArgs {
    /// Module to reference (see `docsite modules`).
    module: String,

    /// Declaration flavor: sbt, mill or scala-cli.
    #[arg(short, long, default_value = "sbt")]
    tool: String,

    /// Wrap the snippet in a fenced markdown code block.
    #[arg(long)]
    fenced: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl SnippetArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        // Reject bad input before touching configuration
        let reference = ModuleRef::new(self.module.parse()?, self.tool.parse()?);

        let site = self.site.load(None, output)?;
        let text = if self.fenced {
            reference.code_block(site.version()).to_markdown()
        } else {
            reference.render(site.version())
        };
        output.result(&text);
        Ok(())
    }
}
