//! `docsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_site::SiteBuilder;

use super::site_args::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output directory for the expanded docs (default: .docsite/build/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load(self.output_dir, output)?;
        let docs = site.docs();

        output.info(&format!("Source: {}", docs.source_dir.display()));
        output.info(&format!("Output: {}", docs.output_dir.display()));
        output.info(&format!("Version: {}", site.version()));

        let report = SiteBuilder::new(&site).build()?;

        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!(
            "Built {} pages ({} snippets, {} assets) to {}",
            report.pages,
            report.snippets,
            report.assets,
            docs.output_dir.display()
        ));
        Ok(())
    }
}
