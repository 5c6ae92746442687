//! `docsite check` command implementation.

use clap::Args;
use docsite_site::SiteBuilder;

use super::site_args::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load(None, output)?;
        let report = SiteBuilder::new(&site).check()?;

        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!(
            "{} pages OK ({} snippets at version {})",
            report.pages,
            report.snippets,
            site.version()
        ));
        Ok(())
    }
}
