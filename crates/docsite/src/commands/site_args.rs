//! Configuration flags shared by commands that load the site config.

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Config file and override flags.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Release version to render (overrides config and `CHATOPS4S_VERSION`).
    #[arg(long)]
    release_version: Option<String>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl SiteArgs {
    /// Load the site configuration, applying these flags.
    pub(crate) fn load(
        &self,
        output_dir: Option<PathBuf>,
        output: &Output,
    ) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            version: self.release_version.clone(),
            source_dir: self.source_dir.clone(),
            output_dir,
        };
        let site = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = site.config_path() {
            output.info(&format!("Config: {}", path.display()));
        }
        tracing::debug!(version = %site.version(), "Loaded site configuration");
        Ok(site)
    }
}
