//! Site configuration for the documentation build.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The resulting [`SiteConfig`] is built once at the start of a build and is
//! read-only afterwards: it has no setters, and every component receives it by
//! shared reference.
//!
//! ## Release Version
//!
//! The release version shown in dependency snippets comes from `site.version`,
//! which defaults to `${CHATOPS4S_VERSION}`. Loading fails when the variable is
//! unset or the resolved value is empty, so a build can never start with a
//! blank version.
//!
//! ## Environment Variable Expansion
//!
//! String values in the `[site]` section support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// Environment variable holding the release version.
pub const VERSION_ENV_VAR: &str = "CHATOPS4S_VERSION";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the release version (taken literally, no expansion).
    pub version: Option<String>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
}

/// Release version embedded in published snippets.
///
/// Guaranteed non-empty and limited to the Maven/Ivy version charset
/// (`A-Z a-z 0-9 . _ + -`), so it can be spliced into any build-tool
/// declaration as-is. The value is otherwise opaque: it is never normalized
/// or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteVersion(String);

impl SiteVersion {
    /// Validate and wrap a version string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the value is empty, whitespace only,
    /// or contains a character outside the version charset.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "site.version cannot be empty (set {VERSION_ENV_VAR} or site.version)"
            )));
        }
        if let Some(bad) = value.chars().find(|&c| !is_version_char(c)) {
            return Err(ConfigError::Validation(format!(
                "site.version {value:?} contains invalid character {bad:?} \
                 (allowed: letters, digits, '.', '_', '+', '-')"
            )));
        }
        Ok(Self(value))
    }

    /// The version string exactly as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

impl fmt::Display for SiteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptive site metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// One-line tagline.
    pub tagline: String,
    /// Public site URL.
    pub url: String,
    /// Path prefix the site is served under.
    pub base_url: String,
    /// Owning organization.
    pub organization: String,
    /// Project name.
    pub project: String,
}

/// Resolved documentation paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    /// Source directory for markdown pages.
    pub source_dir: PathBuf,
    /// Directory the expanded pages are written to.
    pub output_dir: PathBuf,
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigRaw {
    site: SiteRaw,
    docs: DocsRaw,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SiteRaw {
    title: String,
    tagline: String,
    url: String,
    base_url: String,
    organization: String,
    project: String,
    version: Option<String>,
}

impl Default for SiteRaw {
    fn default() -> Self {
        Self {
            title: "ChatOps4s".to_owned(),
            tagline: "Simplified Chat-ops for Scala".to_owned(),
            url: "https://business4s.github.io/".to_owned(),
            base_url: "/chatops4s/".to_owned(),
            organization: "business4s".to_owned(),
            project: "chatops4s".to_owned(),
            version: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.version`").
        field: String,
        /// Error message (e.g., "${`CHATOPS4S_VERSION`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Build-lifetime site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    site: SiteMetadata,
    version: SiteVersion,
    docs: DocsConfig,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docsite.toml` in the current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing fails,
    /// or the release version is unset or empty.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path, cli_settings);
        }

        let cwd = std::env::current_dir()?;
        match discover_config(&cwd) {
            Some(discovered) => Self::load_from_file(&discovered, cli_settings),
            None => Self::from_raw(&ConfigRaw::default(), &cwd, cli_settings),
        }
    }

    /// Parse configuration from TOML text, resolving paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus file lookup.
    pub fn from_toml_str(
        content: &str,
        base_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        Self::from_raw(&raw, base_dir, cli_settings)
    }

    /// Default configuration with an explicit version and paths under `base_dir`.
    #[must_use]
    pub fn with_version(version: SiteVersion, base_dir: &Path) -> Self {
        let site = SiteRaw::default();
        Self {
            site: SiteMetadata {
                title: site.title,
                tagline: site.tagline,
                url: site.url,
                base_url: site.base_url,
                organization: site.organization,
                project: site.project,
            },
            version,
            docs: resolve_docs(&DocsRaw::default(), base_dir),
            config_path: None,
        }
    }

    /// Release version shown in dependency snippets.
    #[must_use]
    pub fn version(&self) -> &SiteVersion {
        &self.version
    }

    /// Site metadata.
    #[must_use]
    pub fn site(&self) -> &SiteMetadata {
        &self.site
    }

    /// Resolved documentation paths.
    #[must_use]
    pub fn docs(&self) -> &DocsConfig {
        &self.docs
    }

    /// Path to the loaded config file, if one was found.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn load_from_file(path: &Path, cli_settings: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir, cli_settings)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn from_raw(
        raw: &ConfigRaw,
        base_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let defaults = CliSettings::default();
        let settings = cli_settings.unwrap_or(&defaults);

        let version = match &settings.version {
            Some(version) => version.clone(),
            None => {
                let source = raw
                    .site
                    .version
                    .clone()
                    .unwrap_or_else(|| format!("${{{VERSION_ENV_VAR}}}"));
                expand::expand_env(&source, "site.version")?
            }
        };
        let version = SiteVersion::new(version)?;

        let site = SiteMetadata {
            title: expand::expand_env(&raw.site.title, "site.title")?,
            tagline: expand::expand_env(&raw.site.tagline, "site.tagline")?,
            url: expand::expand_env(&raw.site.url, "site.url")?,
            base_url: expand::expand_env(&raw.site.base_url, "site.base_url")?,
            organization: expand::expand_env(&raw.site.organization, "site.organization")?,
            project: expand::expand_env(&raw.site.project, "site.project")?,
        };
        validate_site(&site)?;

        let mut docs = resolve_docs(&raw.docs, base_dir);
        if let Some(source_dir) = &settings.source_dir {
            docs.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            docs.output_dir.clone_from(output_dir);
        }

        Ok(Self {
            site,
            version,
            docs,
            config_path: None,
        })
    }
}

/// Validate site metadata values.
fn validate_site(site: &SiteMetadata) -> Result<(), ConfigError> {
    require_non_empty(&site.title, "site.title")?;
    require_non_empty(&site.url, "site.url")?;
    require_http_url(&site.url, "site.url")?;
    if !site.base_url.starts_with('/') || !site.base_url.ends_with('/') {
        return Err(ConfigError::Validation(
            "site.base_url must start and end with '/'".to_owned(),
        ));
    }
    Ok(())
}

/// Resolve relative docs paths against the config directory.
fn resolve_docs(raw: &DocsRaw, base_dir: &Path) -> DocsConfig {
    let resolve = |path: Option<&str>, default: &str| base_dir.join(path.unwrap_or(default));
    DocsConfig {
        source_dir: resolve(raw.source_dir.as_deref(), "docs"),
        output_dir: resolve(raw.output_dir.as_deref(), ".docsite/build"),
    }
}

/// Search for a config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
