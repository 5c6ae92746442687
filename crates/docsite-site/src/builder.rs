//! Docs tree build.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use docsite_config::SiteConfig;
use docsite_directive::{
    DependenciesDirective, DependencyDirective, DirectiveError, DirectiveProcessor,
};
use rayon::prelude::*;

use crate::scanner::{FileKind, Scanner, SourceFile};

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Docs source directory does not exist.
    #[error("Docs source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Output directory has no final path component to stage next to.
    #[error("Invalid output directory: {}", .0.display())]
    InvalidOutputDir(PathBuf),
    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A page directive failed.
    #[error("{0}")]
    Directive(#[from] DirectiveError),
}

/// Summary of a successful build or check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Markdown pages processed.
    pub pages: usize,
    /// Non-page files copied (zero for a check).
    pub assets: usize,
    /// Directives expanded across all pages.
    pub snippets: usize,
    /// Non-fatal handler warnings.
    pub warnings: Vec<String>,
}

/// A page after directive expansion, not yet written.
struct ExpandedPage<'f> {
    file: &'f SourceFile,
    content: String,
    snippets: usize,
    warnings: Vec<String>,
}

/// Expands directives across the docs tree of one [`SiteConfig`].
///
/// Every page is expanded before anything is written, so a failing page
/// leaves the output directory untouched.
pub struct SiteBuilder<'a> {
    site: &'a SiteConfig,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder for the given configuration.
    #[must_use]
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Expand every page and replace `docs.output_dir` with the result.
    ///
    /// The tree is written into a hidden sibling staging directory and then
    /// renamed over the output, so the published tree only ever holds pages
    /// from a single build.
    ///
    /// # Errors
    ///
    /// Returns the first failing page (in path order) or I/O error.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let files = self.scan()?;
        let pages = self.expand_all(&files)?;
        let output_dir = &self.site.docs().output_dir;
        let staging = Staging::for_output(output_dir)?;

        staging.prepare()?;
        let mut report = summarize(&pages);
        match write_tree(&staging.fresh, &pages, &files) {
            Ok(assets) => report.assets = assets,
            Err(err) => {
                let _ = fs::remove_dir_all(&staging.fresh);
                return Err(err);
            }
        }
        staging.publish()?;

        tracing::info!(
            pages = report.pages,
            assets = report.assets,
            snippets = report.snippets,
            version = %self.site.version(),
            output = %output_dir.display(),
            "Site build completed"
        );
        Ok(report)
    }

    /// Expand every page without writing anything.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), minus write failures.
    pub fn check(&self) -> Result<BuildReport, BuildError> {
        let files = self.scan()?;
        let pages = self.expand_all(&files)?;
        let report = summarize(&pages);
        tracing::info!(
            pages = report.pages,
            snippets = report.snippets,
            "Site check completed"
        );
        Ok(report)
    }

    fn scan(&self) -> Result<Vec<SourceFile>, BuildError> {
        let docs = self.site.docs();
        if !docs.source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(docs.source_dir.clone()));
        }
        Scanner::new(&docs.source_dir)
            .excluding(&docs.output_dir)
            .scan()
            .map_err(|source| BuildError::Io {
                path: docs.source_dir.clone(),
                source,
            })
    }

    fn expand_all<'f>(&self, files: &'f [SourceFile]) -> Result<Vec<ExpandedPage<'f>>, BuildError> {
        let results: Vec<_> = files
            .par_iter()
            .filter(|f| f.kind == FileKind::Page)
            .map(|file| expand_page(self.site, file))
            .collect();
        results.into_iter().collect()
    }
}

fn expand_page<'f>(site: &SiteConfig, file: &'f SourceFile) -> Result<ExpandedPage<'f>, BuildError> {
    let input = fs::read_to_string(&file.path).map_err(|source| BuildError::Io {
        path: file.path.clone(),
        source,
    })?;

    let mut processor = DirectiveProcessor::new(site)
        .with_source_path(&file.relative)
        .with_leaf(DependencyDirective::new())
        .with_leaf(DependenciesDirective::new());
    let content = processor.process(&input)?;

    tracing::debug!(
        page = %file.relative.display(),
        snippets = processor.expanded(),
        "Expanded page"
    );

    let warnings = processor.warnings();
    for warning in &warnings {
        tracing::warn!(page = %file.relative.display(), "{warning}");
    }

    Ok(ExpandedPage {
        file,
        content,
        snippets: processor.expanded(),
        warnings,
    })
}

/// Write expanded pages and copied assets under `root`, returning the asset count.
fn write_tree(
    root: &Path,
    pages: &[ExpandedPage<'_>],
    files: &[SourceFile],
) -> Result<usize, BuildError> {
    for page in pages {
        let target = root.join(&page.file.relative);
        create_parent(&target)?;
        fs::write(&target, &page.content).map_err(|source| BuildError::Io {
            path: target.clone(),
            source,
        })?;
    }
    let mut assets = 0;
    for file in files.iter().filter(|f| f.kind == FileKind::Asset) {
        let target = root.join(&file.relative);
        create_parent(&target)?;
        fs::copy(&file.path, &target).map_err(|source| BuildError::Io {
            path: file.path.clone(),
            source,
        })?;
        assets += 1;
    }
    Ok(assets)
}

/// Hidden sibling directories used to swap a finished build into place.
///
/// Both names start with `.`, so the scanner skips them when the output
/// directory is nested in the sources.
struct Staging<'a> {
    output: &'a Path,
    fresh: PathBuf,
    previous: PathBuf,
}

impl<'a> Staging<'a> {
    fn for_output(output: &'a Path) -> Result<Self, BuildError> {
        let name = output
            .file_name()
            .ok_or_else(|| BuildError::InvalidOutputDir(output.to_path_buf()))?;
        let parent = output.parent().unwrap_or(Path::new(""));
        let sibling = |suffix: &str| {
            let mut file_name = OsString::from(".");
            file_name.push(name);
            file_name.push(suffix);
            parent.join(file_name)
        };
        Ok(Self {
            output,
            fresh: sibling(".staging"),
            previous: sibling(".previous"),
        })
    }

    /// Start from an empty staging directory.
    fn prepare(&self) -> Result<(), BuildError> {
        remove_dir_if_exists(&self.fresh)?;
        fs::create_dir_all(&self.fresh).map_err(|source| BuildError::Io {
            path: self.fresh.clone(),
            source,
        })
    }

    /// Move the current output aside, rename staging over it, drop the old tree.
    fn publish(&self) -> Result<(), BuildError> {
        remove_dir_if_exists(&self.previous)?;
        if self.output.exists() {
            fs::rename(self.output, &self.previous).map_err(|source| BuildError::Io {
                path: self.output.to_path_buf(),
                source,
            })?;
        }
        fs::rename(&self.fresh, self.output).map_err(|source| BuildError::Io {
            path: self.fresh.clone(),
            source,
        })?;
        tracing::debug!(output = %self.output.display(), "Swapped in staged build");
        remove_dir_if_exists(&self.previous)
    }
}

fn remove_dir_if_exists(path: &Path) -> Result<(), BuildError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BuildError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn summarize(pages: &[ExpandedPage<'_>]) -> BuildReport {
    BuildReport {
        pages: pages.len(),
        assets: 0,
        snippets: pages.iter().map(|p| p.snippets).sum(),
        warnings: pages.iter().flat_map(|p| p.warnings.iter().cloned()).collect(),
    }
}

fn create_parent(target: &Path) -> Result<(), BuildError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
