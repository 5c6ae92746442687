//! Source file discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

/// What the builder does with a discovered file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileKind {
    /// Markdown page: directives are expanded.
    Page,
    /// Anything else: copied unchanged.
    Asset,
}

/// A file under the docs source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    /// Path relative to the source directory.
    pub relative: PathBuf,
    /// Absolute path on disk.
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Walks a docs source directory.
///
/// Hidden entries (leading `.`) are skipped, as is the `exclude` directory so
/// that an output directory nested in the sources is never read back in.
pub(crate) struct Scanner<'a> {
    source_dir: &'a Path,
    exclude: Option<&'a Path>,
}

impl<'a> Scanner<'a> {
    pub fn new(source_dir: &'a Path) -> Self {
        Self {
            source_dir,
            exclude: None,
        }
    }

    #[must_use]
    pub fn excluding(mut self, dir: &'a Path) -> Self {
        self.exclude = Some(dir);
        self
    }

    /// Scan and return files sorted by relative path.
    ///
    /// The excluded directory is matched on its canonical form, so any
    /// spelling of the same directory (relative, `..`, symlinked) is skipped.
    pub fn scan(&self) -> std::io::Result<Vec<SourceFile>> {
        let exclude = self.exclude.and_then(|ex| fs::canonicalize(ex).ok());
        let mut files = Vec::new();
        self.scan_directory(self.source_dir, exclude.as_deref(), &mut files)?;
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(files)
    }

    fn scan_directory(
        &self,
        dir: &Path,
        exclude: Option<&Path>,
        files: &mut Vec<SourceFile>,
    ) -> std::io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if entry.file_type()?.is_dir() {
                if exclude.is_some_and(|ex| is_same_dir(&path, ex)) {
                    continue;
                }
                self.scan_directory(&path, exclude, files)?;
                continue;
            }

            let kind = if is_page(&path) {
                FileKind::Page
            } else {
                FileKind::Asset
            };
            let relative = path
                .strip_prefix(self.source_dir)
                .unwrap_or(&path)
                .to_path_buf();
            files.push(SourceFile {
                relative,
                path,
                kind,
            });
        }
        Ok(())
    }
}

fn is_same_dir(path: &Path, canonical: &Path) -> bool {
    fs::canonicalize(path).is_ok_and(|p| p == canonical)
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("mdx"))
}
