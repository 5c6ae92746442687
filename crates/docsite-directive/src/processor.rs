//! Directive processor.

use std::path::{Path, PathBuf};

use docsite_config::SiteConfig;

use super::fence::FenceTracker;
use super::parser::parse_leaf_line;
use super::{DirectiveContext, DirectiveError, DirectiveOutput, LeafDirective};

/// Expands leaf directives in one markdown page.
///
/// Create one processor per page. Handlers are tried in registration order;
/// the first whose name matches handles the directive.
pub struct DirectiveProcessor<'a> {
    site: &'a SiteConfig,
    source_path: Option<PathBuf>,
    leaf_handlers: Vec<Box<dyn LeafDirective>>,
    fence: FenceTracker,
    expanded: usize,
}

impl<'a> DirectiveProcessor<'a> {
    /// Create a processor with no handlers.
    #[must_use]
    pub fn new(site: &'a SiteConfig) -> Self {
        Self {
            site,
            source_path: None,
            leaf_handlers: Vec::new(),
            fence: FenceTracker::default(),
            expanded: 0,
        }
    }

    /// Set the page path used in error messages.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Register a leaf directive handler.
    #[must_use]
    pub fn with_leaf<D: LeafDirective + 'static>(mut self, handler: D) -> Self {
        self.leaf_handlers.push(Box::new(handler));
        self
    }

    /// Expand every handled directive in `input`.
    ///
    /// Line endings are preserved. Expansions are indented like the directive
    /// line so that directives inside list items stay inside them.
    ///
    /// # Errors
    ///
    /// Returns the first handler error, with its source location.
    pub fn process(&mut self, input: &str) -> Result<String, DirectiveError> {
        let mut output = String::with_capacity(input.len());

        for (idx, raw) in input.split_inclusive('\n').enumerate() {
            let (line, ending) = split_line_ending(raw);
            let processed = self.process_line(line, idx + 1)?;
            output.push_str(&processed);
            output.push_str(ending);
        }

        Ok(output)
    }

    /// Number of directives expanded so far.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Warnings from all handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.leaf_handlers
            .iter()
            .flat_map(|h| h.warnings().iter().cloned())
            .collect()
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<String, DirectiveError> {
        self.fence.update(line);
        if self.fence.in_fence() {
            return Ok(line.to_owned());
        }

        let Some(leaf) = parse_leaf_line(line) else {
            return Ok(line.to_owned());
        };
        let Some(handler) = self
            .leaf_handlers
            .iter_mut()
            .find(|h| h.name() == leaf.name)
        else {
            return Ok(line.to_owned());
        };

        let ctx = DirectiveContext {
            source_path: self.source_path.as_deref(),
            line: line_num,
            site: self.site,
        };

        match handler.process(leaf.args, &ctx) {
            Ok(DirectiveOutput::Markdown(md)) => {
                self.expanded += 1;
                Ok(indent_lines(&md, leaf.indent))
            }
            Ok(DirectiveOutput::Skip) => Ok(line.to_owned()),
            Err(source) => Err(DirectiveError {
                location: ctx.location(),
                path: self.source_path.clone(),
                line: line_num,
                directive: leaf.name.to_owned(),
                source,
            }),
        }
    }

    /// Page path, if set.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

/// Split a trailing `\n` or `\r\n` off a line.
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Prefix every non-empty line of `text` with `indent`.
fn indent_lines(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_owned();
    }
    text.lines()
        .map(|l| {
            if l.is_empty() {
                String::new()
            } else {
                format!("{indent}{l}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
