//! Dependency snippet directives.
//!
//! - `::dependency[chatops4s-slack]{tool=mill}`: one declaration, `tool`
//!   defaults to `sbt`
//! - `::dependencies[chatops4s-core chatops4s-slack]`: an sbt
//!   `libraryDependencies ++= Seq(...)` block; `tool` may only be `sbt`
//!
//! Both expand to a fenced code block carrying the build's release version.
//! An unknown module or tool fails the page.

use docsite_snippet::{BuildTool, CodeBlock, ModuleId, ModuleRef, SnippetError, render_sbt_seq};

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput, HandlerError, LeafDirective};

const SINGLE_ATTRS: &[&str] = &["tool"];

/// Handler for `::dependency[module]{tool=...}`.
#[derive(Debug, Default)]
pub struct DependencyDirective {
    warnings: Vec<String>,
}

impl DependencyDirective {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeafDirective for DependencyDirective {
    fn name(&self) -> &'static str {
        "dependency"
    }

    fn process(
        &mut self,
        args: DirectiveArgs,
        ctx: &DirectiveContext,
    ) -> Result<DirectiveOutput, HandlerError> {
        let module_id = args.content.trim();
        if module_id.is_empty() {
            return Err("missing module, expected ::dependency[<module>]".into());
        }
        warn_unknown_attrs(&mut self.warnings, &args, SINGLE_ATTRS, ctx);

        let reference = ModuleRef::parse(module_id, args.get("tool"))?;
        let block = reference.code_block(ctx.version());
        Ok(DirectiveOutput::markdown(block.to_markdown()))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Handler for `::dependencies[module module ...]`.
#[derive(Debug, Default)]
pub struct DependenciesDirective {
    warnings: Vec<String>,
}

impl DependenciesDirective {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeafDirective for DependenciesDirective {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn process(
        &mut self,
        args: DirectiveArgs,
        ctx: &DirectiveContext,
    ) -> Result<DirectiveOutput, HandlerError> {
        warn_unknown_attrs(&mut self.warnings, &args, SINGLE_ATTRS, ctx);
        if let Some(tool) = args.get("tool") {
            let tool: BuildTool = tool.parse()?;
            if tool != BuildTool::Sbt {
                return Err(format!(
                    "tool={} is not supported, ::dependencies only renders an sbt Seq block",
                    tool.as_str()
                )
                .into());
            }
        }

        let modules = args
            .content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse::<ModuleId>)
            .collect::<Result<Vec<_>, SnippetError>>()?;

        let code = render_sbt_seq(&modules, ctx.version())?;
        let block = CodeBlock::new("scala", code);
        Ok(DirectiveOutput::markdown(block.to_markdown()))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn warn_unknown_attrs(
    warnings: &mut Vec<String>,
    args: &DirectiveArgs,
    known: &[&str],
    ctx: &DirectiveContext,
) {
    for key in args.unknown_keys(known) {
        warnings.push(format!("{}: ignoring unknown attribute '{key}'", ctx.location()));
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use docsite_config::{SiteConfig, SiteVersion};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::DirectiveProcessor;

    fn site(version: &str) -> SiteConfig {
        SiteConfig::with_version(SiteVersion::new(version).unwrap(), Path::new("."))
    }

    fn processor(site: &SiteConfig) -> DirectiveProcessor<'_> {
        DirectiveProcessor::new(site)
            .with_source_path("docs/getting-started.md")
            .with_leaf(DependencyDirective::new())
            .with_leaf(DependenciesDirective::new())
    }

    #[test]
    fn test_sbt_dependency() {
        let site = site("1.2.3");
        let output = processor(&site)
            .process("Add:\n\n::dependency[chatops4s-slack]\n")
            .unwrap();

        assert_eq!(
            output,
            "Add:\n\n```scala\n\"org.business4s\" %% \"chatops4s-slack\" % \"1.2.3\"\n```\n"
        );
    }

    #[test]
    fn test_version_follows_config() {
        let input = "::dependency[chatops4s-slack]";
        let a = processor(&site("1.2.3")).process(input).unwrap();
        let b = processor(&site("1.2.4")).process(input).unwrap();
        assert_eq!(a.replace("1.2.3", "1.2.4"), b);
    }

    #[test]
    fn test_tool_attribute() {
        let site = site("0.5.0");
        let output = processor(&site)
            .process("::dependency[chatops4s-core]{tool=scala-cli}")
            .unwrap();
        assert_eq!(
            output,
            "```scala\n//> using dep org.business4s::chatops4s-core:0.5.0\n```"
        );
    }

    #[test]
    fn test_dependencies_block() {
        let site = site("1.0.0");
        let output = processor(&site)
            .process("::dependencies[chatops4s-core, chatops4s-slack]")
            .unwrap();
        assert_eq!(
            output,
            "```scala\nlibraryDependencies ++= Seq(\n    \
             \"org.business4s\" %% \"chatops4s-core\" % \"1.0.0\", // Core functionality\n    \
             \"org.business4s\" %% \"chatops4s-slack\" % \"1.0.0\", // Slack integration\n\
             )\n```"
        );
    }

    #[test]
    fn test_unknown_module_fails() {
        let site = site("1.0.0");
        let err = processor(&site)
            .process("intro\n::dependency[chatops4s-teams]\n")
            .unwrap_err();

        assert_eq!(err.line, 2);
        let msg = err.to_string();
        assert!(msg.contains("docs/getting-started.md:2"), "{msg}");
        assert!(msg.contains("chatops4s-teams"), "{msg}");
    }

    #[test]
    fn test_unknown_tool_fails() {
        let site = site("1.0.0");
        let err = processor(&site)
            .process("::dependency[chatops4s-core]{tool=gradle}")
            .unwrap_err();
        assert!(err.to_string().contains("gradle"));
    }

    #[test]
    fn test_missing_module_fails() {
        let site = site("1.0.0");
        assert!(processor(&site).process("::dependency").is_err());
        assert!(processor(&site).process("::dependencies[]").is_err());
    }

    #[test]
    fn test_unknown_module_in_list_fails() {
        let site = site("1.0.0");
        let err = processor(&site)
            .process("::dependencies[chatops4s-core nope]")
            .unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_unknown_attribute_warns() {
        let site = site("1.0.0");
        let mut processor = processor(&site);
        processor
            .process("::dependency[chatops4s-core]{tool=sbt lang=en}")
            .unwrap();

        let warnings = processor.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("lang"));
    }

    #[test]
    fn test_dependencies_rejects_non_sbt_tool() {
        let site = site("1.0.0");
        let err = processor(&site)
            .process("::dependencies[chatops4s-core chatops4s-slack]{tool=mill}")
            .unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().contains("tool=mill"), "{err}");
    }

    #[test]
    fn test_dependencies_accepts_explicit_sbt_tool() {
        let site = site("1.0.0");
        let mut processor = processor(&site);
        let explicit = processor
            .process("::dependencies[chatops4s-core]{tool=sbt}")
            .unwrap();
        let implicit = processor.process("::dependencies[chatops4s-core]").unwrap();

        assert_eq!(explicit, implicit);
        assert!(processor.warnings().is_empty());
    }
}
