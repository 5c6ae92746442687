//! Snippet rendering.

use std::fmt::Write;

use docsite_config::SiteVersion;

use crate::{BuildTool, CodeBlock, ModuleId, SnippetError};

/// Indentation of entries inside `libraryDependencies ++= Seq(...)`.
const SEQ_INDENT: &str = "    ";

/// Render a single dependency declaration.
///
/// The artifact id and version are embedded verbatim.
#[must_use]
pub fn render(module: ModuleId, tool: BuildTool, version: &SiteVersion) -> String {
    let group = module.group_id();
    let artifact = module.as_str();
    let version = version.as_str();
    match tool {
        BuildTool::Sbt => format!(r#""{group}" %% "{artifact}" % "{version}""#),
        BuildTool::Mill => format!(r#"ivy"{group}::{artifact}:{version}""#),
        BuildTool::ScalaCli => format!("//> using dep {group}::{artifact}:{version}"),
    }
}

/// Render a declaration for a module given by its artifact id.
///
/// # Errors
///
/// Returns [`SnippetError::UnknownModule`] if `module_id` is not published.
pub fn render_named(
    module_id: &str,
    tool: BuildTool,
    version: &SiteVersion,
) -> Result<String, SnippetError> {
    let module: ModuleId = module_id.parse()?;
    Ok(render(module, tool, version))
}

/// Render an sbt `libraryDependencies ++= Seq(...)` block.
///
/// One line per module, each followed by its description as a comment.
///
/// # Errors
///
/// Returns [`SnippetError::NoModules`] if `modules` is empty.
pub fn render_sbt_seq(modules: &[ModuleId], version: &SiteVersion) -> Result<String, SnippetError> {
    if modules.is_empty() {
        return Err(SnippetError::NoModules);
    }

    let mut out = String::from("libraryDependencies ++= Seq(\n");
    for module in modules {
        let line = render(*module, BuildTool::Sbt, version);
        // Writing to a String cannot fail
        let _ = writeln!(out, "{SEQ_INDENT}{line}, // {}", module.description());
    }
    out.push(')');
    Ok(out)
}

/// A snippet call site: which module, in which flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRef {
    /// Artifact to reference.
    pub module: ModuleId,
    /// Declaration flavor.
    pub tool: BuildTool,
}

impl ModuleRef {
    /// Create a reference.
    #[must_use]
    pub fn new(module: ModuleId, tool: BuildTool) -> Self {
        Self { module, tool }
    }

    /// Parse a reference from an artifact id and optional tool name.
    ///
    /// The tool defaults to [`BuildTool::Sbt`].
    ///
    /// # Errors
    ///
    /// Returns an error if the module id or tool name is unknown.
    pub fn parse(module_id: &str, tool: Option<&str>) -> Result<Self, SnippetError> {
        let module = module_id.parse()?;
        let tool = tool.map(str::parse::<BuildTool>).transpose()?.unwrap_or_default();
        Ok(Self { module, tool })
    }

    /// Render the declaration text.
    #[must_use]
    pub fn render(&self, version: &SiteVersion) -> String {
        render(self.module, self.tool, version)
    }

    /// Render as a code block for the site renderer.
    #[must_use]
    pub fn code_block(&self, version: &SiteVersion) -> CodeBlock {
        CodeBlock::new(self.tool.language(), self.render(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn version(v: &str) -> SiteVersion {
        SiteVersion::new(v).unwrap()
    }

    #[test]
    fn test_sbt_slack() {
        assert_eq!(
            render(ModuleId::Slack, BuildTool::Sbt, &version("1.2.3")),
            r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#
        );
    }

    #[test]
    fn test_version_is_the_only_variable() {
        let a = render(ModuleId::Slack, BuildTool::Sbt, &version("1.2.3"));
        let b = render(ModuleId::Slack, BuildTool::Sbt, &version("1.2.4"));
        assert_eq!(a.replace("1.2.3", "1.2.4"), b);
        assert_eq!(b, r#""org.business4s" %% "chatops4s-slack" % "1.2.4""#);
    }

    #[test]
    fn test_mill() {
        assert_eq!(
            render(ModuleId::Core, BuildTool::Mill, &version("0.3.0")),
            r#"ivy"org.business4s::chatops4s-core:0.3.0""#
        );
    }

    #[test]
    fn test_scala_cli() {
        assert_eq!(
            render(ModuleId::Slack, BuildTool::ScalaCli, &version("0.3.0")),
            "//> using dep org.business4s::chatops4s-slack:0.3.0"
        );
    }

    #[test]
    fn test_every_pair_embeds_version_and_module_once() {
        let versions = ["1.2.3", "0.1.0-RC2", "2.0.0+meta", "20240101-abcdef"];
        for module in ModuleId::ALL {
            for tool in BuildTool::ALL {
                for v in versions {
                    let out = render(module, tool, &version(v));
                    assert_eq!(out.matches(v).count(), 1, "{out}");
                    assert_eq!(out.matches(module.as_str()).count(), 1, "{out}");
                    assert!(!out.contains('\n'), "{out}");
                }
            }
        }
    }

    #[test]
    fn test_sbt_output_is_balanced() {
        for module in ModuleId::ALL {
            let out = render(module, BuildTool::Sbt, &version("1.0.0"));
            assert_eq!(out.matches('"').count(), 6);
            assert_eq!(out.matches("%%").count(), 1);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let v = version("9.9.9");
        for module in ModuleId::ALL {
            for tool in BuildTool::ALL {
                assert_eq!(render(module, tool, &v), render(module, tool, &v));
            }
        }
    }

    #[test]
    fn test_version_not_normalized() {
        assert_eq!(
            render(ModuleId::Slack, BuildTool::Sbt, &version("v1.2")),
            r#""org.business4s" %% "chatops4s-slack" % "v1.2""#
        );
    }

    #[test]
    fn test_render_named() {
        assert_eq!(
            render_named("chatops4s-slack", BuildTool::Sbt, &version("1.2.3")).unwrap(),
            r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#
        );
    }

    #[test]
    fn test_render_named_unknown_module_fails() {
        let err = render_named("chatops4s-teams", BuildTool::Sbt, &version("1.2.3")).unwrap_err();
        assert!(matches!(err, SnippetError::UnknownModule { .. }));
    }

    #[test]
    fn test_sbt_seq() {
        let out = render_sbt_seq(&[ModuleId::Core, ModuleId::Slack], &version("1.2.3")).unwrap();
        assert_eq!(
            out,
            "libraryDependencies ++= Seq(\n    \
             \"org.business4s\" %% \"chatops4s-core\" % \"1.2.3\", // Core functionality\n    \
             \"org.business4s\" %% \"chatops4s-slack\" % \"1.2.3\", // Slack integration\n\
             )"
        );
    }

    #[test]
    fn test_sbt_seq_empty_fails() {
        assert_eq!(
            render_sbt_seq(&[], &version("1.2.3")),
            Err(SnippetError::NoModules)
        );
    }

    #[test]
    fn test_module_ref_parse_defaults_to_sbt() {
        let r = ModuleRef::parse("chatops4s-slack", None).unwrap();
        assert_eq!(r, ModuleRef::new(ModuleId::Slack, BuildTool::Sbt));
    }

    #[test]
    fn test_module_ref_parse_with_tool() {
        let r = ModuleRef::parse("chatops4s-core", Some("mill")).unwrap();
        assert_eq!(r.tool, BuildTool::Mill);
    }

    #[test]
    fn test_module_ref_parse_errors() {
        assert!(matches!(
            ModuleRef::parse("nope", None),
            Err(SnippetError::UnknownModule { .. })
        ));
        assert!(matches!(
            ModuleRef::parse("chatops4s-core", Some("maven")),
            Err(SnippetError::UnknownBuildTool { .. })
        ));
    }

    #[test]
    fn test_module_ref_code_block() {
        let block = ModuleRef::new(ModuleId::Slack, BuildTool::Sbt).code_block(&version("1.2.3"));
        assert_eq!(block.language(), "scala");
        assert_eq!(
            block.code(),
            r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#
        );
    }
}
