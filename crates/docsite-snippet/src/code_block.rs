//! Code block hand-off to the site renderer.

/// Literal text plus the language tag used for highlighting.
///
/// The site renderer owns highlighting; this type only produces the fenced
/// markdown block it consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: &'static str,
    code: String,
}

impl CodeBlock {
    /// Create a code block.
    #[must_use]
    pub fn new(language: &'static str, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
        }
    }

    /// Language tag, e.g. `scala`.
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Block contents, unmodified.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Render as a fenced markdown block without a trailing newline.
    ///
    /// The fence is one backtick longer than the longest backtick run in the
    /// code, and never shorter than three.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let fence = "`".repeat(longest_backtick_run(&self.code).max(2) + 1);
        format!("{fence}{}\n{}\n{fence}", self.language, self.code)
    }
}

fn longest_backtick_run(s: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in s.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_markdown() {
        let block = CodeBlock::new("scala", r#""org.business4s" %% "chatops4s-slack" % "1.2.3""#);
        assert_eq!(
            block.to_markdown(),
            "```scala\n\"org.business4s\" %% \"chatops4s-slack\" % \"1.2.3\"\n```"
        );
    }

    #[test]
    fn test_fence_grows_past_backticks_in_code() {
        let block = CodeBlock::new("scala", "val s = ````");
        assert_eq!(block.to_markdown(), "`````scala\nval s = ````\n`````");
    }

    #[test]
    fn test_accessors() {
        let block = CodeBlock::new("scala", "x");
        assert_eq!(block.language(), "scala");
        assert_eq!(block.code(), "x");
    }
}
