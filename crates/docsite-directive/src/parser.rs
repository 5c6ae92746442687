//! Leaf directive line parsing.

use super::DirectiveArgs;

/// A leaf directive occupying a whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLeaf<'a> {
    /// Leading whitespace of the line, reapplied to the expansion.
    pub indent: &'a str,
    pub name: &'a str,
    pub args: DirectiveArgs,
}

/// Parse a line as `::name[content]{attrs}`.
///
/// Returns `None` unless the line (ignoring surrounding whitespace) is exactly
/// one leaf directive. Three or more colons are container syntax, not a leaf.
pub(crate) fn parse_leaf_line(line: &str) -> Option<ParsedLeaf<'_>> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let body = body.trim_end();

    let after_colons = body.strip_prefix("::")?;
    if after_colons.starts_with(':') {
        return None;
    }

    let name_end = after_colons
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colons.len());
    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let rest = &after_colons[name_end..];
    let (content, rest) = take_delimited(rest, '[', ']').unwrap_or(("", rest));
    let (attrs, rest) = take_delimited(rest, '{', '}').unwrap_or(("", rest));
    if !rest.is_empty() {
        return None;
    }

    Some(ParsedLeaf {
        indent,
        name,
        args: DirectiveArgs::parse(content, attrs),
    })
}

/// Valid names contain only alphanumeric characters, hyphens, and underscores.
fn is_valid_directive_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Split `open ... close` (with nesting) off the front of `s`.
///
/// Returns the inner text and the remainder, or `None` if `s` does not start
/// with `open` or the group is unclosed.
fn take_delimited(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    if !s.starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some((&s[1..i], &s[i + 1..]));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_with_content_and_attrs() {
        let leaf = parse_leaf_line("::dependency[chatops4s-slack]{tool=mill}").unwrap();
        assert_eq!(leaf.name, "dependency");
        assert_eq!(leaf.indent, "");
        assert_eq!(leaf.args.content, "chatops4s-slack");
        assert_eq!(leaf.args.get("tool"), Some("mill"));
    }

    #[test]
    fn test_leaf_name_only() {
        let leaf = parse_leaf_line("::toc").unwrap();
        assert_eq!(leaf.name, "toc");
        assert_eq!(leaf.args, DirectiveArgs::default());
    }

    #[test]
    fn test_indent_and_trailing_whitespace() {
        let leaf = parse_leaf_line("   ::dependency[chatops4s-core]  ").unwrap();
        assert_eq!(leaf.indent, "   ");
        assert_eq!(leaf.args.content, "chatops4s-core");
    }

    #[test]
    fn test_nested_brackets() {
        let leaf = parse_leaf_line("::note[a [b] c]").unwrap();
        assert_eq!(leaf.args.content, "a [b] c");
    }

    #[test]
    fn test_not_leaf() {
        assert!(parse_leaf_line("plain text").is_none());
        assert!(parse_leaf_line("").is_none());
        assert!(parse_leaf_line(":inline[x]").is_none());
        assert!(parse_leaf_line(":::note").is_none());
        assert!(parse_leaf_line("::").is_none());
        assert!(parse_leaf_line("::bad@name").is_none());
        assert!(parse_leaf_line("text ::dependency[x]").is_none());
    }

    #[test]
    fn test_trailing_text_is_not_leaf() {
        assert!(parse_leaf_line("::dependency[x] and more").is_none());
        assert!(parse_leaf_line("::dependency[unclosed").is_none());
    }

    #[test]
    fn test_take_delimited() {
        assert_eq!(take_delimited("[a]rest", '[', ']'), Some(("a", "rest")));
        assert_eq!(take_delimited("{x{y}}", '{', '}'), Some(("x{y}", "")));
        assert_eq!(take_delimited("nope", '[', ']'), None);
        assert_eq!(take_delimited("[open", '[', ']'), None);
    }
}
