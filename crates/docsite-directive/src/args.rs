//! Directive argument parsing.
//!
//! Parses the `[content]{#id .class key="value"}` part of a directive.

use std::collections::HashMap;

/// Parsed arguments from directive syntax.
///
/// # Example
///
/// ```
/// use docsite_directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("chatops4s-slack", r#"#slack .wide tool="mill""#);
/// assert_eq!(args.content, "chatops4s-slack");
/// assert_eq!(args.id.as_deref(), Some("slack"));
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("tool"), Some("mill"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Content from brackets (empty string if not provided).
    pub content: String,
    /// ID from attributes: `{#id}`.
    pub id: Option<String>,
    /// Classes from attributes: `{.class1 .class2}`.
    pub classes: Vec<String>,
    /// Key-value attributes: `{key="value"}`.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse bracket content and the attribute string (without braces).
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Self::default()
        };

        let mut rest = attrs_str.trim_start();
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('#') {
                let (name, tail) = split_selector(after);
                args.id = Some(name.to_owned());
                rest = tail;
            } else if let Some(after) = rest.strip_prefix('.') {
                let (name, tail) = split_selector(after);
                args.classes.push(name.to_owned());
                rest = tail;
            } else if let Some((key, value, tail)) = parse_key_value(rest) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                rest = tail;
            } else {
                // Skip one unrecognized character
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
            rest = rest.trim_start();
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Attribute keys not in `known`, sorted.
    #[must_use]
    pub fn unknown_keys(&self, known: &[&str]) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .attrs
            .keys()
            .map(String::as_str)
            .filter(|k| !known.contains(k))
            .collect();
        keys.sort_unstable();
        keys
    }
}

/// Split an `#id` or `.class` name from what follows it.
fn split_selector(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Parse `key="value"`, `key='value'` or `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq = s.find('=')?;
    let key = s[..eq].trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after = &s[eq + 1..];
    for quote in ['"', '\''] {
        if let Some(quoted) = after.strip_prefix(quote) {
            let close = quoted.find(quote)?;
            return Some((key, &quoted[..close], &quoted[close + 1..]));
        }
    }

    let end = after.find(char::is_whitespace).unwrap_or(after.len());
    Some((key, &after[..end], &after[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let args = DirectiveArgs::parse("", "");
        assert_eq!(args, DirectiveArgs::default());
    }

    #[test]
    fn test_content_only() {
        let args = DirectiveArgs::parse("chatops4s-core chatops4s-slack", "");
        assert_eq!(args.content, "chatops4s-core chatops4s-slack");
        assert!(args.attrs.is_empty());
    }

    #[test]
    fn test_quoted_and_unquoted_values() {
        let args = DirectiveArgs::parse("", r#"tool="scala-cli" title='Add it' width=2"#);
        assert_eq!(args.get("tool"), Some("scala-cli"));
        assert_eq!(args.get("title"), Some("Add it"));
        assert_eq!(args.get("width"), Some("2"));
    }

    #[test]
    fn test_compact_selectors() {
        let args = DirectiveArgs::parse("", "#deps.a.b");
        assert_eq!(args.id.as_deref(), Some("deps"));
        assert_eq!(args.classes, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_quoted_value() {
        let args = DirectiveArgs::parse("", r#"tool="""#);
        assert_eq!(args.get("tool"), Some(""));
    }

    #[test]
    fn test_unclosed_quote_skipped() {
        let args = DirectiveArgs::parse("", r#"tool="sbt"#);
        assert_eq!(args.get("tool"), None);
    }

    #[test]
    fn test_unknown_keys() {
        let args = DirectiveArgs::parse("", "tool=sbt lang=en color=red");
        assert_eq!(args.unknown_keys(&["tool"]), vec!["color", "lang"]);
        assert!(args.unknown_keys(&["tool", "lang", "color"]).is_empty());
    }
}
