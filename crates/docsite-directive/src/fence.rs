//! Code fence tracking.
//!
//! Directive syntax inside fenced code blocks is documentation about
//! directives, not a directive, so it must be left alone.

/// Tracks whether the current line is inside a fenced code block.
///
/// Fences open with three or more backticks or tildes. A closing fence uses
/// the same character, is at least as long, and carries nothing but
/// trailing whitespace.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some((ch, len)) = fence_marker(trimmed) else {
            return false;
        };

        match self.open {
            Some((open_ch, open_len)) => {
                let closes = ch == open_ch && len >= open_len && trimmed[len..].trim().is_empty();
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some((ch, len));
                true
            }
        }
    }
}

/// Fence character and run length at the start of a line.
fn fence_marker(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|&c| c == first).count();
    (len >= 3).then_some((first, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence() {
        let mut fence = FenceTracker::default();
        assert!(fence.update("```scala"));
        assert!(fence.in_fence());
        assert!(!fence.update("::dependency[x]"));
        assert!(fence.in_fence());
        assert!(fence.update("```"));
        assert!(!fence.in_fence());
    }

    #[test]
    fn test_shorter_or_different_close_ignored() {
        let mut fence = FenceTracker::default();
        fence.update("````");
        fence.update("```");
        assert!(fence.in_fence());
        fence.update("~~~~");
        assert!(fence.in_fence());
        fence.update("`````");
        assert!(!fence.in_fence());
    }

    #[test]
    fn test_close_with_info_string_ignored() {
        let mut fence = FenceTracker::default();
        fence.update("~~~");
        fence.update("~~~ text");
        assert!(fence.in_fence());
        fence.update("  ~~~  ");
        assert!(!fence.in_fence());
    }

    #[test]
    fn test_two_backticks_not_a_fence() {
        let mut fence = FenceTracker::default();
        assert!(!fence.update("``inline``"));
        assert!(!fence.in_fence());
    }
}
