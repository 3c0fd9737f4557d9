use std::sync::LazyLock;

use regex::Regex;

use super::split_at_prefix;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix> {0,3}(?P<run>`{3,}|~{3,}))").expect("valid fence regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// The delimiter run of a fence line, e.g. ```` ``` ```` or `~~~~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMarker {
    pub kind: FenceKind,
    /// Length of the backtick/tilde run (at least 3).
    pub len: usize,
}

/// A fence that has been opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFence {
    pub marker: FenceMarker,
    /// Blockquote depth the opening fence sat at. Lines with fewer `>`
    /// markers have left the container and end the fence implicitly.
    pub quote_depth: u8,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Splits a fence line into `(prefix, info string, marker)`.
    pub fn split(text: &str) -> Option<(&str, &str, FenceMarker)> {
        let caps = FENCE_RE.captures(text)?;
        let run = caps.name("run")?.as_str();
        let kind = if run.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else {
            FenceKind::Tildes
        };
        let (prefix, remainder) = split_at_prefix(&FENCE_RE, text)?;
        Some((
            prefix,
            remainder,
            FenceMarker {
                kind,
                len: run.len(),
            },
        ))
    }

    /// Whether `text` (with container prefixes already stripped) closes `open`.
    ///
    /// A closing fence uses the same character, is at least as long as the
    /// opener and carries nothing but whitespace after the run.
    pub fn closes(open: &OpenFence, text: &str) -> bool {
        match Self::split(text) {
            Some((_, trailing, marker)) => {
                marker.kind == open.marker.kind
                    && marker.len >= open.marker.len
                    && trailing.trim().is_empty()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(kind: FenceKind, len: usize) -> OpenFence {
        OpenFence {
            marker: FenceMarker { kind, len },
            quote_depth: 0,
        }
    }

    #[test]
    fn detect_backtick_fence() {
        let (prefix, info, marker) = CodeFence::split("```rust").unwrap();
        assert_eq!((prefix, info), ("```", "rust"));
        assert_eq!(marker.kind, FenceKind::Backticks);
        assert_eq!(marker.len, 3);
    }

    #[test]
    fn detect_tilde_fence() {
        let (_, _, marker) = CodeFence::split("~~~~").unwrap();
        assert_eq!(marker.kind, FenceKind::Tildes);
        assert_eq!(marker.len, 4);
    }

    #[test]
    fn indented_fence_keeps_indent_in_prefix() {
        let (prefix, info, _) = CodeFence::split("  ```").unwrap();
        assert_eq!((prefix, info), ("  ```", ""));
    }

    #[test]
    fn no_fence() {
        assert!(CodeFence::split("hello").is_none());
        assert!(CodeFence::split("``inline``").is_none());
    }

    #[test]
    fn closes_matching_fence() {
        assert!(CodeFence::closes(&open(FenceKind::Backticks, 3), "```"));
        assert!(CodeFence::closes(&open(FenceKind::Tildes, 3), "~~~~  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        assert!(!CodeFence::closes(&open(FenceKind::Backticks, 3), "~~~"));
        assert!(!CodeFence::closes(&open(FenceKind::Tildes, 3), "```"));
    }

    #[test]
    fn shorter_run_does_not_close() {
        assert!(!CodeFence::closes(&open(FenceKind::Backticks, 4), "```"));
    }

    #[test]
    fn info_string_does_not_close() {
        assert!(!CodeFence::closes(&open(FenceKind::Backticks, 3), "```rust"));
    }
}
