use std::sync::LazyLock;

use regex::Regex;

static THEMATIC_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:(?:\*[ \t]*){3,}|(?:-[ \t]*){3,}|(?:_[ \t]*){3,})$")
        .expect("valid thematic break regex")
});

/// Horizontal rule: three or more of the same `*`, `-` or `_`, optionally
/// separated by spaces (`***`, `- - -`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    /// Splits a rule into `(prefix, remainder)`; the whole line is prefix.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        THEMATIC_BREAK_RE
            .is_match(text)
            .then(|| text.split_at(text.len()))
    }
}
