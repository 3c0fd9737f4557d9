use std::sync::LazyLock;

use regex::Regex;

use super::{ThematicBreak, split_at_prefix};

static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix> {0,3}(?:[*+-]|\d+\.)[ \t]+(?:\[.\][ \t]+)?)")
        .expect("valid list item regex")
});

/// Bullet (`-`, `*`, `+`) or ordered (`1.`) list item, with an optional
/// task checkbox (`- [ ] `, `- [x] `).
pub struct ListItem;

impl ListItem {
    /// Splits a list item into `(prefix, remainder)`.
    ///
    /// The prefix runs through the marker, the whitespace after it and, when
    /// present, the checkbox and its trailing whitespace. Only the remainder
    /// is ever wrapped. A rule such as `* * *` is not a list item.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        if ThematicBreak::split(text).is_some() {
            return None;
        }
        split_at_prefix(&LIST_ITEM_RE, text)
    }
}
