use std::sync::LazyLock;

use regex::Regex;

use super::split_at_prefix;

static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix> {0,3}>[ \t]*)").expect("valid blockquote regex")
});

/// Blockquote marker (`>`), one nesting level per match.
///
/// All blockquote syntax knowledge lives here; callers that need the depth
/// of a line go through [`BlockQuote::strip_prefixes`] rather than counting
/// `>` characters themselves.
pub struct BlockQuote;

impl BlockQuote {
    /// Splits off a single blockquote marker and the whitespace after it.
    pub fn split(text: &str) -> Option<(&str, &str)> {
        split_at_prefix(&BLOCKQUOTE_RE, text)
    }

    /// Strips all blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let mut depth = 0u8;
        let mut offset = 0usize;
        while let Some((prefix, _)) = Self::split(&s[offset..]) {
            depth = depth.saturating_add(1);
            offset += prefix.len();
        }
        (depth, offset)
    }

    /// Strips exactly `depth` prefixes, returning the byte offset after them.
    ///
    /// Returns `None` when the line carries fewer markers, i.e. it has left
    /// the quote container at that depth.
    pub fn strip_depth(s: &str, depth: u8) -> Option<usize> {
        let mut offset = 0usize;
        for _ in 0..depth {
            let (prefix, _) = Self::split(&s[offset..])?;
            offset += prefix.len();
        }
        Some(offset)
    }
}
