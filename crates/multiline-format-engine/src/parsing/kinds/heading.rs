use std::sync::LazyLock;

use regex::Regex;

use super::split_at_prefix;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix> {0,3}(?P<marker>#{1,6})[ \t]+)").expect("valid heading regex")
});

/// ATX heading (`# Title` through `###### Title`).
pub struct Heading;

impl Heading {
    /// Splits a heading line into `(prefix, remainder, level)`.
    ///
    /// The prefix covers optional indentation, the `#` run and the whitespace
    /// that must follow it. A `#` run with no following whitespace (`#tag`)
    /// is not a heading.
    pub fn split(text: &str) -> Option<(&str, &str, u8)> {
        let caps = HEADING_RE.captures(text)?;
        let level = caps.name("marker")?.len() as u8;
        let (prefix, remainder) = split_at_prefix(&HEADING_RE, text)?;
        Some((prefix, remainder, level))
    }
}
