//! Block kinds recognised by the line classifier.
//!
//! Each kind owns the syntax knowledge for its own delimiter (the regex or
//! scanner that finds its prefix), so the classifier only decides precedence.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceMarker, OpenFence};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;

use regex::Regex;

/// Splits `text` at the end of the `prefix` capture group of `re`.
///
/// Splitting the original slice (rather than re-joining captures) keeps the
/// `prefix + remainder == text` invariant structural.
pub(crate) fn split_at_prefix<'a>(re: &Regex, text: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = re.captures(text)?;
    let prefix = caps.name("prefix")?;
    Some(text.split_at(prefix.end()))
}
