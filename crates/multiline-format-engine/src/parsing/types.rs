use super::kinds::FenceMarker;

/// Structural role of a line (or of a line's remainder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Plain text, or a blank line when the remainder is empty.
    Paragraph,
    /// ATX heading with its level (1-6).
    Heading { level: u8 },
    /// Horizontal rule (`***`, `- - -`).
    ThematicBreak,
    /// Bullet, ordered or task list item.
    ListItem,
    /// One level of blockquote.
    BlockQuote,
    /// Opening or closing code fence.
    Fence(FenceMarker),
    /// Line indented by a tab or four spaces.
    IndentedCode,
}

/// Classification of a single line containing only local facts.
///
/// `prefix` and `remainder` borrow from the classified text and always
/// concatenate back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub kind: LineKind,
    /// Structural markup at the start of the line; never wrapped.
    pub prefix: &'a str,
    /// Everything after the prefix, subject to further classification.
    pub remainder: &'a str,
}

impl<'a> LineClass<'a> {
    pub fn new(kind: LineKind, prefix: &'a str, remainder: &'a str) -> Self {
        Self {
            kind,
            prefix,
            remainder,
        }
    }

    /// Whether this is a blank line (paragraph with nothing after the whitespace).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Paragraph && self.remainder.is_empty()
    }
}
