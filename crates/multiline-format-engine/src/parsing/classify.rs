use super::{
    kinds::{BlockQuote, CodeFence, Heading, IndentedCode, ListItem, Paragraph, ThematicBreak},
    types::{LineClass, LineKind},
};

/// Classifies individual lines into a [`LineClass`].
///
/// Precedence is fixed: indented code (top level only), heading, thematic
/// break, list item, blockquote, fence, paragraph. Changing the order changes how ambiguous
/// lines such as `> # heading` or `- > quote` are read.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a raw document line.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some((prefix, remainder)) = IndentedCode::split(line) {
            return LineClass::new(LineKind::IndentedCode, prefix, remainder);
        }
        self.classify_nested(line)
    }

    /// Classifies the remainder of a container line.
    ///
    /// Indented code is not considered here: the indentation inside a list
    /// item or blockquote belongs to the container, not to a code block.
    pub fn classify_nested<'a>(&self, text: &'a str) -> LineClass<'a> {
        if let Some((prefix, remainder, level)) = Heading::split(text) {
            return LineClass::new(LineKind::Heading { level }, prefix, remainder);
        }
        if let Some((prefix, remainder)) = ThematicBreak::split(text) {
            return LineClass::new(LineKind::ThematicBreak, prefix, remainder);
        }
        if let Some((prefix, remainder)) = ListItem::split(text) {
            return LineClass::new(LineKind::ListItem, prefix, remainder);
        }
        if let Some((prefix, remainder)) = BlockQuote::split(text) {
            return LineClass::new(LineKind::BlockQuote, prefix, remainder);
        }
        if let Some((prefix, remainder, marker)) = CodeFence::split(text) {
            return LineClass::new(LineKind::Fence(marker), prefix, remainder);
        }
        let (prefix, remainder) = Paragraph::split(text);
        LineClass::new(LineKind::Paragraph, prefix, remainder)
    }
}
