/// Paragraph text (the fallback kind).
///
/// Paragraphs have no delimiter; their prefix is just the leading
/// whitespace, and an empty remainder marks a blank line.
pub struct Paragraph;

impl Paragraph {
    /// Splits off leading whitespace. Never fails.
    pub fn split(text: &str) -> (&str, &str) {
        let content = text.trim_start();
        text.split_at(text.len() - content.len())
    }
}
