/// The selected byte range of one line, `[start, end)`.
///
/// Clips are expressed against the full line and shifted as prefixes are
/// peeled off, so the same clip can be applied to a prefix and (shifted) to
/// its remainder. Ranges past either end of the text clamp to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub start: usize,
    pub end: usize,
}

impl Clip {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// The whole of `line` is selected.
    pub fn full(line: &str) -> Self {
        Self::new(0, line.len())
    }

    /// Re-expresses the clip relative to text that starts `by` bytes later.
    #[must_use]
    pub fn shift(self, by: usize) -> Self {
        Self {
            start: self.start.saturating_sub(by),
            end: self.end.saturating_sub(by),
        }
    }

    /// The selected part of `text`.
    pub fn apply(self, text: &str) -> &str {
        let end = floor_char_boundary(text, self.end.min(text.len()));
        let start = floor_char_boundary(text, self.start.min(end));
        &text[start..end]
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_clip_returns_everything() {
        assert_eq!(Clip::full("hello").apply("hello"), "hello");
    }

    #[test]
    fn clip_inside_prefix_leaves_remainder_empty() {
        let clip = Clip::new(0, 1);
        assert_eq!(clip.apply("> "), ">");
        assert_eq!(clip.shift(2).apply("text"), "");
    }

    #[test]
    fn clip_starting_in_remainder_skips_prefix() {
        let clip = Clip::new(4, 9);
        assert_eq!(clip.apply("- "), "");
        assert_eq!(clip.shift(2).apply("item text"), "em te");
    }

    #[test]
    fn clip_beyond_text_clamps() {
        assert_eq!(Clip::new(2, 99).apply("abc"), "c");
        assert_eq!(Clip::new(10, 99).apply("abc"), "");
    }

    #[test]
    fn clip_never_splits_a_char() {
        assert_eq!(Clip::new(0, 2).apply("éa"), "é");
        assert_eq!(Clip::new(1, 3).apply("éa"), "éa");
    }
}
