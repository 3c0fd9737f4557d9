use std::{borrow::Cow, fmt};

use xi_rope::Rope;

use super::{
    host::{EditorHost, LineSource},
    position::{Position, Selection},
};

/// In-memory document backed by an xi-rope buffer.
///
/// The rope is the single source of truth: edits are applied to it directly
/// and `text()` returns the exact bytes, so content outside the edited
/// selection round-trips untouched.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    selection: Selection,
    /// Incremented on each edit.
    version: u64,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
            selection: Selection::default(),
            version: 0,
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of lines; an empty buffer has one empty line.
    pub fn line_count(&self) -> usize {
        self.rope.line_of_offset(self.rope.len()) + 1
    }

    /// Position just past the last character of the document.
    pub fn end(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.line(last).len())
    }

    /// Selects from `a` to `b` (in either order), clamped to the document.
    pub fn select(&mut self, a: Position, b: Position) {
        self.selection = Selection::new(self.clamp(a), self.clamp(b));
    }

    /// Selects the whole document.
    pub fn select_all(&mut self) {
        self.selection = Selection::new(Position::default(), self.end());
    }

    /// Clamps a position to an existing line and a char boundary within it.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        let text = self.line(line);
        let mut ch = pos.ch.min(text.len());
        while !text.is_char_boundary(ch) {
            ch -= 1;
        }
        Position::new(line, ch)
    }

    fn offset_of(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.offset_of_line(pos.line) + pos.ch
    }

    /// Byte range of a line's content, excluding the `\n` / `\r\n` terminator.
    fn line_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = self.rope.offset_of_line(index);
        let end = if index + 1 < self.line_count() {
            self.rope.offset_of_line(index + 1)
        } else {
            self.rope.len()
        };
        let raw = self.rope.slice_to_cow(start..end);
        let content = raw.trim_end_matches('\n').trim_end_matches('\r');
        start..start + content.len()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.rope.len())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .finish()
    }
}

impl LineSource for Buffer {
    fn line(&self, index: usize) -> Cow<'_, str> {
        if index >= self.line_count() {
            return Cow::Borrowed("");
        }
        self.rope.slice_to_cow(self.line_range(index))
    }
}

impl EditorHost for Buffer {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn replace_selection(&mut self, text: &str) {
        let start = self.offset_of(self.selection.from);
        let end = self.offset_of(self.selection.to);
        self.rope.edit(start..end, text);
        self.version += 1;

        // Collapse to the end of the inserted text.
        let mut line = self.selection.from.line;
        let mut ch = self.selection.from.ch;
        for (i, segment) in text.split('\n').enumerate() {
            if i == 0 {
                ch += segment.len();
            } else {
                line += 1;
                ch = segment.len();
            }
        }
        self.selection = Selection::cursor(Position::new(line, ch));
    }

    fn set_cursor(&mut self, at: Position) {
        self.selection = Selection::cursor(self.clamp(at));
    }
}
