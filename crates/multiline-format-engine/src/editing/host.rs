use std::borrow::Cow;

use super::position::{Position, Selection};

/// Read access to a document one line at a time.
pub trait LineSource {
    /// Text of a 0-based line without its terminator. Out-of-range lines are empty.
    fn line(&self, index: usize) -> Cow<'_, str>;
}

/// The editor surface a format operation runs against.
pub trait EditorHost: LineSource {
    fn selection(&self) -> Selection;

    /// Replaces the current selection; newlines in `text` create new lines.
    fn replace_selection(&mut self, text: &str);

    /// Collapses the selection to a cursor.
    fn set_cursor(&mut self, at: Position);
}

impl LineSource for [&str] {
    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(index).copied().unwrap_or_default())
    }
}

impl LineSource for [String] {
    fn line(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(index).map(String::as_str).unwrap_or_default())
    }
}

impl<const N: usize> LineSource for [&str; N] {
    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}

impl LineSource for Vec<String> {
    fn line(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line(index)
    }
}
