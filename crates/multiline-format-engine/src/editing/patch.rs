use super::position::{Position, Selection};

/// Result of a format operation: the text that replaces `selection`, and
/// where the cursor should go afterwards (only set for zero-width selections).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub selection: Selection,
    pub text: String,
    pub cursor: Option<Position>,
}

impl Patch {
    /// The replacement split back into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}
