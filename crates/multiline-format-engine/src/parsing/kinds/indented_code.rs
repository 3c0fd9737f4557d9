/// Indented code block line (one tab or four spaces).
pub struct IndentedCode;

impl IndentedCode {
    pub const TAB: &'static str = "\t";
    pub const SPACES: &'static str = "    ";

    /// Splits an indented line into `(indent, rest)`.
    ///
    /// Whitespace-only lines are blank lines, not code, so they never match.
    pub fn split(line: &str) -> Option<(&str, &str)> {
        let indent = if line.starts_with(Self::TAB) {
            Self::TAB.len()
        } else if line.starts_with(Self::SPACES) {
            Self::SPACES.len()
        } else {
            return None;
        };
        let (prefix, rest) = line.split_at(indent);
        if rest.trim().is_empty() {
            return None;
        }
        Some((prefix, rest))
    }
}
