use std::{fmt, str::FromStr};

/// A caret position: 0-based line and byte column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected LINE:COL, got {0:?}")]
    MissingSeparator(String),
    #[error("invalid {part} in {input:?}: {source}")]
    InvalidNumber {
        part: &'static str,
        input: String,
        source: std::num::ParseIntError,
    },
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `LINE:COL` (both 0-based).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, ch) = s
            .split_once(':')
            .ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;
        let parse = |part: &'static str, value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|source| ParsePositionError::InvalidNumber {
                    part,
                    input: s.to_string(),
                    source,
                })
        };
        Ok(Self::new(parse("line", line)?, parse("column", ch)?))
    }
}

/// A selection between two positions, kept in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub from: Position,
    pub to: Position,
}

impl Selection {
    /// Builds a selection from an anchor and a head in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// A zero-width selection (a bare cursor).
    pub fn cursor(at: Position) -> Self {
        Self { from: at, to: at }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_and_column() {
        assert_eq!("3:14".parse::<Position>(), Ok(Position::new(3, 14)));
    }

    #[test]
    fn rejects_missing_colon() {
        assert!(matches!(
            "314".parse::<Position>(),
            Err(ParsePositionError::MissingSeparator(_))
        ));
    }

    #[test]
    fn rejects_bad_column() {
        let err = "3:x".parse::<Position>().unwrap_err();
        assert!(err.to_string().starts_with("invalid column"));
    }

    #[test]
    fn selection_is_normalised() {
        let sel = Selection::new(Position::new(4, 0), Position::new(1, 2));
        assert_eq!(sel.from, Position::new(1, 2));
        assert_eq!(sel.to, Position::new(4, 0));
    }

    #[test]
    fn orders_by_line_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }
}
