pub mod editing;
pub mod formatting;
pub mod io;
pub mod parsing;
pub mod structure;
pub mod style;

// Re-export key types for easier usage
pub use editing::{Buffer, EditorHost, LineSource, ParsePositionError, Patch, Position, Selection};
pub use formatting::{Formatter, format_selection};
pub use io::{IoError, read_document, write_document};
pub use parsing::{LineClass, LineKind, MarkdownLineClassifier};
pub use structure::{Section, SectionCache, SectionKind, StructureSource};
pub use style::Style;
