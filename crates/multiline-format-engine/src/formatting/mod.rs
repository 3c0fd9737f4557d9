//! # Selection Formatting
//!
//! Walks the lines of a selection, classifies each one and decides where the
//! left and right wrappers of a [`Style`] go.
//!
//! ## Runs
//!
//! A run is a maximal stretch of formattable text that gets exactly one
//! wrapper pair. Runs end at blank lines, headings, list items, code, and
//! at any increase in blockquote depth. Structural prefixes (`# `, `- [ ] `,
//! `> `) are never inside a run.
//!
//! ## Modules
//!
//! - **`formatter`**: The `Formatter` state machine and its per-kind handlers
//! - **`clip`**: `Clip`, the selected byte range of a line as prefixes are peeled off
//! - **`output`**: `OutputLines`, which owns the single open run

pub mod clip;
pub mod formatter;
pub mod output;


pub use clip::Clip;
pub use formatter::{Formatter, MAX_NESTING};
pub use output::OutputLines;

use crate::{
    editing::{EditorHost, Patch},
    structure::StructureSource,
    style::Style,
};

/// Formats the host's selection with `style` and applies the result.
pub fn format_selection<H: EditorHost + ?Sized>(
    host: &mut H,
    style: &Style,
    structure: Option<&dyn StructureSource>,
) -> Patch {
    let formatter = Formatter::new(style);
    match structure {
        Some(structure) => formatter.with_structure(structure).format_selection(host),
        None => formatter.format_selection(host),
    }
}
