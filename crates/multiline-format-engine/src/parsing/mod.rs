//! # Line Classification
//!
//! Splits a single line of Markdown into a structural `prefix` and a
//! `remainder`, tagging it with the [`LineKind`] that produced the split.
//!
//! ## Modules
//!
//! - **`kinds`**: One type per block kind, each owning its delimiter syntax
//! - **`classify`**: `MarkdownLineClassifier`, which applies the kinds in precedence order
//! - **`types`**: `LineKind` and the borrowed `LineClass` result
//!
//! ## Key Invariants
//!
//! - Classification is total: anything unrecognised is a paragraph
//! - `prefix + remainder` is always exactly the input
//! - Remainders of container kinds (lists, blockquotes) are classified again
//!   with [`MarkdownLineClassifier::classify_nested`]

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::MarkdownLineClassifier;
pub use types::{LineClass, LineKind};
