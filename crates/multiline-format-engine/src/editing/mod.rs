//! # Host Editing Surface
//!
//! The format operation never touches a document directly. It reads lines
//! through [`LineSource`], reads the selection through [`EditorHost`], and
//! produces a [`Patch`] that the host applies in one replace-selection call.
//!
//! ## Modules
//!
//! - **`position`**: `Position` (line + byte column) and `Selection`
//! - **`host`**: `LineSource` / `EditorHost` traits the formatter is generic over
//! - **`buffer`**: `Buffer`, an xi-rope backed host used by the CLI and tests
//! - **`patch`**: The edit produced by one format operation

pub mod buffer;
pub mod host;
pub mod patch;
pub mod position;

pub use buffer::Buffer;
pub use host::{EditorHost, LineSource};
pub use patch::Patch;
pub use position::{ParsePositionError, Position, Selection};
