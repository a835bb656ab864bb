//! # Inline Formatting
//!
//! Resolves emphasis markers in a single string into marker-free text plus
//! [`StyledRange`](crate::model::StyledRange)s.
//!
//! ## Modules
//!
//! - **`emphasis`**: per-family delimiter matching (`~~`, `**`, single `*`)
//! - **`cursor`**: byte `Cursor` used where a regex cannot express the delimiter rule
//! - **`formatter`**: `format_inline()` entry point running the three passes
//!
//! ## Pass Order
//!
//! Strikethrough, then bold, then italic. Later passes see earlier passes'
//! output, so markers of one family may sit inside spans of another.

pub mod cursor;
pub mod emphasis;
pub mod formatter;

pub use formatter::format_inline;
