//! # Block Parsing
//!
//! Single forward pass over the document's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line gets a `LineClass`
//!    naming the one block kind it can start (heading, blank, image, table row,
//!    or plain text), tested in that priority order.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds the only
//!    cross-line state, an optional open table, and emits `Block`s.
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types that own their delimiters (Heading, Image, Table)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Every non-table-row line closes an open table before emitting its own block
//! - Tables close at the first non-row line or at end of input
//! - Every table row has exactly as many cells as the header row

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
