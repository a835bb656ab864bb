//! # Parsing
//!
//! Two independent stages:
//!
//! 1. **Blocks** (`blocks`): raw document text to an ordered `Vec<Block>`.
//! 2. **Inline** (`inline`): one line of text with emphasis markers to
//!    marker-free text plus [`StyledRange`](crate::model::StyledRange)s.
//!
//! Block parsing never resolves inline markup. Callers format heading,
//! paragraph and table cell text themselves when presenting it.

pub mod blocks;
pub mod inline;
pub mod span;

use crate::model::Block;
use blocks::{BlockBuilder, MarkdownLineClassifier};

pub use inline::format_inline;

/// Parses a whole markdown document into blocks, in source order.
///
/// Never fails: lines that match no other block kind become paragraphs.
pub fn parse_document(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let mut lines = text.lines().map(|line| classifier.classify(line)).peekable();
    while let Some(lc) = lines.next() {
        builder.push(&lc, lines.peek());
    }

    builder.finish()
}

/// Alias of [`parse_document`].
pub fn parse(text: &str) -> Vec<Block> {
    parse_document(text)
}
