use super::kinds::{Heading, Image, Table};

/// What a single line can be, judged without looking at its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading { level: u8, text: String },
    Blank,
    Image { url: String, alt_text: String },
    /// Starts with `|`. Whether it actually belongs to a table is decided by the builder.
    TableRow { is_divider: bool },
    /// Anything else; becomes a paragraph.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line with surrounding whitespace removed.
    pub text: String,
    pub kind: LineKind,
}

impl LineClass {
    pub fn is_table_divider(&self) -> bool {
        matches!(self.kind, LineKind::TableRow { is_divider: true })
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Kinds are tested in priority order: heading, blank, image, table row, text.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        let kind = if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading {
                level,
                text: text.to_string(),
            }
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some((alt, url)) = Image::parse(trimmed) {
            LineKind::Image {
                url: url.to_string(),
                alt_text: alt.to_string(),
            }
        } else if Table::is_row(trimmed) {
            LineKind::TableRow {
                is_divider: Table::is_divider(trimmed),
            }
        } else {
            LineKind::Text
        };

        LineClass {
            text: trimmed.to_string(),
            kind,
        }
    }
}
