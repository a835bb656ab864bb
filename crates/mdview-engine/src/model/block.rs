/// One structural unit of a parsed markdown document.
///
/// Blocks come out of the parser in source order. Text payloads keep their
/// raw inline markup; run them through [`crate::format_inline`] to resolve
/// emphasis for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ATX heading (`#` through `######`).
    Heading {
        /// Heading text with the `#` prefix removed, trimmed.
        text: String,
        /// Number of leading hashes, 1 to 6.
        level: u8,
    },
    /// Any line not recognised as another block kind.
    Paragraph {
        /// The trimmed source line.
        text: String,
    },
    /// A line consisting solely of `![alt](url)`.
    Image { url: String, alt_text: String },
    /// A pipe table with a header row and a divider line.
    Table {
        headers: Vec<String>,
        /// Each row has exactly `headers.len()` cells.
        rows: Vec<Vec<String>>,
    },
    /// A blank source line. Runs of blank lines are not collapsed.
    EmptyLine,
}

impl Block {
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn image(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self::Image {
            url: url.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Short lowercase name of the variant, as used by the FFI and viewer.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::Image { .. } => "image",
            Self::Table { .. } => "table",
            Self::EmptyLine => "empty_line",
        }
    }
}
