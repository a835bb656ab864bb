/// An inline emphasis family.
///
/// Declaration order is the order the formatter resolves them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    Strikethrough,
    Bold,
    Italic,
}

/// A styled byte range `[start, end)` into [`FormattedText::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRange {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    pub style: Style,
}

impl StyledRange {
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Marker-free text plus the emphasis ranges that apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    pub text: String,
    /// Sorted by start offset, then by style.
    pub ranges: Vec<StyledRange>,
}

impl FormattedText {
    /// Returns the text covered by `range`.
    pub fn slice(&self, range: StyledRange) -> &str {
        &self.text[range.start..range.end]
    }

    /// Returns every style active at byte offset `pos`.
    pub fn styles_at(&self, pos: usize) -> Vec<Style> {
        self.ranges
            .iter()
            .filter(|r| r.start <= pos && pos < r.end)
            .map(|r| r.style)
            .collect()
    }
}
