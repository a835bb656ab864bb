/// A byte range `[start, end)` into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Ordered, non-overlapping spans to delete from one string in a single pass.
#[derive(Debug, Default)]
pub struct Cuts {
    spans: Vec<Span>,
    /// Bytes removed by all spans before `spans[i]`.
    removed_before: Vec<usize>,
    total: usize,
}

impl Cuts {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            spans: Vec::with_capacity(n),
            removed_before: Vec::with_capacity(n),
            total: 0,
        }
    }

    /// Adds a span. Spans must arrive left to right without overlapping.
    pub fn push(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        debug_assert!(self.spans.last().is_none_or(|last| last.end <= span.start));
        self.removed_before.push(self.total);
        self.total += span.len();
        self.spans.push(span);
    }

    /// Maps an offset in the original string onto the string with every cut
    /// removed. Offsets inside a cut collapse onto its start.
    #[must_use]
    pub fn map(&self, pos: usize) -> usize {
        let i = self.spans.partition_point(|s| s.start < pos);
        if i == 0 {
            return pos;
        }
        let cut = self.spans[i - 1];
        let before = self.removed_before[i - 1];
        if pos < cut.end {
            cut.start - before
        } else {
            pos - before - cut.len()
        }
    }

    /// Copies `text` with every cut left out.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() - self.total);
        let mut copied = 0;
        for span in &self.spans {
            out.push_str(&text[copied..span.start]);
            copied = span.end;
        }
        out.push_str(&text[copied..]);
        out
    }
}
