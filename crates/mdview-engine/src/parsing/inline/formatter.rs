use crate::{
    model::{FormattedText, Style, StyledRange},
    parsing::span::{Cuts, Span},
};

use super::emphasis::{Delimited, Emphasis};

/// Families in resolution order. Each pass sees the previous pass's output.
const PASSES: [Style; 3] = [Style::Strikethrough, Style::Bold, Style::Italic];

/// Strips emphasis markers from `line` and reports where each style applies.
///
/// Passes run strikethrough, then bold, then italic. Each pass deletes all of
/// its delimiters in one copy of the text and shifts the ranges recorded by
/// earlier passes onto the shorter text. `***x***` therefore comes out bold
/// and italic purely through pass order.
///
/// Unmatched delimiters are left in the text verbatim.
pub fn format_inline(line: &str) -> FormattedText {
    let mut w = Rewriter::new(line);

    for style in PASSES {
        let found = Emphasis::find(style, &w.text);
        w.unwrap_all(&found, style);
    }

    w.finish()
}

/// Working text plus the ranges recorded so far, kept in step with each pass.
struct Rewriter {
    text: String,
    ranges: Vec<StyledRange>,
}

impl Rewriter {
    fn new(line: &str) -> Self {
        Self {
            text: line.to_string(),
            ranges: vec![],
        }
    }

    /// Replaces every delimited span with its content and records the ranges.
    /// `found` is ordered left to right and non-overlapping.
    fn unwrap_all(&mut self, found: &[Delimited], style: Style) {
        if found.is_empty() {
            return;
        }

        let mut cuts = Cuts::with_capacity(found.len() * 2);
        for d in found {
            cuts.push(Span {
                start: d.full.start,
                end: d.inner.start,
            });
            cuts.push(Span {
                start: d.inner.end,
                end: d.full.end,
            });
        }

        for r in &mut self.ranges {
            r.start = cuts.map(r.start);
            r.end = cuts.map(r.end);
        }
        for d in found.iter().filter(|d| !d.inner.is_empty()) {
            let start = cuts.map(d.inner.start);
            self.ranges
                .push(StyledRange::new(start, start + d.inner.len(), style));
        }

        self.text = cuts.apply(&self.text);
    }

    fn finish(mut self) -> FormattedText {
        self.ranges.retain(|r| !r.is_empty());
        self.ranges.sort_by_key(|r| (r.start, r.style, r.end));
        FormattedText {
            text: self.text,
            ranges: self.ranges,
        }
    }
}
