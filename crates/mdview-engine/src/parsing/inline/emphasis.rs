use std::sync::OnceLock;

use regex::Regex;

use crate::{model::Style, parsing::span::Span};

use super::cursor::Cursor;

/// One delimited emphasis span found in the working text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    /// Full span including both delimiters.
    pub full: Span,
    /// Content between the delimiters.
    pub inner: Span,
}

pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';

    fn strikethrough_regex() -> &'static Regex {
        static STRIKETHROUGH_REGEX: OnceLock<Regex> = OnceLock::new();
        STRIKETHROUGH_REGEX
            .get_or_init(|| Regex::new(r"~~(.*?)~~").expect("Invalid strikethrough regex"))
    }

    fn bold_regex() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"))
    }

    /// Finds all non-overlapping spans of one family, left to right.
    ///
    /// Content is matched lazily and never crosses a newline.
    pub fn find(style: Style, text: &str) -> Vec<Delimited> {
        match style {
            Style::Strikethrough => find_with(Self::strikethrough_regex(), text),
            Style::Bold => find_with(Self::bold_regex(), text),
            Style::Italic => find_italic(text),
        }
    }
}

fn find_with(re: &Regex, text: &str) -> Vec<Delimited> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Delimited {
                full: Span {
                    start: full.start(),
                    end: full.end(),
                },
                inner: Span {
                    start: inner.start(),
                    end: inner.end(),
                },
            })
        })
        .collect()
}

/// Single `*...*` spans. The `regex` crate has no lookaround, so the
/// "no `*` on either side of a delimiter" rule is checked by hand.
fn find_italic(text: &str) -> Vec<Delimited> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(d) = try_parse_italic(&mut cur) {
            out.push(d);
            continue;
        }
        cur.bump();
    }

    out
}

/// A `*` with no `*` immediately before or after it.
fn at_single_star(cur: &Cursor<'_>) -> bool {
    cur.peek() == Some(Emphasis::STAR)
        && cur.prev() != Some(Emphasis::STAR)
        && cur.peek_at(1) != Some(Emphasis::STAR)
}

/// Attempts to parse an italic span starting at the current position.
///
/// The closing delimiter is the first single star after the opener.
/// On failure, cursor position is restored.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<Delimited> {
    if !at_single_star(cur) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // *
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(b'\n') && !at_single_star(cur) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !at_single_star(cur) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *
    let end = cur.pos();

    Some(Delimited {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
