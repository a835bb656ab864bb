use std::sync::OnceLock;

use regex::Regex;

/// Pipe table delimiters.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    fn divider_regex() -> &'static Regex {
        static DIVIDER_REGEX: OnceLock<Regex> = OnceLock::new();
        DIVIDER_REGEX.get_or_init(|| {
            Regex::new(r"^(?:\|[-:\s]+)+\|?$").expect("Invalid table divider regex")
        })
    }

    /// Whether a trimmed line can be a table row at all.
    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// Whether a trimmed line is a `|---|:---:|` style divider.
    pub fn is_divider(line: &str) -> bool {
        Self::divider_regex().is_match(line)
    }

    /// Splits a row into trimmed cells, dropping the boundary pipes.
    ///
    /// Inline markup inside cells is left untouched.
    pub fn split_row(line: &str) -> Vec<String> {
        let inner = line.strip_prefix(Self::PIPE).unwrap_or(line);
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        inner
            .split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_dividers() {
        assert!(Table::is_divider("|---|---|"));
        assert!(Table::is_divider("|----------|:--------:|---------:|"));
        assert!(Table::is_divider("| --- | --- |"));
        assert!(Table::is_divider("|---|---"));
        assert!(Table::is_divider("|---|"));
    }

    #[test]
    fn rows_are_not_dividers() {
        assert!(!Table::is_divider("| A | B |"));
        assert!(!Table::is_divider("||"));
        assert!(!Table::is_divider("---|---"));
    }

    #[test]
    fn split_drops_boundary_pipes_and_trims() {
        assert_eq!(Table::split_row("| A | B |"), vec!["A", "B"]);
        assert_eq!(Table::split_row("| A | B"), vec!["A", "B"]);
    }

    #[test]
    fn split_keeps_empty_inner_cells() {
        assert_eq!(Table::split_row("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn split_keeps_inline_markup() {
        assert_eq!(
            Table::split_row("| **Alice** | ~~Bob~~ |"),
            vec!["**Alice**", "~~Bob~~"]
        );
    }
}
