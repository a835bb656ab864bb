//! Turns parsed blocks into ratatui lines.

use mdview_engine::{Block, FormattedText, Style as TextStyle, format_inline};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const COLUMN_SEPARATOR: &str = " │ ";

pub fn render_blocks(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { text, level } => {
                let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(*level as usize)),
                    style,
                )];
                spans.extend(styled_spans(&format_inline(text), style));
                lines.push(Line::from(spans));
            }
            Block::Paragraph { text } => {
                lines.push(Line::from(styled_spans(
                    &format_inline(text),
                    Style::default(),
                )));
            }
            Block::Image { url, alt_text } => {
                lines.push(Line::from(Span::styled(
                    format!("[image: {alt_text}] ({url})"),
                    Style::default().fg(Color::Magenta),
                )));
            }
            Block::Table { headers, rows } => lines.extend(render_table(headers, rows)),
            Block::EmptyLine => lines.push(Line::default()),
        }
    }

    lines
}

/// Cuts the text at every range boundary so each span carries one set of
/// modifiers.
pub fn styled_spans(formatted: &FormattedText, base: Style) -> Vec<Span<'static>> {
    let mut cuts = vec![0, formatted.text.len()];
    for r in &formatted.ranges {
        cuts.push(r.start);
        cuts.push(r.end);
    }
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .filter(|w| w[0] < w[1])
        .map(|w| {
            let style = formatted
                .styles_at(w[0])
                .into_iter()
                .fold(base, |s, t| s.add_modifier(modifier(t)));
            Span::styled(formatted.text[w[0]..w[1]].to_string(), style)
        })
        .collect()
}

fn modifier(style: TextStyle) -> Modifier {
    match style {
        TextStyle::Strikethrough => Modifier::CROSSED_OUT,
        TextStyle::Bold => Modifier::BOLD,
        TextStyle::Italic => Modifier::ITALIC,
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let header_cells: Vec<FormattedText> = headers.iter().map(|h| format_inline(h)).collect();
    let body: Vec<Vec<FormattedText>> = rows
        .iter()
        .map(|row| row.iter().map(|c| format_inline(c)).collect())
        .collect();

    let mut widths: Vec<usize> = header_cells.iter().map(display_width).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let header_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![table_row(&header_cells, &widths, header_style)];
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(Line::from(Span::styled(
        rule.join("─┼─"),
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(body.iter().map(|row| table_row(row, &widths, Style::default())));
    lines
}

fn table_row(cells: &[FormattedText], widths: &[usize], base: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::raw(COLUMN_SEPARATOR));
        }
        spans.extend(styled_spans(cell, base));
        let pad = width - display_width(cell);
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
    }
    Line::from(spans)
}

fn display_width(cell: &FormattedText) -> usize {
    cell.text.chars().count()
}
