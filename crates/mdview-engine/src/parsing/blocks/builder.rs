use crate::model::Block;

use super::{
    classify::{LineClass, LineKind},
    kinds::Table,
};

/// Accumulators for a table that has seen its header but not its end.
#[derive(Debug)]
struct TableState {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableState {
    fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: vec![],
        }
    }

    fn push_row(&mut self, mut cells: Vec<String>) {
        // Short rows are padded, long rows truncated.
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    fn into_block(self) -> Block {
        Block::Table {
            headers: self.headers,
            rows: self.rows,
        }
    }
}

/// Builds blocks from classified lines, one line at a time.
pub struct BlockBuilder {
    table: Option<TableState>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            table: None,
            out: vec![],
        }
    }

    /// Consumes one line. `next` is the following line, if any; it is only
    /// consulted to confirm that a `|` line opens a table.
    pub fn push(&mut self, c: &LineClass, next: Option<&LineClass>) {
        match &c.kind {
            LineKind::Heading { level, text } => {
                self.flush_table();
                self.out.push(Block::heading(text.clone(), *level));
            }
            LineKind::Blank => {
                self.flush_table();
                self.out.push(Block::EmptyLine);
            }
            LineKind::Image { url, alt_text } => {
                self.flush_table();
                self.out.push(Block::image(url.clone(), alt_text.clone()));
            }
            LineKind::TableRow { is_divider } => self.push_table_row(c, *is_divider, next),
            LineKind::Text => {
                self.flush_table();
                self.out.push(Block::paragraph(c.text.clone()));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_table();
        self.out
    }

    fn push_table_row(&mut self, c: &LineClass, is_divider: bool, next: Option<&LineClass>) {
        if let Some(table) = self.table.as_mut() {
            if !is_divider {
                table.push_row(Table::split_row(&c.text));
            }
            return;
        }

        if next.is_some_and(LineClass::is_table_divider) {
            self.table = Some(TableState::new(Table::split_row(&c.text)));
        } else {
            // A lone `|` line with no divider under it is just text.
            self.out.push(Block::paragraph(c.text.clone()));
        }
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            log::trace!(
                "closing table: {} columns, {} rows",
                table.headers.len(),
                table.rows.len()
            );
            self.out.push(table.into_block());
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
