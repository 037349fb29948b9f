//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{display_width, pad_left, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align_right: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build columns from header names; widths start at the header width
    /// and grow with every added row.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .map(|h| {
                let header = h.into();
                Column {
                    width: display_width(&header),
                    header,
                    align_right: false,
                }
            })
            .collect();
        Self::new(columns)
    }

    pub fn align_right(mut self, idx: usize) -> Self {
        if let Some(col) = self.columns.get_mut(idx) {
            col.align_right = true;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(display_width(cell));
        }
        self.rows.push(row);
    }

    fn cell(col: &Column, value: &str) -> String {
        if col.align_right {
            pad_left(value, col.width)
        } else {
            pad_right(value, col.width)
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|col| Self::cell(col, &col.header))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        // Rows (missing cells render blank)
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| Self::cell(col, row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
