//! In-memory trip table: source header, raw cells and typed trips side by side.

use crate::models::Trip;
use csv::StringRecord;

/// Column names of a loaded dataset, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

/// One source row: the cells exactly as read, plus the parsed trip.
#[derive(Debug, Clone)]
pub struct Row {
    pub raw: StringRecord,
    pub trip: Trip,
}

#[derive(Debug, Clone)]
pub struct TripTable {
    source: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl TripTable {
    pub fn new(source: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Self {
        Self {
            source: source.into(),
            schema,
            rows,
        }
    }

    /// Where the rows came from (file path or test label)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        self.rows.iter().map(|r| &r.trip)
    }

    /// Keep only the rows whose trip satisfies `keep`. Order is preserved.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Trip) -> bool,
    {
        self.rows.retain(|r| keep(&r.trip));
    }

    /// Rows `[cursor, cursor + size)` that exist; empty once past the end.
    pub fn page(&self, cursor: usize, size: usize) -> &[Row] {
        let start = cursor.min(self.rows.len());
        let end = cursor.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}
