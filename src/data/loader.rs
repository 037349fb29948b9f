//! CSV dataset loading and month/day filtering.

use crate::data::registry::DatasetRegistry;
use crate::data::table::{Row, Schema, TripTable};
use crate::errors::{AppError, AppResult};
use crate::models::trip::columns;
use crate::models::{City, Filter, Trip};
use crate::utils::date::parse_timestamp;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// Column indexes resolved once from the header.
struct ColumnLayout {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnLayout {
    /// Fails with the name of the first missing required column.
    fn resolve(schema: &Schema) -> Result<Self, &'static str> {
        let find = |name: &'static str| schema.position(name).ok_or(name);

        Ok(Self {
            start_time: find(columns::START_TIME)?,
            start_station: find(columns::START_STATION)?,
            end_station: find(columns::END_STATION)?,
            duration: find(columns::TRIP_DURATION)?,
            user_type: find(columns::USER_TYPE)?,
            gender: schema.position(columns::GENDER),
            birth_year: schema.position(columns::BIRTH_YEAR),
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<Trip, String> {
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let raw_start = cell(self.start_time);
        let start_time = parse_timestamp(raw_start)
            .ok_or_else(|| format!("invalid {} '{}'", columns::START_TIME, raw_start))?;

        let raw_duration = cell(self.duration);
        let duration: f64 = raw_duration
            .parse()
            .map_err(|_| format!("invalid {} '{}'", columns::TRIP_DURATION, raw_duration))?;

        let mut trip = Trip::new(
            start_time,
            cell(self.start_station),
            cell(self.end_station),
            duration,
        );
        trip.user_type = non_blank(cell(self.user_type));
        trip.gender = self.gender.and_then(|idx| non_blank(cell(idx)));
        trip.birth_year = match self.birth_year {
            Some(idx) => parse_year(cell(idx))?,
            None => None,
        };

        Ok(trip)
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Birth years are stored as floats in some exports ("1989.0").
fn parse_year(s: &str) -> Result<Option<i32>, String> {
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v as i32)),
        _ => Err(format!("invalid {} '{}'", columns::BIRTH_YEAR, s)),
    }
}

/// Read a trip table from any CSV byte stream.
pub fn read_table<R: Read>(source_name: &str, reader: R) -> AppResult<TripTable> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::data_source(source_name, e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let schema = Schema::new(headers);

    let layout = ColumnLayout::resolve(&schema).map_err(|missing| {
        AppError::data_source(source_name, format!("missing column '{missing}'"))
    })?;

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| AppError::data_source(source_name, e))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);

        let trip = layout
            .parse(&record)
            .map_err(|reason| AppError::data_source(source_name, format!("line {line}: {reason}")))?;

        rows.push(Row { raw: record, trip });
    }

    debug!(source = source_name, rows = rows.len(), "dataset read");
    Ok(TripTable::new(source_name, schema, rows))
}

/// Load the full, unfiltered dataset of a city. Single attempt, no retry.
pub fn load_city(registry: &DatasetRegistry, city: City) -> AppResult<TripTable> {
    let path = registry.source(city);
    let name = path.display().to_string();

    let file = File::open(path).map_err(|e| AppError::data_source(&name, e))?;
    read_table(&name, file)
}

/// Retain only rows matching the filter's month and day.
pub fn apply_filter(mut table: TripTable, filter: &Filter) -> TripTable {
    if filter.is_identity() {
        return table;
    }

    let before = table.len();
    table.retain(|trip| filter.accepts(trip));
    debug!(
        source = table.source(),
        before,
        after = table.len(),
        month = filter.month.label(),
        day = filter.day.label(),
        "filter applied"
    );
    table
}

/// Load the selected city and apply the month/day filter.
pub fn load_data(registry: &DatasetRegistry, filter: &Filter) -> AppResult<TripTable> {
    let table = load_city(registry, filter.city)?;
    Ok(apply_filter(table, filter))
}
