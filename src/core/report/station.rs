use crate::core::calculator::mode;
use crate::core::report::Report;
use crate::data::TripTable;
use crate::utils::formatting::or_na;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// "From: {start}; To: {end}"
    pub trip: Option<String>,
}

impl Report for StationStats {
    const HEADER: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn compute(table: &TripTable) -> Self {
        let start_station = mode(table.trips().map(|t| t.start_station.as_str()));
        let end_station = mode(table.trips().map(|t| t.end_station.as_str()));
        let trip = mode(
            table
                .trips()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        );

        Self {
            start_station: start_station.map(str::to_string),
            end_station: end_station.map(str::to_string),
            trip: trip.map(|(from, to)| format!("From: {from}; To: {to}")),
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Most commonly used start station: {}",
            or_na(self.start_station.as_deref())
        )?;
        writeln!(
            out,
            "Most commonly used end station: {}",
            or_na(self.end_station.as_deref())
        )?;
        writeln!(
            out,
            "Most frequent combination of start and end station: {}",
            or_na(self.trip.as_deref())
        )
    }
}
