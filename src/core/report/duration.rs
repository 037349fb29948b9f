use crate::core::calculator::sum_and_mean;
use crate::core::report::Report;
use crate::data::TripTable;
use crate::utils::formatting::{decimal, or_na};
use std::io::{self, Write};

const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3600.0;

/// Total and mean trip duration, in seconds as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total: f64,
    pub mean: Option<f64>,
}

impl DurationStats {
    pub fn total_minutes(&self) -> f64 {
        self.total / SECS_PER_MINUTE
    }

    pub fn total_hours(&self) -> f64 {
        self.total / SECS_PER_HOUR
    }

    pub fn mean_minutes(&self) -> Option<f64> {
        self.mean.map(|m| m / SECS_PER_MINUTE)
    }

    pub fn mean_hours(&self) -> Option<f64> {
        self.mean.map(|m| m / SECS_PER_HOUR)
    }
}

impl Report for DurationStats {
    const HEADER: &'static str = "Calculating Trip Duration...";

    fn compute(table: &TripTable) -> Self {
        let (total, count, mean) = sum_and_mean(table.trips().map(|t| t.duration));
        Self { count, total, mean }
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total travel time in seconds: {}", decimal(self.total))?;
        writeln!(out, "Total travel time in minutes: {}", decimal(self.total_minutes()))?;
        writeln!(out, "Total travel time in hours: {}", decimal(self.total_hours()))?;

        writeln!(out, "Mean travel time in seconds: {}", or_na(self.mean.map(decimal)))?;
        writeln!(
            out,
            "Mean travel time in minutes: {}",
            or_na(self.mean_minutes().map(decimal))
        )?;
        writeln!(
            out,
            "Mean travel time in hours: {}",
            or_na(self.mean_hours().map(decimal))
        )
    }
}
