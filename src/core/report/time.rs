use crate::core::calculator::mode;
use crate::core::report::Report;
use crate::data::TripTable;
use crate::utils::date::{WEEKDAYS, weekday_name};
use crate::utils::formatting::or_na;
use chrono::{Datelike, Weekday};
use std::io::{self, Write};

/// Most frequent start month, weekday and hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub day: Option<Weekday>,
    pub hour: Option<u32>,
}

impl Report for TimeStats {
    const HEADER: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn compute(table: &TripTable) -> Self {
        let month = mode(table.trips().map(|t| t.start_time.month()));
        // weekdays compare in calendar order, Monday first
        let day = mode(table.trips().map(|t| t.start_time.weekday().num_days_from_monday()))
            .map(|idx| WEEKDAYS[idx as usize]);
        let hour = mode(table.trips().map(|t| t.hour()));

        Self { month, day, hour }
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Most common start month (1-12): {}", or_na(self.month))?;
        writeln!(
            out,
            "Most common start day: {}",
            or_na(self.day.map(weekday_name))
        )?;
        writeln!(out, "Most common start hour (0-23): {}", or_na(self.hour))
    }
}
