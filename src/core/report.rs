//! Statistics reports printed after each load.
//!
//! Every report block has the same frame: a header, the computed lines,
//! the elapsed wall-clock time and a separator.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use users::{BirthYears, Demographics, UserStats};

use crate::data::TripTable;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

pub trait Report: Sized {
    const HEADER: &'static str;

    fn compute(table: &TripTable) -> Self;

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// Compute one report and print it in its frame.
pub fn print_report<R, W>(table: &TripTable, out: &mut W, separator: &str) -> io::Result<R>
where
    R: Report,
    W: Write,
{
    writeln!(out, "\n{}\n", R::HEADER)?;

    let started = Instant::now();
    let report = R::compute(table);
    report.render(out)?;
    let elapsed = started.elapsed().as_secs_f64();

    debug!(report = R::HEADER, rows = table.len(), elapsed, "report computed");

    writeln!(out, "\nThis took {} seconds.", elapsed)?;
    writeln!(out, "{separator}")?;
    Ok(report)
}

/// Print the four reports in order: times, stations, durations, users.
pub fn print_all<W: Write>(table: &TripTable, out: &mut W, separator: &str) -> io::Result<()> {
    print_report::<TimeStats, _>(table, out, separator)?;
    print_report::<StationStats, _>(table, out, separator)?;
    print_report::<DurationStats, _>(table, out, separator)?;
    print_report::<UserStats, _>(table, out, separator)?;
    Ok(())
}
