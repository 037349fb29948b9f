use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Column names as they appear in the source CSV headers.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
}

/// Typed view of one trip row, with the derived month and weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// Derived: calendar month of `start_time` (1-12)
    pub month: u32,
    /// Derived: weekday of `start_time`
    pub day_of_week: Weekday,
    pub start_station: String,
    pub end_station: String,
    /// Seconds
    pub duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            start_time,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            start_station: start_station.into(),
            end_station: end_station.into(),
            duration,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}
