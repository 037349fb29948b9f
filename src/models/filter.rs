use crate::models::{City, Month, Trip};
use crate::utils::date::weekday_name;
use chrono::Weekday;

/// A filter dimension: either unconstrained ("all") or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl Choice<Month> {
    pub fn label(&self) -> &'static str {
        match self {
            Choice::All => "All",
            Choice::Only(m) => m.name(),
        }
    }
}

impl Choice<Weekday> {
    pub fn label(&self) -> &'static str {
        match self {
            Choice::All => "All",
            Choice::Only(d) => weekday_name(*d),
        }
    }
}

/// The user's selection for one pass. City is always resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub city: City,
    pub month: Choice<Month>,
    pub day: Choice<Weekday>,
}

impl Filter {
    pub fn new(city: City) -> Self {
        Self {
            city,
            month: Choice::All,
            day: Choice::All,
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Choice::Only(month);
        self
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Choice::Only(day);
        self
    }

    /// True when neither month nor day constrains the rows.
    pub fn is_identity(&self) -> bool {
        self.month.is_all() && self.day.is_all()
    }

    /// Does the trip pass both month and day constraints?
    pub fn accepts(&self, trip: &Trip) -> bool {
        let month_ok = match self.month {
            Choice::All => true,
            Choice::Only(m) => trip.month == m.number(),
        };
        let day_ok = match self.day {
            Choice::All => true,
            Choice::Only(d) => trip.day_of_week == d,
        };
        month_ok && day_ok
    }

    /// "Chicago, June, Monday"
    pub fn describe(&self) -> String {
        format!(
            "{}, {}, {}",
            self.city.title(),
            self.month.label(),
            self.day.label()
        )
    }
}
