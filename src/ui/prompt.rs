//! Validated interactive prompts for city, month and day.

use crate::errors::AppResult;
use crate::models::{Choice, City, Filter, Month};
use crate::ui::console::Console;
use crate::utils::date::parse_weekday;
use chrono::Weekday;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

pub const CITY_PROMPT: &str = "Enter a city - Chicago, New York City or Washington: ";
pub const CITY_RETRY: &str =
    "That's not in the list! Type either Chicago, New York City or Washington please!";

pub const MONTH_PROMPT: &str =
    "Enter a month - all, or January, February, March, April, May, June: ";
pub const DAY_PROMPT: &str = "Enter the day of the week - all, or Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday: ";
pub const RETRY: &str = "That's not in the list! Try again please";

/// Ask `prompt` until `validate` accepts the answer, printing `retry`
/// after every rejected one. There is no retry limit.
pub fn ask_until<R, W, T, F>(
    console: &mut Console<R, W>,
    prompt: &str,
    retry: &str,
    validate: F,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = console.ask(prompt)?;
        if let Some(value) = validate(&answer) {
            return Ok(value);
        }
        console.say(retry)?;
    }
}

/// "all" or a supported month name, any case.
pub fn parse_month_choice(input: &str) -> Option<Choice<Month>> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Some(Choice::All);
    }
    Month::from_input(input).map(Choice::Only)
}

/// "all" or a full weekday name, any case.
pub fn parse_day_choice(input: &str) -> Option<Choice<Weekday>> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Some(Choice::All);
    }
    parse_weekday(input).map(Choice::Only)
}

/// Greet, collect city/month/day and echo the selection.
pub fn get_filters<R, W>(console: &mut Console<R, W>, separator: &str) -> AppResult<Filter>
where
    R: BufRead,
    W: Write,
{
    console.say(GREETING)?;

    let city = ask_until(console, CITY_PROMPT, CITY_RETRY, City::from_input)?;
    let month = ask_until(console, MONTH_PROMPT, RETRY, parse_month_choice)?;
    let day = ask_until(console, DAY_PROMPT, RETRY, parse_day_choice)?;

    let filter = Filter { city, month, day };

    console.say(separator)?;
    console.say(format!("You have entered {}.", filter.describe()))?;
    console.say(separator)?;

    Ok(filter)
}
