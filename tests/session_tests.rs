use chrono::Weekday;
use rbikeshare::core::session::{Session, SessionState};
use rbikeshare::data::{DatasetRegistry, read_table};
use rbikeshare::errors::AppError;
use rbikeshare::models::{Choice, City, Month};
use rbikeshare::ui::Console;
use rbikeshare::ui::pager::{display_raw_data, render_page};
use rbikeshare::ui::prompt::{
    CITY_RETRY, RETRY, ask_until, get_filters, parse_day_choice, parse_month_choice,
};

mod common;
use common::{CHICAGO_CSV, answers, setup_data_dir};

fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

fn transcript(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_choice_parsers() {
    assert_eq!(parse_month_choice("ALL"), Some(Choice::All));
    assert_eq!(parse_month_choice("march"), Some(Choice::Only(Month::March)));
    assert_eq!(parse_month_choice("July"), None);
    assert_eq!(parse_month_choice("jan"), None);

    assert_eq!(parse_day_choice("all"), Some(Choice::All));
    assert_eq!(parse_day_choice("sUnDaY"), Some(Choice::Only(Weekday::Sun)));
    assert_eq!(parse_day_choice("sun"), None);
}

#[test]
fn test_ask_until_retries_without_limit() {
    let input = answers(&["boston", "", "paris", "london", "Washington"]);
    let mut c = console(&input);

    let city = ask_until(&mut c, "city? ", CITY_RETRY, City::from_input).unwrap();
    assert_eq!(city, City::Washington);

    let out = transcript(c);
    assert_eq!(out.matches(CITY_RETRY).count(), 4);
    assert_eq!(out.matches("city? ").count(), 5);
}

#[test]
fn test_ask_until_end_of_input_is_input_closed() {
    let mut c = console("nowhere\n");
    let err = ask_until(&mut c, "city? ", CITY_RETRY, City::from_input).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn test_ask_until_rejects_non_utf8_answer() {
    let mut c = Console::new(&b"\xff\xfe\njune\n"[..], Vec::new());

    let month = ask_until(&mut c, "month? ", RETRY, parse_month_choice).unwrap();
    assert_eq!(month, Choice::Only(Month::June));

    let out = transcript(c);
    assert_eq!(out.matches(RETRY).count(), 1);
    assert_eq!(out.matches("month? ").count(), 2);
}

#[test]
fn test_confirm_requires_exact_yes() {
    let mut c = console("Yes\r\n yes\nyes \n");
    assert!(c.confirm("? ").unwrap());
    assert!(!c.confirm("? ").unwrap());
    assert!(!c.confirm("? ").unwrap());

    let mut c = Console::new(&b"\xffyes\n"[..], Vec::new());
    assert!(!c.confirm("? ").unwrap());
}

#[test]
fn test_get_filters_normalizes_and_echoes() {
    let input = answers(&["NEW YORK CITY", "Juneteenth", "june", "someday", "MONDAY"]);
    let mut c = console(&input);

    let filter = get_filters(&mut c, "----").unwrap();
    assert_eq!(filter.city, City::NewYorkCity);
    assert_eq!(filter.month, Choice::Only(Month::June));
    assert_eq!(filter.day, Choice::Only(Weekday::Mon));

    let out = transcript(c);
    assert!(out.starts_with("Hello! Let's explore some US bikeshare data!"));
    assert_eq!(out.matches(RETRY).count(), 2);
    assert!(out.contains("----\nYou have entered New York City, June, Monday.\n----\n"));
}

#[test]
fn test_render_page_past_end_is_empty() {
    let table = read_table("chicago", CHICAGO_CSV.as_bytes()).unwrap();
    let len = table.len();

    for cursor in [len, len + 1, len + 5, usize::MAX - 2] {
        assert!(table.page(cursor, 5).is_empty());
        assert!(render_page(&table, cursor, 5).is_none());
    }

    // partial last page
    assert_eq!(table.page(5, 5).len(), 2);
}

#[test]
fn test_render_page_shows_source_columns_only() {
    let table = read_table("chicago", CHICAGO_CSV.as_bytes()).unwrap();
    let page = render_page(&table, 0, 5).unwrap();

    let lines: Vec<&str> = page.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Start Time"));
    assert!(lines[0].contains("Birth Year"));
    assert!(!lines[0].contains("day_of_week"));
    assert!(!lines[0].contains("month"));
    assert!(lines[1].trim_start().starts_with("0  1001"));
    assert!(lines[5].trim_start().starts_with("4  1005"));
}

#[test]
fn test_pager_stops_on_anything_but_yes() {
    let table = read_table("chicago", CHICAGO_CSV.as_bytes()).unwrap();

    let input = answers(&["YES", "yes", "yes", "nope"]);
    let mut c = console(&input);
    let shown = display_raw_data(&mut c, &table, 5).unwrap();
    // 5 + 2 + nothing past the end
    assert_eq!(shown, 7);

    let out = transcript(c);
    assert_eq!(
        out.matches("Would you like to see 5 rows of raw data? Type 'Yes' or 'No'.")
            .count(),
        4
    );
    assert!(out.contains("1007"));

    let input = answers(&["y"]);
    let mut c = console(&input);
    assert_eq!(display_raw_data(&mut c, &table, 5).unwrap(), 0);

    // end of input counts as a no
    let mut c = console("");
    assert_eq!(display_raw_data(&mut c, &table, 5).unwrap(), 0);
}

#[test]
fn test_session_single_pass() {
    let dir = setup_data_dir("session_single_pass");
    let session = Session::new(DatasetRegistry::new(&dir), 5, "-".repeat(40));

    let input = answers(&["washington", "all", "all", "no", "no"]);
    let mut c = console(&input);

    assert_eq!(session.run(&mut c).unwrap(), 1);

    let out = transcript(c);
    assert!(out.contains("You have entered Washington, All, All."));
    assert!(out.contains("Most common start day: Monday"));
    assert!(out.contains("Total travel time in seconds: 360"));
    assert!(out.contains("Sorry, no gender or date of birth data is available"));
    assert!(out.contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn test_session_restart_runs_independent_passes() {
    let dir = setup_data_dir("session_restart");
    let session = Session::new(DatasetRegistry::new(&dir), 5, "-");

    let input = answers(&[
        "chicago", "january", "all", "no", "Yes", // pass 1, restart
        "chicago", "all", "all", "no", "stop", // pass 2, exit
    ]);
    let mut c = console(&input);

    assert_eq!(session.run(&mut c).unwrap(), 2);

    let out = transcript(c);
    assert!(out.contains("You have entered Chicago, January, All."));
    assert!(out.contains("You have entered Chicago, All, All."));
    // January only: 60 + 120 + 180; everything: 1680
    assert!(out.contains("Total travel time in seconds: 360.0\n"));
    assert!(out.contains("Total travel time in seconds: 1680.0\n"));
}

#[test]
fn test_run_pass_reports_state() {
    let dir = setup_data_dir("session_state");
    let session = Session::new(DatasetRegistry::new(&dir), 5, "-");

    let input = answers(&["chicago", "all", "friday", "no", "YES"]);
    let mut c = console(&input);
    assert_eq!(session.run_pass(&mut c).unwrap(), SessionState::Running);

    let input = answers(&["chicago", "all", "friday", "no", "yes please"]);
    let mut c = console(&input);
    assert_eq!(session.run_pass(&mut c).unwrap(), SessionState::Stopped);
}

#[test]
fn test_session_missing_source_propagates() {
    let dir = common::temp_dir("session_missing_source");
    let session = Session::new(DatasetRegistry::new(&dir), 5, "-");

    let input = answers(&["chicago", "all", "all"]);
    let mut c = console(&input);
    let err = session.run(&mut c).unwrap_err();

    assert!(matches!(err, AppError::DataSource { .. }));
    assert!(err.to_string().contains("chicago.csv"));
}
