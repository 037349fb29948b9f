//! Formatting utilities used for CLI outputs.

use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

/// Value or "n/a" when there is nothing to show (e.g. an empty selection).
pub fn or_na<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

/// Float with a decimal point even when whole: 6.0 prints "6.0", 0.1 prints "0.1".
pub fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Terminal column width of a string (wide glyphs count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}
