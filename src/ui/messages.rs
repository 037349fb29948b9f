//! Status lines for the non-interactive surfaces (`init`, `config`, exit notices).
//! Report and prompt text goes through `Console` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    /// Text placed between the icon and the message
    fn prefix(self) -> &'static str {
        match self {
            Level::Error => "Error: ",
            _ => "",
        }
    }
}

/// One status line, colored icon first.
pub fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!(
        "{}{}{} {}{}{}",
        level.color(),
        BOLD,
        level.icon(),
        RESET,
        level.prefix(),
        msg
    )
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Fatal errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}
