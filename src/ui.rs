//! Terminal interaction: console I/O, validated prompts, raw data pager, notices.

pub mod console;
pub mod messages;
pub mod pager;
pub mod prompt;

pub use console::{Console, StdConsole};
