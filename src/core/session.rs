//! The interactive loop: one pass is filters → load → reports → pager,
//! then the user decides whether to start over.

use crate::config::Config;
use crate::core::report;
use crate::data::{DatasetRegistry, load_data};
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::ui::{pager, prompt};
use std::io::{BufRead, Write};
use tracing::debug;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

pub struct Session {
    registry: DatasetRegistry,
    page_size: usize,
    separator: String,
}

impl Session {
    pub fn new(registry: DatasetRegistry, page_size: usize, separator: impl Into<String>) -> Self {
        Self {
            registry,
            page_size: page_size.max(1),
            separator: separator.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let registry = DatasetRegistry::from_config(cfg)?;
        Ok(Self::new(registry, cfg.page_size, cfg.separator()))
    }

    /// One full pass. The table lives only for the duration of the pass.
    pub fn run_pass<R, W>(&self, console: &mut Console<R, W>) -> AppResult<SessionState>
    where
        R: BufRead,
        W: Write,
    {
        let filter = prompt::get_filters(console, &self.separator)?;
        let table = load_data(&self.registry, &filter)?;
        debug!(selection = %filter.describe(), rows = table.len(), "pass started");

        report::print_all(&table, console.output(), &self.separator)?;
        pager::display_raw_data(console, &table, self.page_size)?;

        if console.confirm(RESTART_PROMPT)? {
            Ok(SessionState::Running)
        } else {
            Ok(SessionState::Stopped)
        }
    }

    /// Run passes until the user declines to restart. Returns the number of passes.
    pub fn run<R, W>(&self, console: &mut Console<R, W>) -> AppResult<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = SessionState::Running;
        let mut passes = 0;

        while state == SessionState::Running {
            state = self.run_pass(console)?;
            passes += 1;
        }

        debug!(passes, "session stopped");
        Ok(passes)
    }
}
