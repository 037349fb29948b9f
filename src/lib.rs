//! rBikeshare library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::explore::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init_logging();

    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
