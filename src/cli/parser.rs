use clap::{Parser, Subcommand};

/// Command-line interface definition for rBikeshare.
/// Without a subcommand the interactive explorer starts.
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and riders",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
