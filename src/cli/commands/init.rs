use crate::cli::parser::Cli;
use crate::config::Config;
use crate::data::DatasetRegistry;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and a default configuration file
/// (skipped with `--test`), then reports which datasets are reachable.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing rBikeshare…");
    println!("📄 Config file : {}", path.display());

    let cfg = Config {
        data_dir: cli.data_dir.clone().unwrap_or_else(|| Config::default().data_dir),
        ..Config::default()
    };
    let registry = DatasetRegistry::from_config(&cfg)?;

    for (city, source) in registry.iter() {
        if source.exists() {
            info(format!("{:<14} {}", city.title(), source.display()));
        } else {
            warning(format!("{:<14} {} (not found)", city.title(), source.display()));
        }
    }

    success("rBikeshare initialization completed!");
    Ok(())
}
