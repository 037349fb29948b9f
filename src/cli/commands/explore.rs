use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::StdConsole;

/// Default action: the interactive explorer on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::from_config(cfg)?;
    let mut console = StdConsole::stdio();
    session.run(&mut console)?;
    Ok(())
}
