//! rBikeshare main entrypoint.

use rbikeshare::errors::AppError;
use rbikeshare::run;
use rbikeshare::ui::messages::{error, info};

fn main() {
    match run() {
        Ok(()) => {}
        // stdin closed mid-prompt: nothing left to ask, leave quietly
        Err(AppError::InputClosed) => {
            println!();
            info("Input closed, exiting.");
        }
        Err(e) => {
            error(e);
            std::process::exit(1);
        }
    }
}
