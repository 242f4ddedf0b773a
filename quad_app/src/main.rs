//! Hello quad
//!
//! Opens an 800x600 window and draws an orange quad. Escape closes the
//! window, W toggles wireframe.
//!
//! Usage: `hello_quad [config.toml|config.ron]`

use std::process::ExitCode;

use quad_engine::foundation::logging;
use quad_engine::prelude::*;

/// Exit status on fatal errors (-1 as seen by the shell)
const FATAL_EXIT_CODE: u8 = 255;

fn main() -> ExitCode {
    let config_path = std::env::args().nth(1);

    let config = match ApplicationConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            log::error!("Failed to load configuration: {e}");
            return ExitCode::from(FATAL_EXIT_CODE);
        }
    };

    logging::init(&config.engine.log_level);

    match quad_engine::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
