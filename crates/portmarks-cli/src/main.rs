use portmarks_core::logging;
use portmarks_core::{alert_message, PortmarkError};

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("portmarks failed: {:?}", err);
        match err.downcast_ref::<PortmarkError>() {
            Some(pm) => eprintln!("{}", alert_message(pm)),
            None => eprintln!("portmarks error: {:#}", err),
        }
        std::process::exit(1);
    }
}
