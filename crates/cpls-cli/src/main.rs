use clap::CommandFactory;
use cpls_core::error::ConfigError;
use cpls_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout stays reserved for the report.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        if err.downcast_ref::<ConfigError>().is_some() {
            eprintln!("{}", Cli::command().render_help());
        }
        tracing::error!("run failed: {:#}", err);
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
