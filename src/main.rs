mod cli;
mod config;
mod driver;
mod error;
mod psql;
mod runner;
mod target;

use log::{debug, error};

use crate::cli::Cli;

fn main() {
    // Log level comes from RUST_LOG when set, "info" otherwise. The handle
    // must stay alive for the duration of the run.
    let logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(flexi_logger::Logger::start);
    if let Err(e) = &logger {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!(
        "Command-line args: {:?}",
        std::env::args_os().collect::<Vec<_>>()
    );

    if let Err(err) = Cli::handle_command_line() {
        error!("{err:?}");
        eprintln!("❌ Migration failed: {err}");
        std::process::exit(1);
    }
}
