mod application;
mod logging;
mod presentation;

use std::process::ExitCode;

use clap::Parser;
use presentation::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("cannot open log file: {e}");
        return ExitCode::FAILURE;
    }

    match application::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
