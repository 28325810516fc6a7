//! Breakdown: turn directive/layer commands into ready-to-use prompts.
//!
//! This is the main entry point for the `breakdown` CLI. It parses arguments,
//! sets up logging, dispatches, and maps errors to exit codes.

use breakdown::cli::Cli;
use breakdown::{commands, exit_codes};
use log::LevelFilter;
use std::process::ExitCode;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let result = Cli::parse_args().and_then(|cli| {
        setup_logging(cli.verbose);
        commands::dispatch(cli)
    });

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
