//! minimal-react CLI - scaffold a React app from minimal-react-boilerplate
//!
//! This is the main entry point for the command-line interface.

mod cli;
mod commands;
mod output;
mod report;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI args
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let Some(name) = cli.project_directory.as_deref() else {
        for line in cli::missing_directory_help() {
            println!("{}", line);
        }
        return ExitCode::FAILURE;
    };

    match commands::new::run(name, &cli.toolchain()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so they never mix with the user-facing report.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // RUST_LOG only applies when no -v was given
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
