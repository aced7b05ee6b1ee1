//! Tangle - graph workbench CLI
//!
//! Build directed and undirected graphs from the command line or an
//! interactive menu, run BFS/DFS traversals over them, persist graphs as
//! JSON documents, and export node/edge tables as CSV.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use tangle_core::error::{ExitCode as TangleExitCode, TangleError};
use tangle_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before
            // we can inspect `Cli.format`. If the user requested JSON output,
            // emit a structured error envelope.
            if argv_format_json {
                use clap::error::ErrorKind;
                let tangle_error = match err.kind() {
                    // Help and version are informational, not errors
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                    ErrorKind::ValueValidation
                    | ErrorKind::InvalidValue
                    | ErrorKind::InvalidSubcommand
                    | ErrorKind::UnknownArgument
                    | ErrorKind::MissingRequiredArgument
                    | ErrorKind::ArgumentConflict => TangleError::UsageError(err.to_string()),
                    _ => TangleError::Other(err.to_string()),
                };

                eprintln!("{}", tangle_error.to_json());
                return ExitCode::from(tangle_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TangleExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
