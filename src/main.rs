//! Graphstep - replay graph algorithms one step at a time
//!
//! Runs Dijkstra, Prim or Kruskal over a weighted graph document and prints
//! the recorded sequence of intermediate graph states.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use graphstep_core::config::GlobalConfig;
use graphstep_core::error::{ExitCode as GraphstepExitCode, GraphstepError};
use graphstep_core::format::OutputFormat;
use graphstep_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable global config");
        GlobalConfig::default()
    });
    let format = cli.format.or(config.format).unwrap_or_default();

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => exit_with(GraphstepExitCode::Success),
        Err(e) => {
            report(&e, format, cli.quiet);
            exit_with(e.exit_code())
        }
    }
}

/// Parse arguments; with `--format json` a parse failure becomes a JSON
/// error envelope on stderr instead of clap's text
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    if !argv_requests_json(std::env::args().skip(1)) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GraphstepError::UsageError(err.to_string()),
        _ => GraphstepError::Other(err.to_string()),
    };

    report(&error, OutputFormat::Json, false);
    Err(exit_with(error.exit_code()))
}

fn report(error: &GraphstepError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
}

fn exit_with(code: GraphstepExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// `--format` is global, so it can appear anywhere on the command line
fn argv_requests_json(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
