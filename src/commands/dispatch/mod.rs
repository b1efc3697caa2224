//! Command dispatch logic for graphstep

use std::time::Instant;

use graphstep_core::config::GlobalConfig;
use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, config: &GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => commands::run::execute(ctx, args),
            Commands::Replay { run, interval_ms } => commands::replay::execute(
                ctx,
                run,
                interval_ms.unwrap_or(ctx.config.replay.interval_ms),
            ),
            Commands::Validate { graph } => commands::validate::execute(ctx, graph),
        }
    }
}
