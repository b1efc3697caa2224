//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use graphstep_core::config::GlobalConfig;
use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use graphstep_core::graph::{Graph, GraphDocument};
use graphstep_core::trace_time;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GlobalConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a GlobalConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Read and validate the graph document at `path`
    pub fn load_graph(&self, path: &Path) -> Result<Graph> {
        let graph = GraphDocument::load(path)?.into_graph()?;
        trace_time!(
            self.start,
            "load_graph",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Replay shortest-path and spanning-tree runs over weighted graphs.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}
