//! CLI argument parsing for graphstep
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graphstep_core::format::OutputFormat;
use graphstep_core::graph::algos::AlgorithmKind;
use graphstep_core::graph::NodeId;

/// Graphstep - replay graph algorithms one step at a time
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then human)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "graphstep_core=debug")
    #[arg(long, global = true, env = "GRAPHSTEP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm and print every recorded snapshot
    Run(RunArgs),

    /// Step through an algorithm's snapshots at a fixed interval
    Replay {
        #[command(flatten)]
        run: RunArgs,

        /// Delay between snapshots in milliseconds (defaults to config)
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Check a graph document and summarize it
    Validate {
        /// Path to a graph document (.json or .toml)
        graph: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Algorithm to run
    #[arg(value_enum)]
    pub algorithm: AlgorithmKind,

    /// Path to a graph document (.json or .toml)
    pub graph: PathBuf,

    /// Source node id (required for dijkstra)
    #[arg(long, short)]
    pub source: Option<NodeId>,
}
