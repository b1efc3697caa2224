//! `graphstep run` - compute a run and print every snapshot

use graphstep_core::error::Result;
use graphstep_core::graph::Algorithm;
use graphstep_core::trace_time;

use super::dispatch::CommandContext;
use super::output::print_sequence;
use crate::cli::RunArgs;

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let algorithm = Algorithm::new(args.algorithm, args.source)?;
    let graph = ctx.load_graph(&args.graph)?;

    let snapshots = algorithm.run(&graph)?;
    trace_time!(ctx.start, "run_algorithm", snapshots = snapshots.len());

    print_sequence(ctx, &algorithm, &snapshots)
}
