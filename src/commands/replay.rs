//! `graphstep replay` - step through a run at a fixed interval
//!
//! Prints the first snapshot immediately, then one more per interval, and
//! stops on the terminal snapshot. Ctrl-C ends playback early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use graphstep_core::error::{GraphstepError, Result};
use graphstep_core::graph::Algorithm;
use graphstep_core::replay::Replay;
use tracing::debug;

use super::dispatch::CommandContext;
use super::output::print_step;
use crate::cli::RunArgs;

/// Granularity of the interrupt check while waiting between steps
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Execute the replay command
pub fn execute(ctx: &CommandContext, args: &RunArgs, interval_ms: u64) -> Result<()> {
    let algorithm = Algorithm::new(args.algorithm, args.source)?;
    let graph = ctx.load_graph(&args.graph)?;
    let mut replay = Replay::new(algorithm, algorithm.run(&graph)?);

    if replay.is_empty() {
        if !ctx.cli.quiet {
            println!("{}: no snapshots recorded", algorithm);
        }
        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let interval = Duration::from_millis(interval_ms);
    loop {
        if let Some(snapshot) = replay.current() {
            print_step(ctx, replay.position(), replay.len(), snapshot)?;
        }
        if replay.is_finished() {
            break;
        }

        wait(interval, &interrupted)?;
        replay.advance();
    }

    debug!(steps = replay.len(), "replay_finished");
    Ok(())
}

/// Sleep for `interval`, returning early with `Interrupted` on Ctrl-C
fn wait(interval: Duration, interrupted: &AtomicBool) -> Result<()> {
    let deadline = Instant::now() + interval;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Err(GraphstepError::Interrupted);
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}
