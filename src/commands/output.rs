//! Shared output writers for snapshot sequences

use serde::Serialize;

use graphstep_core::error::Result;
use graphstep_core::format::{format_id_list, format_weight, OutputFormat};
use graphstep_core::graph::algos::AlgorithmKind;
use graphstep_core::graph::{Algorithm, NodeId};
use graphstep_core::records;
use graphstep_core::snapshot::{Snapshot, SnapshotSequence};

use super::dispatch::CommandContext;

/// JSON shape of a complete run
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    algorithm: AlgorithmKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<NodeId>,
    total_weight: f64,
    snapshots: &'a SnapshotSequence,
}

/// JSON shape of one replayed step
#[derive(Debug, Serialize)]
struct StepOutput<'a> {
    step: usize,
    of: usize,
    snapshot: &'a Snapshot,
}

fn final_weight(snapshots: &SnapshotSequence) -> f64 {
    snapshots.last().map(Snapshot::selected_weight).unwrap_or(0.0)
}

fn describe(algorithm: &Algorithm) -> String {
    match algorithm.source() {
        Some(source) => format!("{} from node {}", algorithm.name(), source),
        None => algorithm.name().to_string(),
    }
}

/// Print a whole run in the requested format
pub fn print_sequence(
    ctx: &CommandContext,
    algorithm: &Algorithm,
    snapshots: &SnapshotSequence,
) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = RunOutput {
                algorithm: algorithm.kind(),
                source: algorithm.source(),
                total_weight: final_weight(snapshots),
                snapshots,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            for line in records::sequence_lines(algorithm, snapshots) {
                println!("{}", line);
            }
        }
        OutputFormat::Human => {
            if snapshots.is_empty() {
                if !ctx.cli.quiet {
                    println!("{}: no snapshots recorded", describe(algorithm));
                }
                return Ok(());
            }

            if !ctx.cli.quiet {
                println!("{}: {} snapshots", describe(algorithm), snapshots.len());
            }
            for (index, snapshot) in snapshots.iter().enumerate() {
                print_human_snapshot(index, snapshot);
            }
            println!("total weight: {}", format_weight(final_weight(snapshots)));
        }
    }
    Ok(())
}

/// Print one step of a replay
pub fn print_step(ctx: &CommandContext, index: usize, total: usize, snapshot: &Snapshot) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = StepOutput {
                step: index,
                of: total,
                snapshot,
            };
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Records => {
            for line in records::snapshot_lines(index, snapshot) {
                println!("{}", line);
            }
        }
        OutputFormat::Human => print_human_snapshot(index, snapshot),
    }
    Ok(())
}

fn print_human_snapshot(index: usize, snapshot: &Snapshot) {
    println!("[{}] visited: {}", index, format_id_list(&snapshot.visited_ids()));
    let selected: Vec<String> = snapshot
        .selected_edges()
        .map(|e| format!("#{} {}-{} ({})", e.id, e.from, e.to, format_weight(e.weight)))
        .collect();
    if selected.is_empty() {
        println!("    selected: -");
    } else {
        println!("    selected: {}", selected.join(", "));
    }
}
