//! Records output for snapshot sequences
//!
//! One line per fact:
//! - `H graphstep=1 algorithm=<name> [source=<id>] snapshots=<n>` header
//! - `S <index> visited=<ids> selected=<edge ids> weight=<total>` per snapshot
//! - `E <edge> <from>-<to> w=<weight>` per selected edge of that snapshot

use crate::format::{format_id_list, format_weight};
use crate::graph::Algorithm;
use crate::snapshot::{Snapshot, SnapshotSequence};

/// Records format version written in the header line
pub const RECORDS_VERSION: u32 = 1;

pub fn header_line(algorithm: &Algorithm, snapshots: &SnapshotSequence) -> String {
    let source = algorithm
        .source()
        .map(|id| format!(" source={}", id))
        .unwrap_or_default();
    format!(
        "H graphstep={} algorithm={}{} snapshots={}",
        RECORDS_VERSION,
        algorithm.kind(),
        source,
        snapshots.len()
    )
}

pub fn snapshot_lines(index: usize, snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "S {} visited={} selected={} weight={}",
        index,
        format_id_list(&snapshot.visited_ids()),
        format_id_list(&snapshot.selected_ids()),
        format_weight(snapshot.selected_weight())
    )];

    for edge in snapshot.selected_edges() {
        lines.push(format!(
            "E {} {}-{} w={}",
            edge.id,
            edge.from,
            edge.to,
            format_weight(edge.weight)
        ));
    }
    lines
}

/// Every line for a complete run
pub fn sequence_lines(algorithm: &Algorithm, snapshots: &SnapshotSequence) -> Vec<String> {
    let mut lines = vec![header_line(algorithm, snapshots)];
    for (index, snapshot) in snapshots.iter().enumerate() {
        lines.extend(snapshot_lines(index, snapshot));
    }
    lines
}
