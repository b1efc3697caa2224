use tracing::debug;

use crate::error::{GraphstepError, Result};
use crate::graph::algos::shared::min_by_weight;
use crate::graph::types::Graph;
use crate::snapshot::{SnapshotRecorder, SnapshotSequence};

/// Prim's minimum spanning tree, one snapshot per tree edge
///
/// The tree grows from the first node of `graph.nodes()`. Each step takes the
/// lightest edge with exactly one endpoint in the tree, the first such edge in
/// edge order on ties, and records the cumulative visited nodes and selected
/// edges. A connected graph yields `node_count - 1` snapshots.
///
/// Fails with `EmptyGraph` on a graph without nodes and with
/// `DisconnectedGraph` when the tree cannot reach every node.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn prim(graph: &Graph) -> Result<SnapshotSequence> {
    if graph.is_empty() {
        return Err(GraphstepError::EmptyGraph);
    }

    let total = graph.node_count();
    let endpoints = graph.endpoint_positions();
    let mut in_tree = vec![false; total];
    let mut tree_size = 1;
    let mut recorder = SnapshotRecorder::new(graph);

    in_tree[0] = true;
    recorder.visit(0);

    while tree_size < total {
        let crossing = graph
            .edges()
            .iter()
            .enumerate()
            .filter(|(pos, _)| {
                let (a, b) = endpoints[*pos];
                in_tree[a] != in_tree[b]
            });

        let Some((edge_pos, edge)) = min_by_weight(crossing) else {
            return Err(GraphstepError::DisconnectedGraph {
                visited: tree_size,
                total,
            });
        };

        let (a, b) = endpoints[edge_pos];
        for pos in [a, b] {
            if !in_tree[pos] {
                in_tree[pos] = true;
                tree_size += 1;
                recorder.visit(pos);
            }
        }
        recorder.select(edge_pos);
        recorder.record();

        debug!(
            step = recorder.len() - 1,
            edge = edge.id,
            weight = edge.weight,
            "add_tree_edge"
        );
    }

    Ok(recorder.finish())
}
