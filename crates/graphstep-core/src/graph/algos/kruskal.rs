use std::cmp::Ordering;

use tracing::debug;

use crate::error::{GraphstepError, Result};
use crate::graph::algos::shared::UnionFind;
use crate::graph::types::Graph;
use crate::snapshot::{SnapshotRecorder, SnapshotSequence};

/// Kruskal's minimum spanning forest, one snapshot per accepted edge
///
/// Edges are taken in ascending weight order with a stable sort, so equal
/// weights keep their edge-list order. An edge joining two different
/// components is selected and recorded; one closing a cycle is skipped
/// without a snapshot. Node `visited` flags are left cleared.
///
/// A disconnected graph yields a spanning forest, not an error.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn kruskal(graph: &Graph) -> Result<SnapshotSequence> {
    if graph.is_empty() {
        return Err(GraphstepError::EmptyGraph);
    }

    let edges = graph.edges();
    let endpoints = graph.endpoint_positions();
    let mut order: Vec<usize> = (0..edges.len()).collect();
    // Weights are finite, so partial_cmp is total here and -0.0 ties 0.0
    order.sort_by(|&a, &b| {
        edges[a]
            .weight
            .partial_cmp(&edges[b].weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut sets = UnionFind::new(graph.node_count());
    let mut recorder = SnapshotRecorder::new(graph);
    let tree_edges = graph.node_count() - 1;

    for edge_pos in order {
        if recorder.len() == tree_edges {
            break;
        }

        let (a, b) = endpoints[edge_pos];
        if !sets.union(a, b) {
            continue;
        }

        recorder.select(edge_pos);
        recorder.record();

        debug!(
            step = recorder.len() - 1,
            edge = edges[edge_pos].id,
            weight = edges[edge_pos].weight,
            "add_forest_edge"
        );
    }

    Ok(recorder.finish())
}
