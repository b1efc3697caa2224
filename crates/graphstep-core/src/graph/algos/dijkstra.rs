use tracing::debug;

use crate::error::{GraphstepError, Result};
use crate::graph::algos::shared::closest_unsettled;
use crate::graph::types::{Graph, NodeId};
use crate::snapshot::{SnapshotRecorder, SnapshotSequence};

/// State tracked during a Dijkstra run, indexed by node position
struct DijkstraState {
    distances: Vec<f64>,
    settled: Vec<bool>,
    /// Edge position currently linking each node to its predecessor
    previous: Vec<Option<usize>>,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![f64::INFINITY; node_count];
        distances[source] = 0.0;
        Self {
            distances,
            settled: vec![false; node_count],
            previous: vec![None; node_count],
        }
    }
}

/// Single-source shortest paths with one snapshot per successful relaxation
///
/// Each snapshot shows the shortest-path tree as known at that instant: the
/// selected edges are the current predecessor edge of every reached node, so
/// when a node is improved its old predecessor edge is deselected from then
/// on. Both endpoints of every relaxed edge are marked visited and stay so.
/// An individual edge's `selected` flag can therefore revert, while the
/// number of selected edges never shrinks.
///
/// Nodes are settled in order of distance; among equal distances the first
/// node in graph order wins. Incident edges are examined in edge order and
/// only unsettled neighbors are relaxed, which also makes self-loops inert.
/// The run stops once every remaining node is unreachable.
#[tracing::instrument(skip(graph), fields(source = %source, nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<SnapshotSequence> {
    let source_pos = graph
        .position_of(source)
        .ok_or(GraphstepError::InvalidSource { id: source })?;

    let endpoints = graph.endpoint_positions();
    let mut state = DijkstraState::new(graph.node_count(), source_pos);
    let mut recorder = SnapshotRecorder::new(graph);

    while let Some(current) = closest_unsettled(&state.distances, &state.settled) {
        state.settled[current] = true;

        for (edge_pos, &(a, b)) in endpoints.iter().enumerate() {
            let neighbor = if a == current {
                b
            } else if b == current {
                a
            } else {
                continue;
            };
            if state.settled[neighbor] {
                continue;
            }

            let candidate = state.distances[current] + graph.edges()[edge_pos].weight;
            if candidate >= state.distances[neighbor] {
                continue;
            }

            state.distances[neighbor] = candidate;
            if let Some(old) = state.previous[neighbor].replace(edge_pos) {
                recorder.deselect(old);
            }
            recorder.select(edge_pos);
            recorder.visit(current);
            recorder.visit(neighbor);
            recorder.record();

            debug!(
                step = recorder.len() - 1,
                from = graph.nodes()[current].id,
                to = graph.nodes()[neighbor].id,
                distance = candidate,
                "relax"
            );
        }
    }

    Ok(recorder.finish())
}

#[cfg(test)]
mod tests;
