//! Immutable graph snapshots recorded during an algorithm run
//!
//! Every snapshot owns its own copies of the nodes and edges with the
//! `visited`/`selected` flags fixed when it was recorded. A recorded snapshot
//! is never touched again, so a caller can step through a sequence while a
//! new run is being computed.

use serde::Serialize;

use crate::graph::{Edge, EdgeId, Graph, Node, NodeId, Weight};

/// One instant of an algorithm's progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Snapshot {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Resolve an edge's endpoints against this snapshot's nodes
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(edge.from)?, self.node(edge.to)?))
    }

    /// Ids of visited nodes, in node order
    pub fn visited_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.visited)
            .map(|n| n.id)
            .collect()
    }

    pub fn selected_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| e.selected)
    }

    /// Ids of selected edges, in edge order
    pub fn selected_ids(&self) -> Vec<EdgeId> {
        self.selected_edges().map(|e| e.id).collect()
    }

    pub fn selected_weight(&self) -> Weight {
        Graph::total_weight(self.selected_edges())
    }
}

/// The complete, ordered list of snapshots from one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SnapshotSequence {
    snapshots: Vec<Snapshot>,
}

impl SnapshotSequence {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    /// The terminal state of the run
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl IntoIterator for SnapshotSequence {
    type Item = Snapshot;
    type IntoIter = std::vec::IntoIter<Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.into_iter()
    }
}

impl<'a> IntoIterator for &'a SnapshotSequence {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Builds a snapshot sequence from a private copy of the input graph
///
/// Flags are tracked by position in the graph's node and edge order. The
/// base copy has every flag cleared regardless of what the caller passed in.
pub(crate) struct SnapshotRecorder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    visited: Vec<bool>,
    selected: Vec<bool>,
    recorded: Vec<Snapshot>,
}

impl SnapshotRecorder {
    pub(crate) fn new(graph: &Graph) -> Self {
        let nodes: Vec<Node> = graph
            .nodes()
            .iter()
            .map(|n| Node {
                visited: false,
                ..n.clone()
            })
            .collect();
        let edges: Vec<Edge> = graph
            .edges()
            .iter()
            .map(|e| Edge {
                selected: false,
                ..e.clone()
            })
            .collect();

        SnapshotRecorder {
            visited: vec![false; nodes.len()],
            selected: vec![false; edges.len()],
            nodes,
            edges,
            recorded: Vec::new(),
        }
    }

    pub(crate) fn visit(&mut self, node_pos: usize) {
        self.visited[node_pos] = true;
    }

    pub(crate) fn select(&mut self, edge_pos: usize) {
        self.selected[edge_pos] = true;
    }

    pub(crate) fn deselect(&mut self, edge_pos: usize) {
        self.selected[edge_pos] = false;
    }

    pub(crate) fn len(&self) -> usize {
        self.recorded.len()
    }

    /// Materialize the current flags into a new snapshot
    pub(crate) fn record(&mut self) {
        let nodes = self
            .nodes
            .iter()
            .zip(&self.visited)
            .map(|(n, &visited)| Node {
                visited,
                ..n.clone()
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .zip(&self.selected)
            .map(|(e, &selected)| Edge {
                selected,
                ..e.clone()
            })
            .collect();

        self.recorded.push(Snapshot { nodes, edges });
    }

    pub(crate) fn finish(self) -> SnapshotSequence {
        SnapshotSequence {
            snapshots: self.recorded,
        }
    }
}
