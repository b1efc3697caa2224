//! Headless graph editor
//!
//! Holds the live, mutable graph a user builds up, allocates ids, and owns
//! the replay of the most recent run. Engines never see the live state: each
//! run works on an immutable copy produced by [`GraphEditor::graph`].

use tracing::debug;

use crate::ensure_weight;
use crate::error::{GraphstepError, Result};
use crate::graph::{Algorithm, Edge, EdgeId, Graph, Node, NodeId, Weight};
use crate::replay::Replay;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct GraphEditor {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: NodeId,
    next_edge_id: EdgeId,
    replay: Option<Replay>,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphEditor {
    pub fn new() -> Self {
        GraphEditor {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node_id: 1,
            next_edge_id: 0,
            replay: None,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Place a new node; ids are never handed out twice in one session
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes.push(Node::new(id, x, y));
        self.discard_replay();
        id
    }

    /// Delete a node together with every edge touching it
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        let pos = self.node_position(id)?;
        self.nodes.remove(pos);
        self.edges.retain(|e| !e.touches(id));
        self.discard_replay();
        Ok(())
    }

    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> Result<()> {
        let pos = self.node_position(id)?;
        self.nodes[pos].x = x;
        self.nodes[pos].y = y;
        self.discard_replay();
        Ok(())
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<EdgeId> {
        if from == to {
            return Err(GraphstepError::SelfLoop { node: from });
        }
        self.node_position(from)?;
        self.node_position(to)?;

        let id = self.next_edge_id;
        ensure_weight!(id, weight);
        self.next_edge_id += 1;
        self.edges.push(Edge::new(id, from, to, weight));
        self.discard_replay();
        Ok(id)
    }

    pub fn set_weight(&mut self, id: EdgeId, weight: Weight) -> Result<()> {
        ensure_weight!(id, weight);
        let pos = self.edge_position(id)?;
        self.edges[pos].weight = weight;
        self.discard_replay();
        Ok(())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> Result<()> {
        let pos = self.edge_position(id)?;
        self.edges.remove(pos);
        self.discard_replay();
        Ok(())
    }

    /// Clear everything and start a new session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Immutable copy of the live graph, with flags cleared
    pub fn graph(&self) -> Result<Graph> {
        Graph::new(self.nodes.clone(), self.edges.clone())
    }

    /// Run one engine against a copy of the live graph and make its
    /// snapshots the active replay, replacing any replay in progress
    pub fn run(&mut self, algorithm: Algorithm) -> Result<&mut Replay> {
        self.discard_replay();
        let snapshots = algorithm.run(&self.graph()?)?;
        debug!(algorithm = %algorithm, snapshots = snapshots.len(), "run");
        Ok(self.replay.insert(Replay::new(algorithm, snapshots)))
    }

    pub fn replay(&self) -> Option<&Replay> {
        self.replay.as_ref()
    }

    pub fn replay_mut(&mut self) -> Option<&mut Replay> {
        self.replay.as_mut()
    }

    /// The snapshot to display right now, if a replay is active
    pub fn current_view(&self) -> Option<&Snapshot> {
        self.replay.as_ref().and_then(Replay::current)
    }

    fn discard_replay(&mut self) {
        self.replay = None;
    }

    fn node_position(&self, id: NodeId) -> Result<usize> {
        self.nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(GraphstepError::NodeNotFound { id })
    }

    fn edge_position(&self, id: EdgeId) -> Result<usize> {
        self.edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(GraphstepError::EdgeNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_editor() -> GraphEditor {
        let mut editor = GraphEditor::new();
        let a = editor.add_node(0.0, 0.0);
        let b = editor.add_node(10.0, 0.0);
        let c = editor.add_node(5.0, 8.0);
        editor.add_edge(a, b, 1.0).unwrap();
        editor.add_edge(b, c, 2.0).unwrap();
        editor.add_edge(a, c, 5.0).unwrap();
        editor
    }

    #[test]
    fn test_node_ids_are_not_reused() {
        let mut editor = GraphEditor::new();
        assert_eq!(editor.add_node(0.0, 0.0), 1);
        assert_eq!(editor.add_node(0.0, 0.0), 2);
        editor.remove_node(2).unwrap();
        assert_eq!(editor.add_node(0.0, 0.0), 3);
    }

    #[test]
    fn test_reset_starts_new_session() {
        let mut editor = triangle_editor();
        editor.run(Algorithm::Prim).unwrap();
        editor.reset();
        assert!(editor.nodes().is_empty());
        assert!(editor.edges().is_empty());
        assert!(editor.replay().is_none());
        assert_eq!(editor.add_node(1.0, 1.0), 1);
    }

    #[test]
    fn test_rejects_self_loop() {
        let mut editor = GraphEditor::new();
        let a = editor.add_node(0.0, 0.0);
        assert!(matches!(
            editor.add_edge(a, a, 1.0),
            Err(GraphstepError::SelfLoop { node: 1 })
        ));
    }

    #[test]
    fn test_rejects_unknown_node_and_bad_weight() {
        let mut editor = GraphEditor::new();
        let a = editor.add_node(0.0, 0.0);
        let b = editor.add_node(1.0, 0.0);
        assert!(matches!(
            editor.add_edge(a, 9, 1.0),
            Err(GraphstepError::NodeNotFound { id: 9 })
        ));
        assert!(matches!(
            editor.add_edge(a, b, f64::INFINITY),
            Err(GraphstepError::InvalidWeight { .. })
        ));
        assert!(editor.edges().is_empty());
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut editor = triangle_editor();
        editor.remove_node(2).unwrap();
        let ids: Vec<EdgeId> = editor.edges().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(editor.graph().is_ok());
    }

    #[test]
    fn test_move_node_is_seen_through_edges() {
        let mut editor = triangle_editor();
        editor.move_node(2, 50.0, 60.0).unwrap();
        let graph = editor.graph().unwrap();
        let (_, end) = graph.endpoints(&graph.edges()[0]).unwrap();
        assert_eq!((end.x, end.y), (50.0, 60.0));
    }

    #[test]
    fn test_edit_weight_and_delete_edge() {
        let mut editor = triangle_editor();
        editor.set_weight(2, 0.5).unwrap();
        assert_eq!(editor.edges()[2].weight, 0.5);
        editor.remove_edge(0).unwrap();
        assert_eq!(editor.edges().len(), 2);
        assert!(matches!(
            editor.remove_edge(0),
            Err(GraphstepError::EdgeNotFound { id: 0 })
        ));
    }

    #[test]
    fn test_run_replaces_previous_replay() {
        let mut editor = triangle_editor();
        editor.run(Algorithm::Dijkstra { source: 1 }).unwrap().advance();
        assert_eq!(editor.replay().unwrap().position(), 1);

        let replay = editor.run(Algorithm::Kruskal).unwrap();
        assert_eq!(replay.position(), 0);
        assert_eq!(replay.algorithm(), Algorithm::Kruskal);
        assert_eq!(editor.current_view().unwrap().selected_ids(), vec![0]);
    }

    #[test]
    fn test_edits_discard_replay_but_not_recorded_snapshots() {
        let mut editor = triangle_editor();
        let recorded = editor.run(Algorithm::Prim).unwrap().snapshots().clone();
        editor.move_node(1, -5.0, -5.0).unwrap();
        assert!(editor.replay().is_none());
        assert_eq!(recorded.first().unwrap().node(1).unwrap().x, 0.0);
    }

    #[test]
    fn test_failed_run_leaves_no_replay() {
        let mut editor = triangle_editor();
        editor.run(Algorithm::Prim).unwrap();
        assert!(editor.run(Algorithm::Dijkstra { source: 99 }).is_err());
        assert!(editor.replay().is_none());
    }

    #[test]
    fn test_live_nodes_stay_unflagged_after_run() {
        let mut editor = triangle_editor();
        editor.run(Algorithm::Prim).unwrap();
        assert!(editor.nodes().iter().all(|n| !n.visited));
        assert!(editor.edges().iter().all(|e| !e.selected));
    }
}
