use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::algos::shared::UnionFind;
use crate::ensure_weight;
use crate::error::{GraphstepError, Result};

/// Node identifier, assigned by the editor and never reused within a session
pub type NodeId = u32;

/// Edge identifier, unique within a graph
pub type EdgeId = u32;

/// Edge weight
pub type Weight = f64;

/// A graph node with its planar position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// Set by an algorithm when the node is part of its result so far
    #[serde(default)]
    pub visited: bool,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Node {
            id,
            x,
            y,
            visited: false,
        }
    }
}

/// An undirected weighted edge between two nodes
///
/// Endpoints are stored by id and resolved against the owning graph, so an
/// edge always follows its nodes' current positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
    /// Set by an algorithm when the edge is part of its result so far
    #[serde(default)]
    pub selected: bool,
}

impl Edge {
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, weight: Weight) -> Self {
        Edge {
            id,
            from,
            to,
            weight,
            selected: false,
        }
    }

    /// True if either endpoint is `node`
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, or `None` if the edge does not touch it
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// An undirected weighted graph
///
/// Node order and edge order are part of the input contract: Prim starts from
/// the first node, and every first-encountered tie-break follows these orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
}

impl Graph {
    /// Build a graph, rejecting malformed input
    ///
    /// Self-loops and parallel edges are accepted; engines treat self-loops as
    /// inert.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if index.insert(node.id, pos).is_some() {
                return Err(GraphstepError::DuplicateNode { id: node.id });
            }
        }

        let mut edge_ids = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if !edge_ids.insert(edge.id) {
                return Err(GraphstepError::DuplicateEdge { id: edge.id });
            }
            for endpoint in [edge.from, edge.to] {
                if !index.contains_key(&endpoint) {
                    return Err(GraphstepError::UnknownEndpoint {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
            ensure_weight!(edge.id, edge.weight);
        }

        Ok(Graph {
            nodes,
            edges,
            index,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a node in the caller-supplied node order
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.position_of(id).map(|pos| &self.nodes[pos])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Resolve an edge's endpoints against this graph's nodes
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(edge.from)?, self.node(edge.to)?))
    }

    /// Edges incident on `id` paired with the opposite endpoint, in edge order
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.edges
            .iter()
            .filter_map(move |edge| edge.other(id).map(|other| (other, edge)))
    }

    /// Node positions of each edge's endpoints, in edge order
    pub(crate) fn endpoint_positions(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .map(|e| (self.index[&e.from], self.index[&e.to]))
            .collect()
    }

    /// Sum of the weights of the given edges
    pub fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Weight {
        edges.into_iter().map(|e| e.weight).sum()
    }

    /// Number of connected components (isolated nodes count as one each)
    pub fn component_count(&self) -> usize {
        let mut sets = UnionFind::new(self.nodes.len());
        let mut components = self.nodes.len();
        for (a, b) in self.endpoint_positions() {
            if sets.union(a, b) {
                components -= 1;
            }
        }
        components
    }
}
