//! Graph algorithm implementations
//!
//! Each engine takes an immutable graph, runs to completion, and returns the
//! ordered snapshots of its progress:
//! - `dijkstra`: single-source shortest paths
//! - `prim`: frontier-growth minimum spanning tree
//! - `kruskal`: sorted-edge minimum spanning forest
//! - `shared`: union-find and selection helpers used by the engines

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use dijkstra::dijkstra;
pub use kruskal::kruskal;
pub use prim::prim;

use crate::bail_usage;
use crate::error::{GraphstepError, Result};
use crate::graph::types::{Graph, NodeId};
use crate::snapshot::SnapshotSequence;

/// Engine selector without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// Single-source shortest paths
    Dijkstra,
    /// Spanning tree grown from the first node
    Prim,
    /// Spanning forest built from sorted edges
    Kruskal,
}

impl FromStr for AlgorithmKind {
    type Err = GraphstepError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            "prim" => Ok(AlgorithmKind::Prim),
            "kruskal" => Ok(AlgorithmKind::Kruskal),
            other => Err(GraphstepError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Dijkstra => write!(f, "dijkstra"),
            AlgorithmKind::Prim => write!(f, "prim"),
            AlgorithmKind::Kruskal => write!(f, "kruskal"),
        }
    }
}

/// A fully parameterized engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra { source: NodeId },
    Prim,
    Kruskal,
}

impl Algorithm {
    /// Combine an engine kind with its source node; only Dijkstra takes one
    pub fn new(kind: AlgorithmKind, source: Option<NodeId>) -> Result<Self> {
        match (kind, source) {
            (AlgorithmKind::Dijkstra, Some(source)) => Ok(Algorithm::Dijkstra { source }),
            (AlgorithmKind::Dijkstra, None) => Err(GraphstepError::MissingSource),
            (_, Some(_)) => bail_usage!(format!("{} does not take a source node", kind)),
            (AlgorithmKind::Prim, None) => Ok(Algorithm::Prim),
            (AlgorithmKind::Kruskal, None) => Ok(Algorithm::Kruskal),
        }
    }

    /// Engine name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra { .. } => "dijkstra",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Dijkstra { .. } => AlgorithmKind::Dijkstra,
            Algorithm::Prim => AlgorithmKind::Prim,
            Algorithm::Kruskal => AlgorithmKind::Kruskal,
        }
    }

    pub fn source(&self) -> Option<NodeId> {
        match self {
            Algorithm::Dijkstra { source } => Some(*source),
            _ => None,
        }
    }

    pub fn run(&self, graph: &Graph) -> Result<SnapshotSequence> {
        match self {
            Algorithm::Dijkstra { source } => dijkstra(graph, *source),
            Algorithm::Prim => prim(graph),
            Algorithm::Kruskal => kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra { source } => write!(f, "dijkstra(source={})", source),
            other => write!(f, "{}", other.kind()),
        }
    }
}
