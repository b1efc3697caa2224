//! Weighted graph model and replayable graph algorithms
//!
//! - `types`: Node, Edge and Graph value types
//! - `document`: serde representation for reading graphs from JSON/TOML
//! - `algos`: Dijkstra, Prim and Kruskal engines producing snapshot sequences

pub mod algos;
pub mod document;
pub mod types;

pub use algos::{dijkstra, kruskal, prim, Algorithm};
pub use document::GraphDocument;
pub use types::{Edge, EdgeId, Graph, Node, NodeId, Weight};
