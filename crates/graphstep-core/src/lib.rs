//! Graphstep Core Library
//!
//! Shortest-path and minimum-spanning-tree engines over a user-editable
//! weighted graph. Each engine records the ordered sequence of intermediate
//! graph states it passes through so a caller can replay the run step by step.

pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod replay;
pub mod snapshot;

pub use editor::GraphEditor;
pub use error::{GraphstepError, Result};
pub use graph::{dijkstra, kruskal, prim, Algorithm, Edge, EdgeId, Graph, Node, NodeId, Weight};
pub use replay::Replay;
pub use snapshot::{Snapshot, SnapshotSequence};
