//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph, engine precondition not met)

mod macros;

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or failed engine precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphstep operations
#[derive(Error, Debug)]
pub enum GraphstepError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dijkstra, prim, or kruskal)")]
    UnknownAlgorithm(String),

    #[error("dijkstra requires a source node (--source)")]
    MissingSource,

    #[error("{0}")]
    UsageError(String),

    // Engine preconditions (exit code 3)
    #[error("source node {id} is not in the graph")]
    InvalidSource { id: NodeId },

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("graph is disconnected: spanning tree reached {visited} of {total} nodes")]
    DisconnectedGraph { visited: usize, total: usize },

    // Model errors (exit code 3)
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: NodeId },

    #[error("duplicate edge id: {id}")]
    DuplicateEdge { id: EdgeId },

    #[error("edge {edge} references unknown node {node}")]
    UnknownEndpoint { edge: EdgeId, node: NodeId },

    #[error("edge {edge} has invalid weight: {weight}")]
    InvalidWeight { edge: EdgeId, weight: f64 },

    #[error("cannot create an edge from node {node} to itself")]
    SelfLoop { node: NodeId },

    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("edge not found: {id}")]
    EdgeNotFound { id: EdgeId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),

    #[error("replay interrupted")]
    Interrupted,
}

impl GraphstepError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphstepError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphstepError::UnknownFormat(_)
            | GraphstepError::UnknownAlgorithm(_)
            | GraphstepError::MissingSource
            | GraphstepError::UsageError(_) => ExitCode::Usage,

            GraphstepError::InvalidSource { .. }
            | GraphstepError::EmptyGraph
            | GraphstepError::DisconnectedGraph { .. }
            | GraphstepError::DuplicateNode { .. }
            | GraphstepError::DuplicateEdge { .. }
            | GraphstepError::UnknownEndpoint { .. }
            | GraphstepError::InvalidWeight { .. }
            | GraphstepError::SelfLoop { .. }
            | GraphstepError::NodeNotFound { .. }
            | GraphstepError::EdgeNotFound { .. } => ExitCode::Data,

            GraphstepError::Io(_)
            | GraphstepError::Json(_)
            | GraphstepError::Toml(_)
            | GraphstepError::TomlSerialize(_)
            | GraphstepError::Other(_)
            | GraphstepError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphstepError::UnknownFormat(_) => "unknown_format",
            GraphstepError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphstepError::MissingSource => "missing_source",
            GraphstepError::UsageError(_) => "usage_error",
            GraphstepError::InvalidSource { .. } => "invalid_source",
            GraphstepError::EmptyGraph => "empty_graph",
            GraphstepError::DisconnectedGraph { .. } => "disconnected_graph",
            GraphstepError::DuplicateNode { .. } => "duplicate_node",
            GraphstepError::DuplicateEdge { .. } => "duplicate_edge",
            GraphstepError::UnknownEndpoint { .. } => "unknown_endpoint",
            GraphstepError::InvalidWeight { .. } => "invalid_weight",
            GraphstepError::SelfLoop { .. } => "self_loop",
            GraphstepError::NodeNotFound { .. } => "node_not_found",
            GraphstepError::EdgeNotFound { .. } => "edge_not_found",
            GraphstepError::Io(_) => "io_error",
            GraphstepError::Json(_) => "json_error",
            GraphstepError::Toml(_) | GraphstepError::TomlSerialize(_) => "toml_error",
            GraphstepError::Other(_) => "other",
            GraphstepError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphstepError>;
