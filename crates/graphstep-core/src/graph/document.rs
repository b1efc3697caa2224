//! Serialized graph documents
//!
//! A graph document is the on-disk shape of a graph handed to the engines:
//!
//! ```json
//! {
//!   "nodes": [{ "id": 1, "x": 40.0, "y": 60.0 }],
//!   "edges": [{ "from": 1, "to": 2, "weight": 3.5 }]
//! }
//! ```
//!
//! Edge ids are optional; missing ones are assigned in list order from the
//! lowest id not already taken.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{Edge, EdgeId, Graph, Node, NodeId, Weight};
use crate::error::{GraphstepError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: NodeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EdgeId>,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl GraphDocument {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a document from disk; `.toml` files are parsed as TOML, anything
    /// else as JSON
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphstepError::io_operation("read graph", path.display(), e))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the document and build a graph
    pub fn into_graph(self) -> Result<Graph> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|n| Node::new(n.id, n.x, n.y))
            .collect();

        let mut taken: HashSet<EdgeId> = self.edges.iter().filter_map(|e| e.id).collect();
        let mut next_free: EdgeId = 0;
        let mut edges = Vec::with_capacity(self.edges.len());
        for entry in self.edges {
            let id = match entry.id {
                Some(id) => id,
                None => {
                    while taken.contains(&next_free) {
                        next_free += 1;
                    }
                    taken.insert(next_free);
                    next_free
                }
            };
            edges.push(Edge::new(id, entry.from, entry.to, entry.weight));
        }

        Graph::new(nodes, edges)
    }
}

impl From<&Graph> for GraphDocument {
    fn from(graph: &Graph) -> Self {
        GraphDocument {
            nodes: graph
                .nodes()
                .iter()
                .map(|n| NodeEntry {
                    id: n.id,
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeEntry {
                    id: Some(e.id),
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
        }
    }
}
