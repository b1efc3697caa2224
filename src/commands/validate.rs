//! `graphstep validate` - check a graph document and summarize it

use std::collections::HashSet;
use std::path::Path;

use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use graphstep_core::graph::{Graph, NodeId};

use super::dispatch::CommandContext;

/// Structural facts about a graph that affect how the engines behave on it
#[derive(Debug, PartialEq)]
struct GraphSummary {
    nodes: usize,
    edges: usize,
    self_loops: usize,
    parallel_edges: usize,
    components: usize,
}

impl GraphSummary {
    fn of(graph: &Graph) -> Self {
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut parallel_edges = 0;
        for edge in graph.edges() {
            let key = (edge.from.min(edge.to), edge.from.max(edge.to));
            if !seen.insert(key) {
                parallel_edges += 1;
            }
        }

        GraphSummary {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            self_loops: graph.edges().iter().filter(|e| e.is_self_loop()).count(),
            parallel_edges,
            components: graph.component_count(),
        }
    }

    fn connected(&self) -> bool {
        self.components == 1
    }
}

/// Execute the validate command
pub fn execute(ctx: &CommandContext, path: &Path) -> Result<()> {
    let graph = ctx.load_graph(path)?;
    let summary = GraphSummary::of(&graph);

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "nodes": summary.nodes,
                "edges": summary.edges,
                "self_loops": summary.self_loops,
                "parallel_edges": summary.parallel_edges,
                "components": summary.components,
                "connected": summary.connected(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphstep=1 mode=validate nodes={} edges={} self_loops={} parallel_edges={} components={}",
                summary.nodes,
                summary.edges,
                summary.self_loops,
                summary.parallel_edges,
                summary.components
            );
        }
        OutputFormat::Human => {
            println!(
                "{}: {} nodes, {} edges",
                path.display(),
                summary.nodes,
                summary.edges
            );
            if !ctx.cli.quiet {
                if summary.self_loops > 0 {
                    println!("  {} self-loop(s), ignored by every engine", summary.self_loops);
                }
                if summary.parallel_edges > 0 {
                    println!("  {} parallel edge(s)", summary.parallel_edges);
                }
                if !summary.connected() && summary.nodes > 0 {
                    println!(
                        "  {} components: prim will fail, kruskal yields a spanning forest",
                        summary.components
                    );
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstep_core::graph::{Edge, Node};

    #[test]
    fn test_summary_counts_parallel_edges_and_loops() {
        let graph = Graph::new(
            vec![
                Node::new(1, 0.0, 0.0),
                Node::new(2, 0.0, 0.0),
                Node::new(3, 0.0, 0.0),
            ],
            vec![
                Edge::new(0, 1, 2, 1.0),
                Edge::new(1, 2, 1, 2.0),
                Edge::new(2, 3, 3, 1.0),
            ],
        )
        .unwrap();

        assert_eq!(
            GraphSummary::of(&graph),
            GraphSummary {
                nodes: 3,
                edges: 3,
                self_loops: 1,
                parallel_edges: 1,
                components: 2,
            }
        );
    }
}
