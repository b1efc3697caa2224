use super::*;
use crate::graph::types::{Edge, EdgeId, Node};
use std::collections::HashMap;

fn nodes(ids: &[NodeId]) -> Vec<Node> {
    ids.iter()
        .map(|&id| Node::new(id, id as f64, id as f64 * 2.0))
        .collect()
}

fn triangle() -> Graph {
    Graph::new(
        nodes(&[1, 2, 3]),
        vec![
            Edge::new(0, 1, 2, 1.0),
            Edge::new(1, 2, 3, 2.0),
            Edge::new(2, 1, 3, 5.0),
        ],
    )
    .unwrap()
}

/// All-pairs shortest distances by Floyd-Warshall, keyed by node id
fn brute_force_distances(graph: &Graph) -> HashMap<(NodeId, NodeId), f64> {
    let ids: Vec<NodeId> = graph.nodes().iter().map(|n| n.id).collect();
    let n = ids.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in graph.edges() {
        let a = graph.position_of(edge.from).unwrap();
        let b = graph.position_of(edge.to).unwrap();
        if edge.weight < dist[a][b] {
            dist[a][b] = edge.weight;
            dist[b][a] = edge.weight;
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }

    let mut out = HashMap::new();
    for (i, &a) in ids.iter().enumerate() {
        for (j, &b) in ids.iter().enumerate() {
            out.insert((a, b), dist[i][j]);
        }
    }
    out
}

/// Walk the selected edges outward from `source`, returning each reached
/// node's path weight. Panics if the selection is not a tree.
fn tree_distances(graph: &Graph, selected: &[EdgeId], source: NodeId) -> HashMap<NodeId, f64> {
    let mut reached = HashMap::from([(source, 0.0)]);
    let mut frontier = vec![source];
    let mut used = 0;
    while let Some(current) = frontier.pop() {
        for &edge_id in selected {
            let edge = graph.edge(edge_id).unwrap();
            let Some(next) = edge.other(current) else {
                continue;
            };
            if reached.contains_key(&next) {
                continue;
            }
            let distance = reached[&current] + edge.weight;
            reached.insert(next, distance);
            frontier.push(next);
            used += 1;
        }
    }
    assert_eq!(used, selected.len(), "selected edges do not form a tree");
    reached
}

/// Five-node graph generator driven by a simple xorshift sequence
fn five_node_graph(seed: u64) -> Graph {
    let mut state = seed.wrapping_mul(2654435761).max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut edges = Vec::new();
    for a in 1..=5u32 {
        for b in (a + 1)..=5u32 {
            if next() % 3 != 0 {
                edges.push(Edge::new(edges.len() as EdgeId, a, b, (next() % 9) as f64));
            }
        }
    }
    Graph::new(nodes(&[1, 2, 3, 4, 5]), edges).unwrap()
}

#[test]
fn test_dijkstra_triangle_scenario() {
    let graph = triangle();
    let seq = dijkstra(&graph, 1).unwrap();

    // 1-2 is relaxed first, then 1-3 provisionally, then 2-3 replaces it
    assert_eq!(seq.len(), 3);

    let first = seq.first().unwrap();
    assert_eq!(first.visited_ids(), vec![1, 2]);
    assert_eq!(first.selected_ids(), vec![0]);

    let second = seq.get(1).unwrap();
    assert_eq!(second.selected_ids(), vec![0, 2]);

    let last = seq.last().unwrap();
    assert_eq!(last.visited_ids(), vec![1, 2, 3]);
    assert_eq!(last.selected_ids(), vec![0, 1]);
    assert_eq!(last.selected_weight(), 3.0);
}

#[test]
fn test_dijkstra_invalid_source() {
    let err = dijkstra(&triangle(), 42).unwrap_err();
    assert!(matches!(err, GraphstepError::InvalidSource { id: 42 }));
}

#[test]
fn test_dijkstra_single_node_is_empty() {
    let graph = Graph::new(nodes(&[1]), vec![]).unwrap();
    assert!(dijkstra(&graph, 1).unwrap().is_empty());
}

#[test]
fn test_dijkstra_isolated_source_is_empty() {
    let graph = Graph::new(nodes(&[1, 2, 3]), vec![Edge::new(0, 2, 3, 1.0)]).unwrap();
    assert!(dijkstra(&graph, 1).unwrap().is_empty());
}

#[test]
fn test_dijkstra_unreachable_nodes_stay_unvisited() {
    let graph = Graph::new(
        nodes(&[1, 2, 3, 4]),
        vec![Edge::new(0, 1, 2, 3.0), Edge::new(1, 3, 4, 1.0)],
    )
    .unwrap();

    let seq = dijkstra(&graph, 1).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.last().unwrap().visited_ids(), vec![1, 2]);
    assert_eq!(seq.last().unwrap().selected_ids(), vec![0]);
}

#[test]
fn test_dijkstra_self_loop_is_inert() {
    let graph = Graph::new(
        nodes(&[1, 2]),
        vec![Edge::new(0, 1, 1, 0.0), Edge::new(1, 1, 2, 2.0)],
    )
    .unwrap();

    let seq = dijkstra(&graph, 1).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.last().unwrap().selected_ids(), vec![1]);
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let graph = Graph::new(
        nodes(&[1, 2, 3]),
        vec![Edge::new(0, 1, 2, 0.0), Edge::new(1, 2, 3, 0.0)],
    )
    .unwrap();

    let seq = dijkstra(&graph, 2).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.last().unwrap().selected_weight(), 0.0);
    assert_eq!(seq.last().unwrap().visited_ids(), vec![1, 2, 3]);
}

#[test]
fn test_dijkstra_parallel_edges_keep_lightest() {
    let graph = Graph::new(
        nodes(&[1, 2]),
        vec![Edge::new(0, 1, 2, 4.0), Edge::new(1, 2, 1, 1.5)],
    )
    .unwrap();

    let seq = dijkstra(&graph, 1).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.get(0).unwrap().selected_ids(), vec![0]);
    assert_eq!(seq.last().unwrap().selected_ids(), vec![1]);
}

#[test]
fn test_dijkstra_tree_matches_brute_force() {
    for seed in 1..60 {
        let graph = five_node_graph(seed);
        let truth = brute_force_distances(&graph);
        for source in 1..=5 {
            let seq = dijkstra(&graph, source).unwrap();
            let selected = seq
                .last()
                .map(|s| s.selected_ids())
                .unwrap_or_default();
            let reached = tree_distances(&graph, &selected, source);

            for target in 1..=5 {
                let expected = truth[&(source, target)];
                match reached.get(&target) {
                    Some(&distance) => {
                        assert_eq!(distance, expected, "seed {} {}->{}", seed, source, target)
                    }
                    None => assert!(
                        expected.is_infinite(),
                        "seed {} {}->{} unreached",
                        seed,
                        source,
                        target
                    ),
                }
            }
        }
    }
}

#[test]
fn test_dijkstra_selection_count_never_shrinks() {
    for seed in 1..30 {
        let graph = five_node_graph(seed);
        let seq = dijkstra(&graph, 1).unwrap();
        for pair in seq.as_slice().windows(2) {
            assert!(pair[0].selected_ids().len() <= pair[1].selected_ids().len());
            for (before, after) in pair[0].nodes().iter().zip(pair[1].nodes()) {
                assert!(!before.visited || after.visited);
            }
        }
    }
}

#[test]
fn test_dijkstra_snapshots_carry_positions() {
    let seq = dijkstra(&triangle(), 1).unwrap();
    let snap = seq.first().unwrap();
    let (a, b) = snap.endpoints(snap.edge(0).unwrap()).unwrap();
    assert_eq!((a.x, a.y), (1.0, 2.0));
    assert_eq!((b.x, b.y), (2.0, 4.0));
}
