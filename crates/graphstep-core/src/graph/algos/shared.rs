//! Utilities shared by the graph engines

use crate::graph::types::Edge;

/// Disjoint-set forest over node positions, with path compression and union
/// by rank
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`; false if they were already one set
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }

        true
    }
}

/// Lightest edge among the candidates; the first one wins ties
pub fn min_by_weight<'a, I>(candidates: I) -> Option<(usize, &'a Edge)>
where
    I: IntoIterator<Item = (usize, &'a Edge)>,
{
    candidates.into_iter().fold(None, |best, (pos, edge)| match best {
        Some((_, current)) if current.weight <= edge.weight => best,
        _ => Some((pos, edge)),
    })
}

/// Position of the closest node still waiting to be settled
///
/// Scans in node order and keeps the first strict minimum. Returns `None`
/// once every remaining node is unreachable.
pub fn closest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (pos, &distance) in distances.iter().enumerate() {
        if settled[pos] || !distance.is_finite() {
            continue;
        }
        match best {
            Some(current) if distances[current] <= distance => {}
            _ => best = Some(pos),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_merges_and_detects_cycles() {
        let mut sets = UnionFind::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));
        assert_eq!(sets.find(0), sets.find(3));
    }

    #[test]
    fn test_union_find_singletons() {
        let mut sets = UnionFind::new(3);
        assert_ne!(sets.find(0), sets.find(1));
        assert_eq!(sets.find(2), 2);
    }

    #[test]
    fn test_min_by_weight_first_wins_ties() {
        let edges = [
            Edge::new(0, 1, 2, 3.0),
            Edge::new(1, 2, 3, 1.0),
            Edge::new(2, 3, 4, 1.0),
        ];
        let (pos, edge) = min_by_weight(edges.iter().enumerate()).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(edge.id, 1);
        assert!(min_by_weight(std::iter::empty()).is_none());
    }

    #[test]
    fn test_closest_unsettled() {
        let inf = f64::INFINITY;
        assert_eq!(
            closest_unsettled(&[0.0, 2.0, 2.0], &[true, false, false]),
            Some(1)
        );
        assert_eq!(closest_unsettled(&[0.0, inf], &[true, false]), None);
        assert_eq!(closest_unsettled(&[], &[]), None);
    }
}
