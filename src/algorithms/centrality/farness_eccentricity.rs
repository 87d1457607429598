#![allow(non_snake_case)]

use crate::Graph;
use nohash::{IntMap, IntSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/**
Returns the node-indexed BFS distances from `source`, reachable nodes only.

When `as_undirected` is `true`, a directed graph's edge directions are
ignored by expanding the frontier over both successors and predecessors of
each node; for an already-undirected graph this has no effect, since
successors already hold both edge endpoints.

Grounded in the teacher's `single_source_shortest_path_length_unweighted`.
*/
fn bfs_distances<T, A>(
    graph: &Graph<T, A>,
    source: usize,
    as_undirected: bool,
) -> IntMap<usize, f64>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let mut seen = IntMap::default();
    let mut level = 0.0;
    let mut next_level = IntSet::default();
    next_level.insert(source);
    while !next_level.is_empty() {
        let mut found = vec![];
        for v in next_level.clone() {
            if !seen.contains_key(&v) {
                seen.insert(v, level);
                found.push(v);
            }
        }
        next_level.clear();
        for v in found {
            for w in graph.get_successor_nodes_by_index(&v) {
                next_level.insert(w.node_index);
            }
            if as_undirected {
                for w in graph.get_predecessor_nodes_by_index(&v) {
                    next_level.insert(w.node_index);
                }
            }
        }
        level += 1.0;
    }
    seen
}

/**
Farness of a node: the average unweighted shortest-path distance to all
nodes reachable from it.

If `nid` reaches no other node, returns `0.0`. If `normalized`, scales by
`(N-1) / (|R|-1)` where `R` is the set of reachable nodes, so a node isolated
in a small component doesn't appear falsely central.

# Examples

```
use graphrs::{algorithms::centrality::farness_eccentricity, generators};
let graph = generators::social::karate_club_graph();
let f = farness_eccentricity::farness(&graph, &0, false);
```
*/
pub fn farness<T, A>(graph: &Graph<T, A>, nid: &T, normalized: bool) -> f64
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let source = match graph.get_node_index(nid) {
        Ok(i) => i,
        Err(_) => return 0.0,
    };
    let distances = bfs_distances(graph, source, false);
    let reachable = distances.len();
    if reachable <= 1 {
        return 0.0;
    }
    let sum: f64 = distances.values().sum();
    let mut f = sum / (reachable as f64 - 1.0);
    if normalized {
        let n = graph.number_of_nodes() as f64;
        f *= (n - 1.0) / (reachable as f64 - 1.0);
    }
    f
}

/**
Closeness of a node: the reciprocal of its farness, or `0.0` when the
farness is `0.0`.
*/
pub fn closeness<T, A>(graph: &Graph<T, A>, nid: &T, normalized: bool) -> f64
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let f = farness(graph, nid, normalized);
    match f == 0.0 {
        true => 0.0,
        false => 1.0 / f,
    }
}

/**
Eccentricity of a node: the maximum shortest-path distance from `nid` to any
node it reaches. When `as_undirected` is `true`, edge directions are ignored
by expanding the BFS frontier over both successors and predecessors of each
node, rather than requiring the caller to pass an already-undirected graph.
*/
pub fn eccentricity<T, A>(graph: &Graph<T, A>, nid: &T, as_undirected: bool) -> f64
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let source = match graph.get_node_index(nid) {
        Ok(i) => i,
        Err(_) => return 0.0,
    };
    let distances = bfs_distances(graph, source, as_undirected);
    distances.values().cloned().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{Edge, Graph, GraphSpecs, Node};

    fn path_graph_5() -> Graph<i32, ()> {
        let nodes = (0..5).map(|i| Node::from_name(i).into()).collect();
        let edges = vec![
            Edge::new(0, 1).into(),
            Edge::new(1, 2).into(),
            Edge::new(2, 3).into(),
            Edge::new(3, 4).into(),
        ];
        Graph::new_from_nodes_and_edges(nodes, edges, GraphSpecs::undirected()).unwrap()
    }

    #[test]
    fn test_farness_path_graph() {
        // path graph 0-1-2-3-4, farness(2) = (1+1+2+2)/4 = 1.5.
        let graph = path_graph_5();
        let f = farness(&graph, &2, false);
        assert_eq!(f, 1.5);
    }

    #[test]
    fn test_closeness_is_reciprocal_of_farness() {
        let graph = path_graph_5();
        let f = farness(&graph, &2, false);
        let c = closeness(&graph, &2, false);
        assert!((c * f - 1.0).abs() < 1e-9);
    }
}
