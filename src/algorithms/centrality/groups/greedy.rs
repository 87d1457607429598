use super::closeness::group_closeness_centrality;
use crate::{Error, ErrorKind, Graph};
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/**
Greedily build a group of `k` nodes that maximizes group closeness
centrality.

At each of the `k` steps, every node not yet in the group is tried as a
candidate addition and the one yielding the highest group closeness is kept;
ties are broken by picking the node with the smallest id. This is the
straightforward `O(k * V * (V+E))` variant: marginal gains are recomputed
from scratch on every step rather than cached or pruned, since any
implementation that converges on the same selected set for a given
tie-breaking rule is an acceptable greedy maximizer.

# Arguments

* `graph`: a Graph instance
* `k`: the size of the group to build
* `weighted`: if true, use edge weights; if false, treat all edges as weight 1

# References

1. M G Everett and S P Borgatti: The Centrality of Groups and Classes.
   Journal of Mathematical Sociology. 23(3): 181-201. 1999.
*/
pub fn max_coverage_greedy<T, A>(
    graph: &Graph<T, A>,
    k: usize,
    weighted: bool,
) -> Result<HashSet<T>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let mut all_nodes: Vec<T> = graph
        .get_all_nodes()
        .iter()
        .map(|n| n.name.clone())
        .collect();
    all_nodes.sort();
    let n = all_nodes.len();

    if n == 0 {
        return Err(Error {
            kind: ErrorKind::EmptyGraph,
            message: "The graph has no nodes".to_string(),
        });
    }
    if k == 0 || k >= n {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`k` must be between 1 and {} (exclusive)", n),
        });
    }

    let mut group: HashSet<T> = HashSet::new();

    for _ in 0..k {
        let mut best_candidate: Option<T> = None;
        let mut best_value = f64::NEG_INFINITY;

        // `all_nodes` is sorted ascending, so the first candidate to strictly
        // beat `best_value` is also the smallest-id winner of any tie.
        for candidate in &all_nodes {
            if group.contains(candidate) {
                continue;
            }
            let mut trial = group.clone();
            trial.insert(candidate.clone());
            let value = group_closeness_centrality(graph, &trial, weighted)?;
            if value > best_value {
                best_value = value;
                best_candidate = Some(candidate.clone());
            }
        }

        match best_candidate {
            Some(node) => {
                group.insert(node);
            }
            None => break,
        }
    }

    Ok(group)
}
