use crate::Graph;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/**
The hub and authority scores produced by [hits_centrality].
*/
#[derive(Debug, Clone)]
pub struct HitsResult<T>
where
    T: Hash + Eq,
{
    /// The hub score for each node.
    pub hub: HashMap<T, f64>,
    /// The authority score for each node.
    pub authority: HashMap<T, f64>,
    /// The number of iterations performed.
    pub iterations: u32,
}

/**
Compute HITS (Hyperlink-Induced Topic Search) hub and authority scores.

Unlike PageRank and eigenvector centrality, HITS runs for a fixed number of
iterations rather than until an epsilon-based convergence test passes: each
phase is renormalized to unit `L2` norm immediately after it is computed, so
repeating the two-phase update does not diverge and a fixed iteration count
is sufficient in practice.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `max_iter`: the number of iterations to run; use `None` for the default of `100`

# Examples

```
use graphrs::{algorithms::{centrality::{hits}}, generators};
let graph = generators::social::karate_club_graph();
let result = hits::hits_centrality(&graph, None);
```

# References

1. Jon M. Kleinberg. "Authoritative Sources in a Hyperlinked Environment."
Journal of the ACM, 46(5):604-632, 1999.
*/
pub fn hits_centrality<T, A>(graph: &Graph<T, A>, max_iter: Option<u32>) -> HitsResult<T>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let n = graph.number_of_nodes();
    let max_iter = max_iter.unwrap_or(100);

    let mut hub = vec![1.0; n];
    let mut auth = vec![1.0; n];
    let mut iterations = 0;

    for i in 0..max_iter {
        iterations = i + 1;

        let mut auth_new: Vec<f64> = (0..n)
            .map(|v| {
                graph
                    .get_predecessor_nodes_by_index(&v)
                    .iter()
                    .map(|pred| hub[pred.node_index])
                    .sum()
            })
            .collect();
        l2_normalize(&mut auth_new);

        let mut hub_new: Vec<f64> = (0..n)
            .map(|v| {
                graph
                    .get_successor_nodes_by_index(&v)
                    .iter()
                    .map(|succ| auth_new[succ.node_index])
                    .sum()
            })
            .collect();
        l2_normalize(&mut hub_new);

        auth = auth_new;
        hub = hub_new;
    }

    l2_normalize(&mut auth);
    l2_normalize(&mut hub);

    let hub_map = (0..n)
        .map(|i| (graph.get_node_by_index(&i).unwrap().name.clone(), hub[i]))
        .collect();
    let auth_map = (0..n)
        .map(|i| (graph.get_node_by_index(&i).unwrap().name.clone(), auth[i]))
        .collect();

    HitsResult {
        hub: hub_map,
        authority: auth_map,
        iterations,
    }
}

fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
