use super::power_iteration::PowerIterationResult;
use crate::{Error, ErrorKind, Graph};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Above this many nodes, and when more than one `rayon` thread is available,
/// the per-vertex update loop runs in parallel.
const PARALLEL_THRESHOLD: usize = 1000;

/**
Compute PageRank centrality for nodes, using power iteration.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `weighted`: set to `true` to weight each predecessor's contribution by its
edge weight rather than treating every out-edge equally; returns
`Err(ErrorKind::EdgeWeightNotSpecified)` if `true` and the graph has no
edge weights set
* `damping`: the damping factor `C`; use `None` for the default of `0.85`
* `max_iter`: the maximum number of iterations; use `None` for the default
of `100`
* `tolerance`: the `L1` convergence tolerance; use `None` for the default
of `1e-4`
* `parallel`: compute the per-vertex update in parallel via `rayon` when the
graph is large enough

# Examples

```
use graphrs::{algorithms::{centrality::{pagerank}}, generators};
let graph = generators::social::karate_club_graph();
let result = pagerank::pagerank_centrality(&graph, false, None, None, None, false).unwrap();
assert!(result.converged);
```

# References

1. Sergey Brin and Lawrence Page. "The Anatomy of a Large-Scale Hypertextual
Web Search Engine." Computer Networks and ISDN Systems, 30(1-7):107-117, 1998.
*/
pub fn pagerank_centrality<T, A>(
    graph: &Graph<T, A>,
    weighted: bool,
    damping: Option<f64>,
    max_iter: Option<u32>,
    tolerance: Option<f64>,
    parallel: bool,
) -> Result<PowerIterationResult<T>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let n = graph.number_of_nodes();
    if n == 0 {
        return Ok(PowerIterationResult {
            scores: HashMap::new(),
            converged: true,
            iterations: 0,
        });
    }
    if weighted && !graph.edges_have_weight() {
        return Err(Error {
            kind: ErrorKind::EdgeWeightNotSpecified,
            message: "Not all edges in the graph have a weight.".to_string(),
        });
    }

    let damping = damping.unwrap_or(0.85);
    let max_iter = max_iter.unwrap_or(100);
    let tolerance = tolerance.unwrap_or(1e-4);
    let run_parallel = parallel && n > PARALLEL_THRESHOLD && rayon::current_num_threads() > 1;

    let out_mass: Vec<f64> = (0..n)
        .map(|u| {
            if weighted {
                graph
                    .get_successor_nodes_by_index(&u)
                    .iter()
                    .map(|s| s.weight)
                    .sum()
            } else {
                graph.get_successor_nodes_by_index(&u).len() as f64
            }
        })
        .collect();

    let mut rank = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut converged = max_iter == 0;

    for i in 0..max_iter {
        iterations = i + 1;
        let compute_tmp = |v: usize| -> f64 {
            let sum: f64 = graph
                .get_predecessor_nodes_by_index(&v)
                .iter()
                .map(|pred| {
                    let u = pred.node_index;
                    if out_mass[u] == 0.0 {
                        0.0
                    } else {
                        let w = if weighted { pred.weight } else { 1.0 };
                        w * rank[u] / out_mass[u]
                    }
                })
                .sum();
            damping * sum
        };
        let tmp: Vec<f64> = if run_parallel {
            (0..n).into_par_iter().map(compute_tmp).collect()
        } else {
            (0..n).map(compute_tmp).collect()
        };
        let tmp_sum: f64 = if run_parallel {
            tmp.par_iter().sum()
        } else {
            tmp.iter().sum()
        };
        let leaked = (1.0 - tmp_sum) / n as f64;
        let new_rank: Vec<f64> = tmp.iter().map(|t| t + leaked).collect();
        let diff: f64 = if run_parallel {
            new_rank
                .par_iter()
                .zip(rank.par_iter())
                .map(|(a, b)| (a - b).abs())
                .sum()
        } else {
            new_rank
                .iter()
                .zip(rank.iter())
                .map(|(a, b)| (a - b).abs())
                .sum()
        };
        rank = new_rank;
        if diff < tolerance {
            converged = true;
            break;
        }
    }

    let scores = (0..n)
        .map(|i| (graph.get_node_by_index(&i).unwrap().name.clone(), rank[i]))
        .collect();
    Ok(PowerIterationResult {
        scores,
        converged,
        iterations,
    })
}

/**
Supplies the type information the multi-type-node PageRank variant needs to
lay ranks and out-degrees out as `[type_id][local_id]` instead of a flat
node index.

Implement this for whatever side table a caller maintains mapping node ids
to a type partition; `Graph<T, A>` itself carries no notion of node types.
*/
pub trait TypedNodes<T> {
    /// The largest type id in use (types are `0..=max_type_id`).
    fn max_type_id(&self) -> usize;
    /// The type that `node` belongs to.
    fn type_of(&self, node: &T) -> usize;
    /// The id of `node` within its type's local id space.
    fn local_id_of(&self, node: &T) -> usize;
    /// The largest local id in use for `type_id` (local ids are `0..=max_local_id_of_type(type_id)`).
    fn max_local_id_of_type(&self, type_id: usize) -> usize;
}

/**
Compute PageRank over a graph whose nodes are partitioned into types, laying
ranks and out-degrees out as `[type_id][local_id]` rather than by a single
flat node index.

This mirrors `pagerank_centrality` exactly, except every per-node quantity
is addressed by `(type_id, local_id)` instead of a compact node index, so
that sparse, type-segmented id spaces don't require a dense `MaxId+1`
vector.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `typed_nodes`: a [TypedNodes] implementation describing the type
partition of `graph`'s nodes
* `damping`: the damping factor `C`; use `None` for the default of `0.85`
* `max_iter`: the maximum number of iterations; use `None` for the default
of `100`
* `tolerance`: the `L1` convergence tolerance; use `None` for the default
of `1e-4`

# References

1. Based on the `GetPageRankMNetMP` multi-type PageRank variant.
*/
pub fn pagerank_centrality_multi_type<T, A, N>(
    graph: &Graph<T, A>,
    typed_nodes: &N,
    damping: Option<f64>,
    max_iter: Option<u32>,
    tolerance: Option<f64>,
) -> Result<PowerIterationResult<T>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
    N: TypedNodes<T>,
{
    let n = graph.number_of_nodes();
    if n == 0 {
        return Ok(PowerIterationResult {
            scores: HashMap::new(),
            converged: true,
            iterations: 0,
        });
    }

    let damping = damping.unwrap_or(0.85);
    let max_iter = max_iter.unwrap_or(100);
    let tolerance = tolerance.unwrap_or(1e-4);

    let num_types = typed_nodes.max_type_id() + 1;
    let type_sizes: Vec<usize> = (0..num_types)
        .map(|t| typed_nodes.max_local_id_of_type(t) + 1)
        .collect();

    // (type_id, local_id) for every node, indexed by flat node index.
    let node_cells: Vec<(usize, usize)> = (0..n)
        .map(|i| {
            let name = &graph.get_node_by_index(&i).unwrap().name;
            (typed_nodes.type_of(name), typed_nodes.local_id_of(name))
        })
        .collect();

    let mut rank: Vec<Vec<f64>> = type_sizes.iter().map(|&sz| vec![1.0 / n as f64; sz]).collect();
    let mut out_mass: Vec<Vec<f64>> = type_sizes.iter().map(|&sz| vec![0.0; sz]).collect();
    for i in 0..n {
        let (t, l) = node_cells[i];
        out_mass[t][l] = graph.get_successor_nodes_by_index(&i).len() as f64;
    }

    let mut iterations = 0;
    let mut converged = max_iter == 0;

    for iter in 0..max_iter {
        iterations = iter + 1;
        let mut tmp: Vec<Vec<f64>> = type_sizes.iter().map(|&sz| vec![0.0; sz]).collect();
        for v in 0..n {
            let sum: f64 = graph
                .get_predecessor_nodes_by_index(&v)
                .iter()
                .map(|pred| {
                    let u = pred.node_index;
                    let (ut, ul) = node_cells[u];
                    if out_mass[ut][ul] == 0.0 {
                        0.0
                    } else {
                        rank[ut][ul] / out_mass[ut][ul]
                    }
                })
                .sum();
            let (vt, vl) = node_cells[v];
            tmp[vt][vl] = damping * sum;
        }
        let tmp_sum: f64 = tmp.iter().flatten().sum();
        let leaked = (1.0 - tmp_sum) / n as f64;
        let mut new_rank = tmp;
        // Only live `(type, local)` cells hold a node; touching the rest
        // would feed spurious mass into cells no node ever reads.
        for &(t, l) in &node_cells {
            new_rank[t][l] += leaked;
        }
        let diff: f64 = node_cells
            .iter()
            .map(|&(t, l)| (new_rank[t][l] - rank[t][l]).abs())
            .sum();
        rank = new_rank;
        if diff < tolerance {
            converged = true;
            break;
        }
    }

    let scores = (0..n)
        .map(|i| {
            let (t, l) = node_cells[i];
            (graph.get_node_by_index(&i).unwrap().name.clone(), rank[t][l])
        })
        .collect();
    Ok(PowerIterationResult {
        scores,
        converged,
        iterations,
    })
}
