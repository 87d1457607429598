#![allow(non_snake_case)]

use super::fringe_node::{push_fringe_node, FringeNode};
use crate::{Error, ErrorKind, Graph};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::iter::*;
use rayon::prelude::ParallelIterator;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

struct SingleSourceResults {
    S: Vec<usize>,
    P: Vec<Vec<usize>>,
    sigma: Vec<f64>,
    source: usize,
}

/**
Compute the shortest-path (Dijkstra) betweenness centrality for nodes.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `weighted`: set to `true` to use edge weights when computing the betweenness centrality
* `normalized`: set to `true` to normalize the node centrality values
* `parallel`: set to `true` to compute in parallel

# Examples

```
use graphrs::{algorithms::{centrality::{betweenness}}, generators};
let graph = generators::social::karate_club_graph();
let centralities = betweenness::betweenness_centrality(&graph, false, true);
```

# References

1. Ulrik Brandes: A Faster Algorithm for Betweenness Centrality. Journal of Mathematical Sociology 25(2):163-177, 2001.
*/
pub fn betweenness_centrality<T, A>(
    graph: &Graph<T, A>,
    weighted: bool,
    normalized: bool,
) -> Result<HashMap<T, f64>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let sources: Vec<usize> = (0..graph.number_of_nodes()).collect();
    let (node_betweenness, _) = compute(graph, &sources, weighted, true, false);
    let mut node_betweenness = node_betweenness.unwrap();
    rescale(
        &mut node_betweenness,
        graph.get_all_nodes().len(),
        normalized,
        graph.specs.directed,
    );
    Ok(to_node_map(graph, &node_betweenness))
}

/**
Compute the shortest-path (Dijkstra) betweenness centrality for edges.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `weighted`: set to `true` to use edge weights when computing the betweenness centrality
* `normalized`: set to `true` to normalize the edge centrality values

# Examples

```
use graphrs::{algorithms::{centrality::{betweenness}}, generators};
let graph = generators::social::karate_club_graph();
let centralities = betweenness::edge_betweenness_centrality(&graph, false, true);
```

# References

1. Ulrik Brandes: A Faster Algorithm for Betweenness Centrality. Journal of Mathematical Sociology 25(2):163-177, 2001.
*/
pub fn edge_betweenness_centrality<T, A>(
    graph: &Graph<T, A>,
    weighted: bool,
    normalized: bool,
) -> Result<HashMap<(T, T), f64>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let sources: Vec<usize> = (0..graph.number_of_nodes()).collect();
    let (_, edge_betweenness) = compute(graph, &sources, weighted, false, true);
    let mut edge_betweenness = edge_betweenness.unwrap();
    let scale = get_scale(graph.get_all_nodes().len(), normalized, graph.specs.directed);
    if let Some(scale) = scale {
        for v in edge_betweenness.values_mut() {
            *v *= scale;
        }
    }
    Ok(edge_betweenness
        .into_iter()
        .map(|((u, v), c)| {
            (
                (
                    graph.get_node_by_index(&u).unwrap().name.clone(),
                    graph.get_node_by_index(&v).unwrap().name.clone(),
                ),
                c,
            )
        })
        .collect())
}

/**
Compute an estimate of node betweenness centrality using a random sample of
source nodes rather than all of them.

The resulting values are systematically lower than the exact values by
approximately a factor of `sources.len() / graph.number_of_nodes()`; no
rescaling is applied by this function, matching the reference behavior.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `weighted`: set to `true` to use edge weights when computing the betweenness centrality
* `frac`: the fraction, in `(0, 1]`, of nodes to use as BFS sources
* `seed`: an optional seed for the random source selection, for reproducible runs

# Examples

```
use graphrs::{algorithms::{centrality::{betweenness}}, generators};
let graph = generators::social::karate_club_graph();
let centralities = betweenness::betweenness_centrality_sampled(&graph, false, 0.5, Some(1));
```

# References

1. Ulrik Brandes: A Faster Algorithm for Betweenness Centrality. Journal of Mathematical Sociology 25(2):163-177, 2001.
*/
pub fn betweenness_centrality_sampled<T, A>(
    graph: &Graph<T, A>,
    weighted: bool,
    frac: f64,
    seed: Option<u64>,
) -> Result<HashMap<T, f64>, Error>
where
    T: Hash + Eq + Clone + Ord + Debug + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    if frac <= 0.0 || frac > 1.0 {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: "`frac` must be in the range (0, 1]".to_string(),
        });
    }
    let n = graph.number_of_nodes();
    if n == 0 {
        return Ok(HashMap::new());
    }
    let num_sources = ((frac * n as f64).ceil() as usize).max(1);
    let mut all_indexes: Vec<usize> = (0..n).collect();
    let mut rng = get_random_number_generator(seed);
    all_indexes.shuffle(&mut rng);
    let sources: Vec<usize> = all_indexes.into_iter().take(num_sources).collect();

    let (node_betweenness, _) = compute(graph, &sources, weighted, true, false);
    let node_betweenness = node_betweenness.unwrap();
    Ok(to_node_map(graph, &node_betweenness))
}

fn get_random_number_generator(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        None => Box::new(rand::thread_rng()),
        Some(s) => Box::new(ChaCha20Rng::seed_from_u64(s)),
    }
}

fn to_node_map<T, A>(graph: &Graph<T, A>, betweenness: &[f64]) -> HashMap<T, f64>
where
    T: Hash + Eq + Clone + Ord + Display + Send + Sync,
    A: Clone,
{
    betweenness
        .iter()
        .enumerate()
        .map(|(i, v)| (graph.get_node_by_index(&i).unwrap().name.clone(), *v))
        .collect()
}

/**
The single Brandes-style engine that every public façade in this module is
built on: runs a forward BFS/Dijkstra and backward dependency-accumulation
pass from every node in `sources`, optionally accumulating node
betweenness, edge betweenness, or both.
*/
fn compute<T, A>(
    graph: &Graph<T, A>,
    sources: &[usize],
    weighted: bool,
    want_node: bool,
    want_edge: bool,
) -> (Option<Vec<f64>>, Option<HashMap<(usize, usize), f64>>)
where
    T: Hash + Eq + Clone + Ord + Display + Send + Sync,
    A: Clone + Send + Sync,
{
    let n = graph.number_of_nodes();
    let parallel = n > 20 && rayon::current_num_threads() > 1;
    let node_betweenness_mutex = std::sync::Mutex::new(vec![0.0; n]);
    let edge_betweenness_mutex = std::sync::Mutex::new(HashMap::<(usize, usize), f64>::new());

    let process = |source: usize| {
        let r = match weighted {
            true => dijkstra(graph, source),
            false => bfs(graph, source),
        };
        if want_node {
            let mut node_betweenness = node_betweenness_mutex.lock().unwrap();
            accumulate(&mut node_betweenness, &r);
        }
        if want_edge {
            let mut edge_betweenness = edge_betweenness_mutex.lock().unwrap();
            accumulate_edges(&mut edge_betweenness, &r, graph.specs.directed);
        }
    };

    match parallel {
        true => {
            sources.into_par_iter().for_each(|&source| process(source));
        }
        false => {
            for &source in sources {
                process(source);
            }
        }
    }

    let node_betweenness = want_node.then(|| node_betweenness_mutex.into_inner().unwrap());
    let edge_betweenness = want_edge.then(|| edge_betweenness_mutex.into_inner().unwrap());
    (node_betweenness, edge_betweenness)
}

fn bfs<T, A>(graph: &Graph<T, A>, source: usize) -> SingleSourceResults
where
    T: Hash + Eq + Clone + Ord + Display + Send + Sync,
    A: Clone,
{
    let mut P: Vec<Vec<usize>> = vec![vec![]; graph.number_of_nodes()];
    let mut D = vec![f64::MAX; graph.number_of_nodes()];
    let mut fringe = VecDeque::<usize>::new();
    let mut sigma = vec![0.0; graph.number_of_nodes()];

    sigma[source] = 1.0;
    D[source] = 0.0;

    let mut S = vec![];

    fringe.push_back(source);

    while let Some(v) = fringe.pop_front() {
        S.push(v);
        let Dv = D[v];
        let sigmav = sigma[v];
        for adj in graph.get_successor_nodes_by_index(&v) {
            let w = adj.node_index;
            let vw_dist = Dv + 1.0;
            if D[w] == f64::MAX {
                D[w] = vw_dist;
                fringe.push_back(w);
            }
            if D[w] == vw_dist {
                sigma[w] += sigmav;
                P[w].push(v);
            }
        }
    }

    SingleSourceResults {
        S,
        P,
        sigma,
        source,
    }
}

fn dijkstra<T, A>(graph: &Graph<T, A>, source: usize) -> SingleSourceResults
where
    T: Hash + Eq + Clone + Ord + Display + Send + Sync,
    A: Clone,
{
    let mut P: Vec<Vec<usize>> = vec![vec![]; graph.number_of_nodes()];
    let mut D = vec![f64::MAX; graph.number_of_nodes()];
    let mut seen = vec![f64::MAX; graph.number_of_nodes()];
    let mut fringe = BinaryHeap::<FringeNode>::new();
    let mut sigma = vec![0.0; graph.number_of_nodes()];

    sigma[source] = 1.0;
    seen[source] = 0.0;

    let mut S = vec![];

    fringe.push(FringeNode {
        distance: -0.0,
        pred: source,
        v: source,
    });

    while let Some(fringe_item) = fringe.pop() {
        let dist = -fringe_item.distance;
        let v = fringe_item.v;
        let pred = fringe_item.pred;
        if D[v] != f64::MAX {
            continue;
        }
        sigma[v] += sigma[pred];
        S.push(v);
        D[v] = dist;
        for adj in graph.get_successor_nodes_by_index(&v) {
            let w = adj.node_index;
            let cost = adj.weight;
            let vw_dist = dist + cost;
            if D[w] == f64::MAX && (seen[w] == f64::MAX || vw_dist < seen[w]) {
                seen[w] = vw_dist;
                push_fringe_node(&mut fringe, v, w, vw_dist);
                sigma[w] = 0.0;
                P[w] = vec![v];
            } else if vw_dist == seen[w] {
                sigma[w] += sigma[v];
                P[w].push(v);
            }
        }
    }

    SingleSourceResults {
        S,
        P,
        sigma,
        source,
    }
}

fn accumulate(betweenness: &mut [f64], result: &SingleSourceResults) {
    let mut delta = vec![0.0; betweenness.len()];
    let mut S = result.S.iter().rev();
    while let Some(w) = S.next() {
        let coeff = (1.0 + delta[*w]) / result.sigma[*w];
        for v in result.P[*w].iter() {
            delta[*v] += result.sigma[*v] * coeff;
        }
        if *w != result.source {
            betweenness[*w] += delta[*w];
        }
    }
}

fn accumulate_edges(
    edge_betweenness: &mut HashMap<(usize, usize), f64>,
    result: &SingleSourceResults,
    directed: bool,
) {
    let mut delta = vec![0.0; result.sigma.len()];
    let mut S = result.S.iter().rev();
    while let Some(&w) = S.next() {
        let coeff = (1.0 + delta[w]) / result.sigma[w];
        for &v in result.P[w].iter() {
            let c = result.sigma[v] * coeff;
            delta[v] += c;
            let key = match directed {
                true => (v, w),
                false => (v.min(w), v.max(w)),
            };
            *edge_betweenness.entry(key).or_insert(0.0) += c;
        }
    }
}

fn rescale(betweeneess: &mut Vec<f64>, num_nodes: usize, normalized: bool, directed: bool) {
    let scale = get_scale(num_nodes, normalized, directed);
    if scale.is_some() {
        let scale = scale.unwrap();
        for i in 0..num_nodes {
            betweeneess[i] *= scale;
        }
    }
}

#[inline]
fn get_scale(num_nodes: usize, normalized: bool, directed: bool) -> Option<f64> {
    match normalized {
        true => match num_nodes <= 2 {
            true => None,
            false => Some(1.0 / ((num_nodes as f64 - 1.0) * (num_nodes as f64 - 2.0))),
        },
        false => match directed {
            true => None,
            false => Some(0.5),
        },
    }
}

// tests for private methods only; other tests are in:
// tests/test_algorithms_centrality_betweenness
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_get_scale_1() {
        let result = get_scale(10, true, true).unwrap();
        assert_eq!(result, 1.0 / 72.0);
    }

    #[test]
    fn test_get_scale_2() {
        let result = get_scale(2, true, true);
        assert!(result.is_none());
    }

    #[test]
    fn test_get_scale_3() {
        let result = get_scale(2, false, true);
        assert!(result.is_none());
    }

    #[test]
    fn test_get_scale_4() {
        let result = get_scale(10, true, false).unwrap();
        assert_eq!(result, 1.0 / 72.0);
    }

    #[test]
    fn test_get_scale_5() {
        let result = get_scale(10, false, false).unwrap();
        assert_eq!(result, 0.5);
    }

    #[test]
    fn test_betweenness_centrality_sampled_invalid_frac() {
        let graph = crate::generators::social::karate_club_graph();
        let result = betweenness_centrality_sampled(&graph, false, 0.0, None);
        assert!(result.is_err());
        let result = betweenness_centrality_sampled(&graph, false, 1.5, None);
        assert!(result.is_err());
    }
}
