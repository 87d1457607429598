use std::collections::HashMap;
use std::hash::Hash;

/**
The outcome of a power-iteration centrality computation (PageRank,
eigenvector centrality, HITS).

Exhausting `max_iter` without reaching the requested tolerance is not
treated as an error: `converged` is simply `false` and `scores` holds the
last iterate, so callers can decide for themselves whether a near-converged
result is still useful.
*/
#[derive(Debug, Clone)]
pub struct PowerIterationResult<T>
where
    T: Hash + Eq,
{
    /// The centrality score for each node.
    pub scores: HashMap<T, f64>,
    /// `true` if the iteration met its tolerance before `max_iter` was reached.
    pub converged: bool,
    /// The number of iterations actually performed.
    pub iterations: u32,
}
