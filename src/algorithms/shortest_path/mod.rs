/// Compute the shortest paths and path lengths between nodes in the graph,
/// counting each edge as `1`.
pub mod unweighted;

/// Compute the shortest paths and path lengths between nodes in the graph,
/// using edge weights.
pub mod weighted;

/// Dijkstra's algorithm, returning every shortest path of equal length
/// rather than just the first one found.
pub mod dijkstra;

mod shortest_path_info;
pub use shortest_path_info::ShortestPathInfo;
