/// Compute the centrality of nodes and edges in the graph.
pub mod centrality;

/// Compute the shortest paths and path lengths between nodes in the graph.
pub mod shortest_path;
