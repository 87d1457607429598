
#[cfg(test)]
mod tests {

    use graphrs::algorithms::centrality::hits;
    use graphrs::{Edge, Graph, GraphSpecs};

    fn l2_norm(values: impl Iterator<Item = f64>) -> f64 {
        values.map(|v| v * v).sum::<f64>().sqrt()
    }

    #[test]
    fn test_hits_vectors_are_unit_l2_norm() {
        // S6: 0->1, 0->2, 1->2, 2->0.
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph
            .add_edges(vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(2, 0),
            ])
            .unwrap();
        let result = hits::hits_centrality(&graph, None);
        let hub_norm = l2_norm(result.hub.values().copied());
        let auth_norm = l2_norm(result.authority.values().copied());
        assert!((hub_norm - 1.0).abs() < 1e-9);
        assert!((auth_norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hits_authority_is_largest_for_most_referenced_node() {
        // Node 2 is the only node with two in-edges, so it should have the
        // largest authority score once the scores settle.
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph
            .add_edges(vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(2, 0),
            ])
            .unwrap();
        let result = hits::hits_centrality(&graph, None);
        let auth2 = *result.authority.get(&2).unwrap();
        let auth0 = *result.authority.get(&0).unwrap();
        let auth1 = *result.authority.get(&1).unwrap();
        assert!(auth2 > auth0);
        assert!(auth2 > auth1);
    }

    #[test]
    fn test_hits_runs_requested_iteration_count() {
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph.add_edge(Edge::new(0, 1)).unwrap();
        let result = hits::hits_centrality(&graph, Some(7));
        assert_eq!(result.iterations, 7);
    }

    #[test]
    fn test_hits_empty_graph_returns_empty_maps() {
        let graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        let result = hits::hits_centrality(&graph, None);
        assert!(result.hub.is_empty());
        assert!(result.authority.is_empty());
    }

    #[test]
    fn test_hits_isolated_nodes_score_zero() {
        // A node with neither in- nor out-edges contributes nothing to either
        // phase, so its hub and authority scores stay at zero after the
        // first normalization.
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph.add_edge(Edge::new(0, 1)).unwrap();
        graph.add_node(graphrs::Node::from_name(2));
        let result = hits::hits_centrality(&graph, None);
        assert_eq!(*result.hub.get(&2).unwrap(), 0.0);
        assert_eq!(*result.authority.get(&2).unwrap(), 0.0);
    }
}
