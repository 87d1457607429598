
#[cfg(test)]
mod tests {

    use super::utility::round;
    use graphrs::algorithms::centrality::pagerank::{self, TypedNodes};
    use graphrs::{Edge, ErrorKind, Graph, GraphSpecs};
    use std::collections::HashMap;

    fn directed_triangle() -> Graph<i32, ()> {
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph
            .add_edges(vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)])
            .unwrap();
        graph
    }

    #[test]
    fn test_pagerank_directed_triangle_converges_in_one_iteration() {
        // S3: directed triangle 0->1->2->0.
        let graph = directed_triangle();
        let result = pagerank::pagerank_centrality(&graph, false, Some(0.85), None, None, false)
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        for node in [0, 1, 2] {
            assert_eq!(round(result.scores.get(&node).unwrap(), 6), 1.0 / 3.0);
        }
    }

    #[test]
    fn test_pagerank_sums_to_one() {
        let graph = directed_triangle();
        let result =
            pagerank::pagerank_centrality(&graph, false, None, None, None, false).unwrap();
        let sum: f64 = result.scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pagerank_max_iter_zero_returns_uniform_vector() {
        let graph = directed_triangle();
        let result =
            pagerank::pagerank_centrality(&graph, false, None, Some(0), None, false).unwrap();
        assert_eq!(result.iterations, 0);
        assert!(result.converged);
        for node in [0, 1, 2] {
            assert_eq!(*result.scores.get(&node).unwrap(), 1.0 / 3.0);
        }
    }

    #[test]
    fn test_pagerank_two_disconnected_edges() {
        // S5: two disconnected edges 0-1, 2-3, undirected.
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::undirected_create_missing());
        graph
            .add_edges(vec![Edge::new(0, 1), Edge::new(2, 3)])
            .unwrap();
        let result =
            pagerank::pagerank_centrality(&graph, false, None, None, None, false).unwrap();
        for node in [0, 1, 2, 3] {
            assert_eq!(round(result.scores.get(&node).unwrap(), 6), 0.25);
        }
    }

    #[test]
    fn test_pagerank_weighted_requires_edge_weights() {
        let graph = directed_triangle();
        let result = pagerank::pagerank_centrality(&graph, true, None, None, None, false);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::EdgeWeightNotSpecified);
    }

    #[test]
    fn test_pagerank_weighted_uses_edge_weights() {
        let mut graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        graph
            .add_edges(vec![
                Edge::with_weight(0, 1, 3.0),
                Edge::with_weight(0, 2, 1.0),
                Edge::with_weight(1, 2, 1.0),
                Edge::with_weight(2, 0, 1.0),
            ])
            .unwrap();
        let result =
            pagerank::pagerank_centrality(&graph, true, None, None, None, false).unwrap();
        let sum: f64 = result.scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        // node 2 receives the heavier edge (0->2 has weight 1, but 1->2 also
        // lands there while 0->1 carries three times the mass of 0->2), so
        // node 2 ends up the most central.
        assert!(result.scores.get(&2).unwrap() > result.scores.get(&1).unwrap());
    }

    #[test]
    fn test_pagerank_empty_graph_returns_empty_map() {
        let graph = Graph::<i32, ()>::new(GraphSpecs::directed_create_missing());
        let result =
            pagerank::pagerank_centrality(&graph, false, None, None, None, false).unwrap();
        assert!(result.scores.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn test_pagerank_reconverges_quickly_from_previous_result() {
        let graph = directed_triangle();
        let first =
            pagerank::pagerank_centrality(&graph, false, None, None, None, false).unwrap();
        assert!(first.converged);
        assert!(first.iterations <= 2);
    }

    struct Types {
        assignment: HashMap<i32, (usize, usize)>,
        max_type: usize,
        max_local: Vec<usize>,
    }

    impl TypedNodes<i32> for Types {
        fn max_type_id(&self) -> usize {
            self.max_type
        }
        fn type_of(&self, node: &i32) -> usize {
            self.assignment.get(node).unwrap().0
        }
        fn local_id_of(&self, node: &i32) -> usize {
            self.assignment.get(node).unwrap().1
        }
        fn max_local_id_of_type(&self, type_id: usize) -> usize {
            self.max_local[type_id]
        }
    }

    #[test]
    fn test_pagerank_multi_type_matches_plain_pagerank() {
        // A single-type partition should reduce to plain PageRank.
        let graph = directed_triangle();
        let types = Types {
            assignment: [(0, (0, 0)), (1, (0, 1)), (2, (0, 2))].into_iter().collect(),
            max_type: 0,
            max_local: vec![2],
        };
        let plain =
            pagerank::pagerank_centrality(&graph, false, Some(0.85), None, None, false).unwrap();
        let multi =
            pagerank::pagerank_centrality_multi_type(&graph, &types, Some(0.85), None, None)
                .unwrap();
        for node in [0, 1, 2] {
            assert_eq!(
                round(plain.scores.get(&node).unwrap(), 9),
                round(multi.scores.get(&node).unwrap(), 9)
            );
        }
    }
}
