use crate::{Edge, Graph, GraphSpecs, Node};

/**
Generates Zachary's karate club graph: 34 members of a university karate
club, observed over three years in the early 1970s, with an edge between
two members whenever they interacted outside the club. The graph is a
standard benchmark for community-detection and centrality algorithms.

# Examples

```
use graphrs::generators;
let graph = generators::social::karate_club_graph();
assert_eq!(graph.number_of_nodes(), 34);
```

# References

1. Wayne W. Zachary. "An Information Flow Model for Conflict and Fission in
Small Groups." *Journal of Anthropological Research*, 33(4):452-473, 1977.
*/
pub fn karate_club_graph() -> Graph<i32, ()> {
    let pairs: Vec<(i32, i32)> = vec![
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (0, 5),
        (0, 6),
        (0, 7),
        (0, 8),
        (0, 10),
        (0, 11),
        (0, 12),
        (0, 13),
        (0, 17),
        (0, 19),
        (0, 21),
        (0, 31),
        (1, 2),
        (1, 3),
        (1, 7),
        (1, 13),
        (1, 17),
        (1, 19),
        (1, 21),
        (1, 30),
        (2, 3),
        (2, 7),
        (2, 8),
        (2, 9),
        (2, 13),
        (2, 27),
        (2, 28),
        (2, 32),
        (3, 7),
        (3, 12),
        (3, 13),
        (4, 6),
        (4, 10),
        (5, 6),
        (5, 10),
        (5, 16),
        (6, 16),
        (8, 30),
        (8, 32),
        (8, 33),
        (9, 33),
        (13, 33),
        (14, 32),
        (14, 33),
        (15, 32),
        (15, 33),
        (18, 32),
        (18, 33),
        (19, 33),
        (20, 32),
        (20, 33),
        (22, 32),
        (22, 33),
        (23, 25),
        (23, 27),
        (23, 29),
        (23, 32),
        (23, 33),
        (24, 25),
        (24, 27),
        (24, 31),
        (25, 31),
        (26, 29),
        (26, 33),
        (27, 33),
        (28, 31),
        (28, 33),
        (29, 32),
        (29, 33),
        (30, 32),
        (30, 33),
        (31, 32),
        (31, 33),
        (32, 33),
    ];
    let edges = pairs
        .into_iter()
        .map(|(u, v)| Edge::new(u, v))
        .collect::<Vec<Edge<i32, ()>>>();
    Graph::new_from_nodes_and_edges(Vec::<Node<i32, ()>>::new(), edges, GraphSpecs::undirected_create_missing())
        .unwrap()
}
