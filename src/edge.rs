use std::cmp::{Ord, Ordering, PartialOrd};
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/**
Represents a graph edge as (`u`, `v`), with an optional `weight` and `attributes`.

An edge with no explicit weight has a `weight` of `f64::NAN`; use
[`Graph::edges_have_weight`](./struct.Graph.html#method.edges_have_weight) to check
whether every edge in a graph has had a weight assigned.
**/
#[derive(Clone)]
pub struct Edge<T, A>
where
    T: PartialOrd,
{
    pub u: T,
    pub v: T,
    pub weight: f64,
    pub attributes: Option<A>,
}

impl<T: PartialOrd, A> Edge<T, A> {
    /**
    Creates a (`u`, `v`) `Edge` with no weight and no attributes.

    ```
    use graphrs::Edge;
    let edges = vec![
        Edge::<&str, ()>::new("n1", "n2"),
        Edge::<&str, ()>::new("n2", "n1"),
    ];
    ```
    */
    pub fn new(u: T, v: T) -> Edge<T, A> {
        Edge {
            u,
            v,
            weight: f64::NAN,
            attributes: None,
        }
    }

    /**
    Creates a (`u`, `v`) `Edge` with the specified `weight`.

    ```
    use graphrs::Edge;
    let edge = Edge::<&str, ()>::with_weight("n1", "n2", 1.0);
    assert_eq!(edge.weight, 1.0);
    ```
    */
    pub fn with_weight(u: T, v: T, weight: f64) -> Edge<T, A> {
        Edge {
            u,
            v,
            weight,
            attributes: None,
        }
    }

    /**
    Creates a (`u`, `v`) `Edge` with the specified `attributes`.

    ```
    use graphrs::Edge;
    let edge = Edge::with_attribute("n1", "n2", 99);
    ```
    */
    pub fn with_attribute(u: T, v: T, attributes: A) -> Edge<T, A> {
        Edge {
            u,
            v,
            weight: f64::NAN,
            attributes: Some(attributes),
        }
    }

    /**
    Returns (v, u) if u > v, otherwise returns self unchanged.

    ```
    use graphrs::Edge;
    let edge1 = Edge::<&str, ()>::new("n2", "n1");
    let edge2 = edge1.ordered();
    assert_eq!(edge2.u, "n1");
    ```
    */
    pub fn ordered(self: Edge<T, A>) -> Edge<T, A> {
        match self.u > self.v {
            true => self.reversed(),
            false => self,
        }
    }

    /**
    Reverses the edge. (u, v) -> (v, u)

    ```
    use graphrs::Edge;
    let edge1 = Edge::<&str, ()>::new("n2", "n1");
    let edge2 = edge1.reversed();
    assert_eq!(edge2.u, "n1");
    ```
    */
    pub fn reversed(self: Edge<T, A>) -> Edge<T, A> {
        Edge {
            u: self.v,
            v: self.u,
            ..self
        }
    }
}

impl<T: PartialEq + PartialOrd, A> PartialEq for Edge<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v
    }
}

impl<T: Eq + PartialOrd, A> Eq for Edge<T, A> {}

impl<T: Debug + PartialOrd, A> fmt::Debug for Edge<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("u", &self.u)
            .field("v", &self.v)
            .field("weight", &self.weight)
            .finish()
    }
}

impl<T: Display + PartialOrd, A> fmt::Display for Edge<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

impl<T: Hash + PartialOrd, A> Hash for Edge<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.u.hash(state);
        self.v.hash(state);
    }
}

impl<T: Eq + PartialEq + PartialOrd, A> PartialOrd for Edge<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq + PartialOrd, A> Ord for Edge<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        let u_cmp = self.u.partial_cmp(&other.u).unwrap();
        match u_cmp {
            Ordering::Equal => self.v.partial_cmp(&other.v).unwrap(),
            _ => u_cmp,
        }
    }
}
