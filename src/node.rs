use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/**
Represents a graph node, identified by a `name`.

Also allows an `attributes` value of any type `A` to be stored on a node.
**/
#[derive(Clone)]
pub struct Node<T, A> {
    pub name: T,
    pub attributes: Option<A>,
}

impl<T, A> Node<T, A> {
    /**
    Creates a `Node` with no attributes.

    ```
    use graphrs::Node;
    let node = Node::<&str, ()>::from_name("n1");
    ```
    */
    pub fn from_name(name: T) -> Node<T, A> {
        Node {
            name,
            attributes: None,
        }
    }

    /**
    Creates a `Node` with the specified `attributes`.

    ```
    use graphrs::Node;
    let node = Node::from_name_and_attributes("n1", 99);
    ```
    */
    pub fn from_name_and_attributes(name: T, attributes: A) -> Node<T, A> {
        Node {
            name,
            attributes: Some(attributes),
        }
    }
}

impl<T: Eq + Ord, A> Ord for Node<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<T: Eq + PartialOrd + Ord, A> PartialOrd for Node<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialEq, A> PartialEq for Node<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: Eq, A> Eq for Node<T, A> {}

impl<T: Debug, A> fmt::Debug for Node<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("name", &self.name).finish()
    }
}

impl<T: Display, A> fmt::Display for Node<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<T: Hash, A> Hash for Node<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
