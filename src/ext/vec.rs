use std::collections::HashSet;
use std::hash::Hash;

/// Extends `HashSet` with the `without` method.
pub trait VecExt<T> {
    fn to_hashset(&self) -> HashSet<T>;
}

impl<T> VecExt<T> for Vec<T>
where
    T: Clone + Eq + Hash,
{
    /**
    Returns a copy of the `HashSet` that doesn't contain the specified `value`.
    */
    fn to_hashset(&self) -> HashSet<T> {
        self.iter().cloned().collect()
    }
}
