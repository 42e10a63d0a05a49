//! Producers over in-memory collections.

use std::collections::BTreeMap;

use crate::sequence::Sequence;

/// Yields `(index, item)` for each element of a vector, in order.
#[derive(Debug, Clone)]
pub struct Indexed<T> {
    items: Vec<T>,
}

impl<T> Indexed<T>
where
    T: Send + 'static,
{
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Indexed<T>
where
    T: Send + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Sequence for Indexed<T>
where
    T: Send + 'static,
{
    type Key = usize;
    type Value = T;

    fn run(self, yield_: &mut dyn FnMut(usize, T) -> bool) {
        for (i, item) in self.items.into_iter().enumerate() {
            if !yield_(i, item) {
                return;
            }
        }
    }
}

/// Yields `(key, value)` for each map entry in ascending key order.
#[derive(Debug, Clone)]
pub struct Entries<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> Entries<K, V>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    #[must_use]
    pub fn new(map: BTreeMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K, V> FromIterator<(K, V)> for Entries<K, V>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K, V> Sequence for Entries<K, V>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    type Key = K;
    type Value = V;

    fn run(self, yield_: &mut dyn FnMut(K, V) -> bool) {
        for (key, value) in self.map {
            if !yield_(key, value) {
                return;
            }
        }
    }
}
