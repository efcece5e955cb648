use super::{Strategy, undefined};
use crate::algo::{order_by, order_by_mode, take_pairs};
use crate::core::{Container, Key};
use crate::error::SortError;
use crate::mode::{Direction, OrderingMode};
use crate::operation::Operation;
use crate::precedence::PrecedenceTag;
use std::cmp::Ordering;

/// Sorting by key. Values stay attached to their keys.
///
/// ```
/// use kvsort::{OrderingMode, Sorter};
///
/// let sorter = Sorter::new([("a", 1), ("z", 2), ("f", 3)]);
/// let sorted = sorter.by_key().sort(OrderingMode::Regular).unwrap();
///
/// let keys: Vec<String> = sorted.keys().map(ToString::to_string).collect();
/// assert_eq!(keys, ["a", "f", "z"]);
/// ```
#[derive(Debug)]
pub struct ByKey<'a, V> {
    items: &'a Container<V>,
}

impl<'a, V> Clone for ByKey<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for ByKey<'a, V> {}

impl<'a, V: Clone> ByKey<'a, V> {
    pub fn new(items: &'a Container<V>) -> Self {
        Self { items }
    }

    /// Ascending by key under `mode`.
    pub fn sort(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Ascending)
    }

    /// Descending by key under `mode`.
    pub fn sort_reverse(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Descending)
    }

    /// Orders keys with a caller compare function.
    pub fn custom_sort<F>(&self, compare: F) -> Result<Container<V>, SortError>
    where
        F: Fn(&Key, &Key) -> Ordering,
    {
        let keys: Vec<&Key> = self.items.keys().collect();
        let indices = order_by(&keys, Direction::Ascending, |a, b| Some(compare(*a, *b)))?;
        Ok(take_pairs(self.items, &indices))
    }

    fn ordered(&self, mode: OrderingMode, direction: Direction) -> Result<Container<V>, SortError> {
        let keys: Vec<&Key> = self.items.keys().collect();
        let indices = order_by_mode(&keys, mode, direction)?;
        Ok(take_pairs(self.items, &indices))
    }
}

impl<'a, V: Clone> Strategy<V> for ByKey<'a, V> {
    fn tag(&self) -> PrecedenceTag {
        PrecedenceTag::ByKey
    }

    fn apply(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        match operation {
            Operation::Sort(mode) => self.sort(mode),
            Operation::SortReverse(mode) => self.sort_reverse(mode),
            Operation::CustomSort(comparator) => {
                let compare = comparator.key_compare()?;
                self.custom_sort(|a, b| compare(a, b))
            }
            other => Err(undefined(self.tag(), &other)),
        }
    }
}
