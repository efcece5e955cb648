use super::{Strategy, undefined};
use crate::algo::{order_by, order_by_mode, shuffled, take_values};
use crate::core::{Container, SortValue};
use crate::error::SortError;
use crate::mode::{Direction, OrderingMode};
use crate::operation::Operation;
use crate::precedence::PrecedenceTag;
use rand::Rng;
use std::cmp::Ordering;

/// Sorting by value, renumbering keys `0..n` in output order.
///
/// ```
/// use kvsort::{Key, OrderingMode, Sorter};
///
/// let sorter = Sorter::new([(5, "c"), (1, "a")]);
/// let sorted = sorter.by_value().discard_key().sort(OrderingMode::Regular).unwrap();
///
/// assert_eq!(sorted.get_index(0), Some((&Key::Int(0), &"a")));
/// assert_eq!(sorted.get_index(1), Some((&Key::Int(1), &"c")));
/// ```
#[derive(Debug)]
pub struct DiscardKey<'a, V> {
    items: &'a Container<V>,
}

impl<'a, V> Clone for DiscardKey<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for DiscardKey<'a, V> {}

impl<'a, V: SortValue + Clone> DiscardKey<'a, V> {
    pub fn new(items: &'a Container<V>) -> Self {
        Self { items }
    }

    pub fn sort(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Ascending)
    }

    pub fn sort_reverse(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Descending)
    }

    pub fn custom_sort<F>(&self, compare: F) -> Result<Container<V>, SortError>
    where
        F: Fn(&V, &V) -> Ordering,
    {
        let values: Vec<&V> = self.items.values().collect();
        let indices = order_by(&values, Direction::Ascending, |a, b| Some(compare(*a, *b)))?;
        Ok(take_values(self.items, &indices))
    }

    /// Values in uniformly random order, drawn from the thread-local generator.
    pub fn random(&self) -> Result<Container<V>, SortError> {
        self.random_with(&mut rand::rng())
    }

    /// Alias of [`DiscardKey::random`].
    pub fn shuffle(&self) -> Result<Container<V>, SortError> {
        self.random()
    }

    /// Values in uniformly random order, drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Container<V>, SortError> {
        let indices = shuffled(self.items.len(), rng);
        Ok(take_values(self.items, &indices))
    }

    fn ordered(&self, mode: OrderingMode, direction: Direction) -> Result<Container<V>, SortError> {
        let values: Vec<&V> = self.items.values().collect();
        let indices = order_by_mode(&values, mode, direction)?;
        Ok(take_values(self.items, &indices))
    }
}

impl<'a, V: SortValue + Clone> Strategy<V> for DiscardKey<'a, V> {
    fn tag(&self) -> PrecedenceTag {
        PrecedenceTag::DiscardKey
    }

    fn apply(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        match operation {
            Operation::Sort(mode) => self.sort(mode),
            Operation::SortReverse(mode) => self.sort_reverse(mode),
            Operation::CustomSort(comparator) => {
                let compare = comparator.value_compare()?;
                self.custom_sort(|a, b| compare(a, b))
            }
            Operation::Random => self.random(),
            Operation::Shuffle => self.shuffle(),
            other => Err(undefined(self.tag(), &other)),
        }
    }
}
