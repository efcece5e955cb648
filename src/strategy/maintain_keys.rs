use super::{Strategy, undefined};
use crate::algo::{order_by, order_by_mode, take_pairs};
use crate::core::{Container, SortValue};
use crate::error::SortError;
use crate::mode::{Direction, OrderingMode};
use crate::operation::Operation;
use crate::precedence::PrecedenceTag;
use std::cmp::Ordering;

/// Sorting by value, keeping every value attached to its original key.
#[derive(Debug)]
pub struct MaintainKeys<'a, V> {
    items: &'a Container<V>,
}

impl<'a, V> Clone for MaintainKeys<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for MaintainKeys<'a, V> {}

impl<'a, V: SortValue + Clone> MaintainKeys<'a, V> {
    pub fn new(items: &'a Container<V>) -> Self {
        Self { items }
    }

    pub fn sort(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Ascending)
    }

    pub fn sort_reverse(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.ordered(mode, Direction::Descending)
    }

    /// Natural order of the values' textual form, so `"img2"` precedes `"img10"`.
    ///
    /// ```
    /// use kvsort::Sorter;
    ///
    /// let sorter = Sorter::new([(1, "img2"), (2, "img10"), (3, "img1")]);
    /// let sorted = sorter.by_value().maintain_keys().natural_sort().unwrap();
    ///
    /// let pairs: Vec<String> = sorted.iter().map(|(k, v)| format!("{k}:{v}")).collect();
    /// assert_eq!(pairs, ["3:img1", "1:img2", "2:img10"]);
    /// ```
    pub fn natural_sort(&self) -> Result<Container<V>, SortError> {
        self.ordered(OrderingMode::Natural, Direction::Ascending)
    }

    pub fn natural_sort_case_insensitive(&self) -> Result<Container<V>, SortError> {
        self.ordered(OrderingMode::NaturalCaseInsensitive, Direction::Ascending)
    }

    pub fn custom_sort<F>(&self, compare: F) -> Result<Container<V>, SortError>
    where
        F: Fn(&V, &V) -> Ordering,
    {
        let values: Vec<&V> = self.items.values().collect();
        let indices = order_by(&values, Direction::Ascending, |a, b| Some(compare(*a, *b)))?;
        Ok(take_pairs(self.items, &indices))
    }

    fn ordered(&self, mode: OrderingMode, direction: Direction) -> Result<Container<V>, SortError> {
        let values: Vec<&V> = self.items.values().collect();
        let indices = order_by_mode(&values, mode, direction)?;
        Ok(take_pairs(self.items, &indices))
    }
}

impl<'a, V: SortValue + Clone> Strategy<V> for MaintainKeys<'a, V> {
    fn tag(&self) -> PrecedenceTag {
        PrecedenceTag::MaintainKey
    }

    fn apply(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        match operation {
            Operation::Sort(mode) => self.sort(mode),
            Operation::SortReverse(mode) => self.sort_reverse(mode),
            Operation::NaturalSort => self.natural_sort(),
            Operation::NaturalSortCaseInsensitive => self.natural_sort_case_insensitive(),
            Operation::CustomSort(comparator) => {
                let compare = comparator.value_compare()?;
                self.custom_sort(|a, b| compare(a, b))
            }
            other => Err(undefined(self.tag(), &other)),
        }
    }
}
