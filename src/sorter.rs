//! The `Sorter` facade.

use crate::core::{Container, Key, SortValue};
use crate::error::SortError;
use crate::mode::OrderingMode;
use crate::operation::{Comparator, Operation};
use crate::precedence::{Family, PrecedenceTag, SortOrder};
use crate::strategy::{ByKey, ByValue, Strategy};
use std::sync::Arc;

/// Sorts an ordered key-value container without modifying it.
///
/// Use it by chaining:
///
/// ```
/// use kvsort::{OrderingMode, Sorter};
///
/// let sorter = Sorter::new([("b", 2), ("a", 3), ("c", 1)]);
/// let sorted = sorter.by_value().maintain_keys().sort(OrderingMode::Regular).unwrap();
/// assert_eq!(sorted.keys().map(ToString::to_string).collect::<Vec<_>>(), ["c", "b", "a"]);
/// ```
///
/// Or call an operation directly and let the precedence order pick the family. By
/// default that is by value, keeping keys:
///
/// ```
/// use kvsort::{OrderingMode, PrecedenceTag, Sorter};
///
/// let sorter = Sorter::new([("b", 2), ("a", 3), ("c", 1)]);
/// assert_eq!(
///     sorter.sort(OrderingMode::Regular).unwrap().keys().map(ToString::to_string).collect::<Vec<_>>(),
///     ["c", "b", "a"]
/// );
///
/// sorter.set_order([PrecedenceTag::ByKey]);
/// assert_eq!(
///     sorter.sort(OrderingMode::Regular).unwrap().keys().map(ToString::to_string).collect::<Vec<_>>(),
///     ["a", "b", "c"]
/// );
/// ```
///
/// The precedence order belongs to the sorter. Sorters built with [`Sorter::with_order`]
/// from the same `Arc<SortOrder>` share it, and so does a clone: reconfiguring a cloned
/// sorter reconfigures the original. Use [`Sorter::detached`] for a copy with an
/// independent order.
#[derive(Debug, Clone)]
pub struct Sorter<V> {
    items: Container<V>,
    order: Arc<SortOrder>,
}

impl<V> Sorter<V> {
    /// A sorter over `items` with its own default precedence order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn new<K, I>(items: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_order(items, Arc::default())
    }

    /// A sorter over `items` consulting the shared `order`.
    pub fn with_order<K, I>(items: I, order: Arc<SortOrder>) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let items = items
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self { items, order }
    }

    /// The container as given; never reordered.
    pub fn items(&self) -> &Container<V> {
        &self.items
    }

    /// A copy of this sorter whose precedence order starts out equal to this one's but is
    /// no longer shared with it.
    pub fn detached(&self) -> Self
    where
        V: Clone,
    {
        Self {
            items: self.items.clone(),
            order: Arc::new(SortOrder::new(self.order.get_order())),
        }
    }

    pub fn order(&self) -> &Arc<SortOrder> {
        &self.order
    }

    /// Replaces both precedence rankings from one list. See [`SortOrder::set_order`].
    pub fn set_order(&self, tags: impl IntoIterator<Item = PrecedenceTag>) {
        self.order.set_order(tags);
    }

    pub fn get_order(&self) -> Vec<PrecedenceTag> {
        self.order.get_order()
    }
}

impl<V: SortValue + Clone> Sorter<V> {
    pub fn by_value(&self) -> ByValue<'_, V> {
        ByValue::new(&self.items, self.order.key_policies())
    }

    pub fn by_key(&self) -> ByKey<'_, V> {
        ByKey::new(&self.items)
    }

    /// Applies `operation` through the top-level precedence.
    pub fn dispatch(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        self.order
            .families()
            .dispatch(operation, |family| self.strategy(family))
    }

    fn strategy(&self, family: Family) -> Box<dyn Strategy<V> + '_> {
        match family {
            Family::ByValue => Box::new(self.by_value()),
            Family::ByKey => Box::new(self.by_key()),
        }
    }

    /// Applies the operation called `name` (`"sort"`, `"sortReverse"`, ...).
    ///
    /// Ordering modes default to [`OrderingMode::Regular`]. `"customSort"` fails with
    /// [`SortError::InvalidComparator`] since a name carries no compare function.
    pub fn dispatch_named(&self, name: &str) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::from_name(name)?)
    }

    pub fn sort(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::Sort(mode))
    }

    pub fn sort_reverse(&self, mode: OrderingMode) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::SortReverse(mode))
    }

    pub fn natural_sort(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::NaturalSort)
    }

    pub fn natural_sort_case_insensitive(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::NaturalSortCaseInsensitive)
    }

    /// Sorts with `comparator`, invoked on keys or values depending on the family the
    /// operation resolves to.
    pub fn custom_sort(&self, comparator: Comparator<V>) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::CustomSort(comparator))
    }

    pub fn random(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::Random)
    }

    pub fn shuffle(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::Shuffle)
    }
}
