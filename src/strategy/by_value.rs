use super::{DiscardKey, MaintainKeys, Strategy};
use crate::core::{Container, SortValue};
use crate::error::SortError;
use crate::mode::OrderingMode;
use crate::operation::{Comparator, Operation};
use crate::precedence::{KeyPolicy, Precedence, PrecedenceTag};
use std::cmp::Ordering;

/// Sorting by value.
///
/// Navigate to a key policy explicitly with [`ByValue::maintain_keys`] or
/// [`ByValue::discard_key`], or call an operation directly and let the by-value
/// precedence pick the first policy that defines it.
#[derive(Debug)]
pub struct ByValue<'a, V> {
    items: &'a Container<V>,
    policies: &'a Precedence<KeyPolicy>,
}

impl<'a, V> Clone for ByValue<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for ByValue<'a, V> {}

impl<'a, V: SortValue + Clone> ByValue<'a, V> {
    pub fn new(items: &'a Container<V>, policies: &'a Precedence<KeyPolicy>) -> Self {
        Self { items, policies }
    }

    pub fn maintain_keys(&self) -> MaintainKeys<'a, V> {
        MaintainKeys::new(self.items)
    }

    pub fn discard_key(&self) -> DiscardKey<'a, V> {
        DiscardKey::new(self.items)
    }

    /// Applies `operation` through the by-value precedence.
    pub fn dispatch(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        self.policies
            .dispatch(operation, |policy| self.strategy(policy))
    }

    fn strategy(&self, policy: KeyPolicy) -> Box<dyn Strategy<V> + 'a> {
        match policy {
            KeyPolicy::MaintainKey => Box::new(self.maintain_keys()),
            KeyPolicy::DiscardKey => Box::new(self.discard_key()),
        }
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

    pub fn custom_sort<F>(&self, compare: F) -> Result<Container<V>, SortError>
    where
        F: Fn(&V, &V) -> Ordering + 'static,
    {
        self.dispatch(Operation::CustomSort(Comparator::values(compare)))
    }

    pub fn random(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::Random)
    }

    pub fn shuffle(&self) -> Result<Container<V>, SortError> {
        self.dispatch(Operation::Shuffle)
    }
}

impl<'a, V: SortValue + Clone> Strategy<V> for ByValue<'a, V> {
    fn tag(&self) -> PrecedenceTag {
        PrecedenceTag::ByValue
    }

    fn apply(&self, operation: Operation<V>) -> Result<Container<V>, SortError> {
        self.dispatch(operation)
    }
}
