//! The closed set of sorting operations and their arguments.

use crate::core::Key;
use crate::error::SortError;
use crate::mode::OrderingMode;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Name of a sorting operation, independent of its arguments.
///
/// The string forms (`"sort"`, `"sortReverse"`, ...) are the names accepted by
/// [`Sorter::dispatch_named`](crate::Sorter::dispatch_named).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationName {
    Sort,
    SortReverse,
    NaturalSort,
    NaturalSortCaseInsensitive,
    CustomSort,
    Random,
    Shuffle,
}

impl OperationName {
    pub const ALL: [OperationName; 7] = [
        OperationName::Sort,
        OperationName::SortReverse,
        OperationName::NaturalSort,
        OperationName::NaturalSortCaseInsensitive,
        OperationName::CustomSort,
        OperationName::Random,
        OperationName::Shuffle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationName::Sort => "sort",
            OperationName::SortReverse => "sortReverse",
            OperationName::NaturalSort => "naturalSort",
            OperationName::NaturalSortCaseInsensitive => "naturalSortCaseInsensitive",
            OperationName::CustomSort => "customSort",
            OperationName::Random => "random",
            OperationName::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationName {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| SortError::unknown_operation(s))
    }
}

type KeyCompare = Rc<dyn Fn(&Key, &Key) -> Ordering>;
type ValueCompare<V> = Rc<dyn Fn(&V, &V) -> Ordering>;

/// A caller-supplied compare function for `customSort`.
///
/// Which operands it is invoked with depends on the family the operation resolves to:
/// keys for by-key sorting, values for by-value sorting. A comparator may carry both.
///
/// ```
/// use kvsort::{Comparator, SortValue};
///
/// let by_length = Comparator::<String>::values(|a, b| a.len().cmp(&b.len()))
///     .with_keys(|a, b| b.as_text().cmp(&a.as_text()));
/// # let _ = by_length;
/// ```
pub struct Comparator<V> {
    keys: Option<KeyCompare>,
    values: Option<ValueCompare<V>>,
}

impl<V> Comparator<V> {
    /// A comparator over keys only.
    pub fn keys<F>(compare: F) -> Self
    where
        F: Fn(&Key, &Key) -> Ordering + 'static,
    {
        Self {
            keys: Some(Rc::new(compare)),
            values: None,
        }
    }

    /// A comparator over values only.
    pub fn values<F>(compare: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + 'static,
    {
        Self {
            keys: None,
            values: Some(Rc::new(compare)),
        }
    }

    pub fn with_keys<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Key, &Key) -> Ordering + 'static,
    {
        self.keys = Some(Rc::new(compare));
        self
    }

    pub fn with_values<F>(mut self, compare: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + 'static,
    {
        self.values = Some(Rc::new(compare));
        self
    }

    pub(crate) fn key_compare(&self) -> Result<&KeyCompare, SortError> {
        self.keys.as_ref().ok_or_else(|| SortError::InvalidComparator {
            reason: "sorting by key needs a compare function over keys".to_string(),
        })
    }

    pub(crate) fn value_compare(&self) -> Result<&ValueCompare<V>, SortError> {
        self.values.as_ref().ok_or_else(|| SortError::InvalidComparator {
            reason: "sorting by value needs a compare function over values".to_string(),
        })
    }
}

impl<V> Clone for Comparator<V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<V> fmt::Debug for Comparator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("keys", &self.keys.is_some())
            .field("values", &self.values.is_some())
            .finish()
    }
}

/// A sorting operation together with its arguments.
#[derive(Debug)]
pub enum Operation<V> {
    Sort(OrderingMode),
    SortReverse(OrderingMode),
    NaturalSort,
    NaturalSortCaseInsensitive,
    CustomSort(Comparator<V>),
    Random,
    Shuffle,
}

impl<V> Operation<V> {
    pub fn name(&self) -> OperationName {
        match self {
            Operation::Sort(_) => OperationName::Sort,
            Operation::SortReverse(_) => OperationName::SortReverse,
            Operation::NaturalSort => OperationName::NaturalSort,
            Operation::NaturalSortCaseInsensitive => OperationName::NaturalSortCaseInsensitive,
            Operation::CustomSort(_) => OperationName::CustomSort,
            Operation::Random => OperationName::Random,
            Operation::Shuffle => OperationName::Shuffle,
        }
    }

    /// Builds the operation a bare name stands for. Ordering modes default to
    /// [`OrderingMode::Regular`].
    ///
    /// Fails with [`SortError::UnknownOperation`] for unknown names and with
    /// [`SortError::InvalidComparator`] for `customSort`, which cannot run without a
    /// compare function.
    pub fn from_name(name: &str) -> Result<Self, SortError> {
        let operation = match name.parse::<OperationName>()? {
            OperationName::Sort => Operation::Sort(OrderingMode::default()),
            OperationName::SortReverse => Operation::SortReverse(OrderingMode::default()),
            OperationName::NaturalSort => Operation::NaturalSort,
            OperationName::NaturalSortCaseInsensitive => Operation::NaturalSortCaseInsensitive,
            OperationName::CustomSort => {
                return Err(SortError::InvalidComparator {
                    reason: "no compare function given".to_string(),
                });
            }
            OperationName::Random => Operation::Random,
            OperationName::Shuffle => Operation::Shuffle,
        };
        Ok(operation)
    }
}

impl<V> Clone for Operation<V> {
    fn clone(&self) -> Self {
        match self {
            Operation::Sort(mode) => Operation::Sort(*mode),
            Operation::SortReverse(mode) => Operation::SortReverse(*mode),
            Operation::NaturalSort => Operation::NaturalSort,
            Operation::NaturalSortCaseInsensitive => Operation::NaturalSortCaseInsensitive,
            Operation::CustomSort(comparator) => Operation::CustomSort(comparator.clone()),
            Operation::Random => Operation::Random,
            Operation::Shuffle => Operation::Shuffle,
        }
    }
}
