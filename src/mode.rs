//! Ordering modes, mirroring the classic sort flags.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How two keys or values are compared by `sort` and `sort_reverse`.
///
/// Defaults to [`OrderingMode::Regular`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderingMode {
    /// Loose comparison through [`SortValue::regular_cmp`](crate::SortValue::regular_cmp).
    #[default]
    Regular,
    /// Compare numeric views. Items without one cannot be sorted.
    Numeric,
    /// Compare textual views byte by byte.
    String,
    /// Like [`OrderingMode::String`], after lowercasing.
    StringCaseInsensitive,
    /// Natural order of textual views: digit runs compare by numeric value.
    Natural,
    /// Like [`OrderingMode::Natural`], after lowercasing.
    NaturalCaseInsensitive,
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderingMode::Regular => "REGULAR",
            OrderingMode::Numeric => "NUMERIC",
            OrderingMode::String => "STRING",
            OrderingMode::StringCaseInsensitive => "STRING_CASE_INSENSITIVE",
            OrderingMode::Natural => "NATURAL",
            OrderingMode::NaturalCaseInsensitive => "NATURAL_CASE_INSENSITIVE",
        };
        f.write_str(name)
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Orients an ascending comparison result. Equal stays equal, so stability holds in
    /// both directions.
    #[inline(always)]
    pub(crate) fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}
