//! # kvsort
//!
//! `kvsort` sorts ordered key-value containers without mutating them. Every operation
//! returns a new [`Container`] (an [`IndexMap`](indexmap::IndexMap) keyed by [`Key`]) and
//! leaves the input untouched.
//!
//! Sorting semantics are chosen along two independent axes:
//!
//! - **Ordering basis**: by value ([`Sorter::by_value`]) or by key ([`Sorter::by_key`]).
//! - **Key retention** (by value only): keep the original keys
//!   ([`ByValue::maintain_keys`]) or renumber them `0..n` ([`ByValue::discard_key`]).
//!
//! and then one ordering strategy is invoked: ascending, descending, natural order,
//! natural order case-insensitive, custom comparator or random shuffle.
//!
//! ## Key Features
//!
//! - **Non-mutating**: Sorting works on an index permutation; the output is only built once
//!   the sort succeeded, so a failure leaves nothing half-done.
//! - **Precedence dispatch**: Unqualified calls such as [`Sorter::sort`] are resolved
//!   through a configurable [`SortOrder`]: the first family in rank order that defines the
//!   operation handles it.
//! - **Sort flag modes**: [`OrderingMode`] mirrors the classic regular, numeric, string
//!   and natural flags, with case-insensitive variants.
//! - **Prefix-cached string kernel**: String mode caches an 8-byte key prefix next to each
//!   index and buckets large inputs by their leading byte.
//! - **Stable**: Equal items keep their input order, ascending and descending.
//!
//! ## Usage
//!
//! ### Explicit chaining
//!
//! ```rust
//! use kvsort::{OrderingMode, Sorter};
//!
//! let sorter = Sorter::new([("a", 1), ("z", 2), ("f", 3)]);
//!
//! let by_key = sorter.by_key().sort_reverse(OrderingMode::Regular).unwrap();
//! assert_eq!(by_key.keys().map(ToString::to_string).collect::<Vec<_>>(), ["z", "f", "a"]);
//!
//! // The sorter still holds the original order.
//! assert_eq!(sorter.items().keys().map(ToString::to_string).collect::<Vec<_>>(), ["a", "z", "f"]);
//! ```
//!
//! ### Precedence
//!
//! With the default order `[BY_VALUE, BY_KEY, MAINTAIN_KEY, DISCARD_KEY]`, `sort()` is
//! `by_value().maintain_keys().sort()`. Operations a family lacks fall through to the next
//! one: `random()` resolves to the discard-key family.
//!
//! ```rust
//! use kvsort::{Key, OrderingMode, PrecedenceTag, Sorter};
//!
//! let sorter = Sorter::new([(5, "c"), (1, "a")]);
//! sorter.set_order([PrecedenceTag::DiscardKey]);
//!
//! let sorted = sorter.sort(OrderingMode::Regular).unwrap();
//! assert_eq!(sorted.keys().collect::<Vec<_>>(), [&Key::Int(0), &Key::Int(1)]);
//! ```
//!
//! ### Custom comparators
//!
//! ```rust
//! use kvsort::{Comparator, Sorter};
//!
//! let sorter = Sorter::new([("x", 10), ("y", 30), ("z", 20)]);
//! let sorted = sorter.custom_sort(Comparator::<i32>::values(|a, b| b.cmp(a))).unwrap();
//! assert_eq!(sorted.values().copied().collect::<Vec<_>>(), [30, 20, 10]);
//! ```
//!
//! ## Errors
//!
//! Failures surface as [`SortError`]: unknown operations, comparators that cannot serve
//! the resolved family, and items that cannot be ordered under the chosen mode.

mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod mode;
pub mod natural;
pub mod operation;
pub mod precedence;
pub mod sorter;
pub mod strategy;

pub use config::SortConfig;
pub use core::{Container, Key, SortValue};
pub use error::SortError;
pub use mode::OrderingMode;
pub use operation::{Comparator, Operation, OperationName};
pub use precedence::{Family, KeyPolicy, Precedence, PrecedenceTag, SortOrder};
pub use sorter::Sorter;
pub use strategy::{ByKey, ByValue, DiscardKey, MaintainKeys, Strategy};

pub mod prelude {
    pub use crate::config::SortConfig;
    pub use crate::core::{Container, Key, SortValue};
    pub use crate::error::SortError;
    pub use crate::mode::OrderingMode;
    pub use crate::operation::{Comparator, Operation, OperationName};
    pub use crate::precedence::{PrecedenceTag, SortOrder};
    pub use crate::sorter::Sorter;
    pub use crate::strategy::Strategy;
}
