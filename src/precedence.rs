//! Precedence-ordered dispatch.
//!
//! An unqualified call such as `sort()` can be served by more than one family of
//! strategies. A [`Precedence`] ranks the families of one level and resolves an operation
//! to the first family in rank order that defines it. Two levels exist:
//!
//! - [`Family`]: `BY_VALUE` before `BY_KEY` by default.
//! - [`KeyPolicy`]: within by-value sorting, `MAINTAIN_KEY` before `DISCARD_KEY` by default.
//!
//! [`SortOrder`] holds one of each and is configured from a single mixed list of
//! [`PrecedenceTag`]s.

use crate::config::SortConfig;
use crate::core::Container;
use crate::error::SortError;
use crate::operation::{Operation, OperationName};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Any tag a caller can put in a precedence list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecedenceTag {
    ByValue,
    ByKey,
    MaintainKey,
    DiscardKey,
}

impl PrecedenceTag {
    pub const ALL: [PrecedenceTag; 4] = [
        PrecedenceTag::ByValue,
        PrecedenceTag::ByKey,
        PrecedenceTag::MaintainKey,
        PrecedenceTag::DiscardKey,
    ];

    /// Maps the legacy numeric codes `1..=4` to tags.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(PrecedenceTag::ByValue),
            2 => Some(PrecedenceTag::ByKey),
            3 => Some(PrecedenceTag::MaintainKey),
            4 => Some(PrecedenceTag::DiscardKey),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrecedenceTag::ByValue => "BY_VALUE",
            PrecedenceTag::ByKey => "BY_KEY",
            PrecedenceTag::MaintainKey => "MAINTAIN_KEY",
            PrecedenceTag::DiscardKey => "DISCARD_KEY",
        }
    }

    /// The operations the family behind this tag defines.
    pub fn operations(self) -> &'static [OperationName] {
        use OperationName::*;

        match self {
            PrecedenceTag::ByValue => &[
                Sort,
                SortReverse,
                NaturalSort,
                NaturalSortCaseInsensitive,
                CustomSort,
                Random,
                Shuffle,
            ],
            PrecedenceTag::ByKey => &[Sort, SortReverse, CustomSort],
            PrecedenceTag::MaintainKey => &[
                Sort,
                SortReverse,
                NaturalSort,
                NaturalSortCaseInsensitive,
                CustomSort,
            ],
            PrecedenceTag::DiscardKey => &[Sort, SortReverse, CustomSort, Random, Shuffle],
        }
    }

    pub fn defines(self, operation: OperationName) -> bool {
        self.operations().contains(&operation)
    }
}

impl fmt::Display for PrecedenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses tag names case-insensitively (`"BY_KEY"`, `"by_key"`).
impl FromStr for PrecedenceTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrecedenceTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// One level of a precedence ranking.
pub trait Tag: Copy + Eq + fmt::Debug + 'static {
    /// Default ranking; lists every tag of the level exactly once.
    const DEFAULT: &'static [Self];

    /// The tag as seen at this level, `None` if it belongs to another level.
    fn from_tag(tag: PrecedenceTag) -> Option<Self>;

    fn tag(self) -> PrecedenceTag;
}

/// Top-level families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    ByValue,
    ByKey,
}

impl Tag for Family {
    const DEFAULT: &'static [Self] = &[Family::ByValue, Family::ByKey];

    fn from_tag(tag: PrecedenceTag) -> Option<Self> {
        match tag {
            PrecedenceTag::ByValue => Some(Family::ByValue),
            PrecedenceTag::ByKey => Some(Family::ByKey),
            _ => None,
        }
    }

    fn tag(self) -> PrecedenceTag {
        match self {
            Family::ByValue => PrecedenceTag::ByValue,
            Family::ByKey => PrecedenceTag::ByKey,
        }
    }
}

/// Key retention within by-value sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPolicy {
    MaintainKey,
    DiscardKey,
}

impl Tag for KeyPolicy {
    const DEFAULT: &'static [Self] = &[KeyPolicy::MaintainKey, KeyPolicy::DiscardKey];

    fn from_tag(tag: PrecedenceTag) -> Option<Self> {
        match tag {
            PrecedenceTag::MaintainKey => Some(KeyPolicy::MaintainKey),
            PrecedenceTag::DiscardKey => Some(KeyPolicy::DiscardKey),
            _ => None,
        }
    }

    fn tag(self) -> PrecedenceTag {
        match self {
            KeyPolicy::MaintainKey => PrecedenceTag::MaintainKey,
            KeyPolicy::DiscardKey => PrecedenceTag::DiscardKey,
        }
    }
}

/// Normalizes `tags` into a full ranking of level `T`.
///
/// Tags of other levels are skipped, duplicates keep their first position, and every
/// tag not mentioned is appended in default order.
pub fn normalize<T: Tag>(tags: &[PrecedenceTag]) -> Vec<T> {
    let mut ranking: Vec<T> = Vec::with_capacity(T::DEFAULT.len());
    for tag in tags.iter().filter_map(|&tag| T::from_tag(tag)) {
        if !ranking.contains(&tag) {
            ranking.push(tag);
        }
    }
    for &tag in T::DEFAULT {
        if !ranking.contains(&tag) {
            ranking.push(tag);
        }
    }
    ranking
}

#[derive(Debug)]
struct State<T> {
    ranking: Vec<T>,
    resolved: HashMap<OperationName, T>,
}

/// A ranking of one level plus its resolution cache.
///
/// The ranking and the cache live under one lock, so replacing the ranking and
/// clearing the cache happen together.
#[derive(Debug)]
pub struct Precedence<T> {
    state: Mutex<State<T>>,
}

impl<T: Tag> Default for Precedence<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                ranking: T::DEFAULT.to_vec(),
                resolved: HashMap::new(),
            }),
        }
    }
}

impl<T: Tag> Precedence<T> {
    pub fn new(tags: &[PrecedenceTag]) -> Self {
        let precedence = Self::default();
        precedence.set_order(tags);
        precedence
    }

    fn state(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the ranking with the normalized `tags` and clears the cache.
    pub fn set_order(&self, tags: &[PrecedenceTag]) {
        let ranking = normalize::<T>(tags);
        tracing::debug!(?ranking, "replacing precedence ranking");

        let mut state = self.state();
        state.ranking = ranking;
        state.resolved.clear();
    }

    pub fn get_order(&self) -> Vec<T> {
        self.state().ranking.clone()
    }

    /// First tag in rank order whose family defines `operation`.
    pub fn resolve(&self, operation: OperationName) -> Option<T> {
        let mut state = self.state();
        if let Some(&tag) = state.resolved.get(&operation) {
            tracing::trace!(%operation, ?tag, "precedence cache hit");
            return Some(tag);
        }

        let tag = state
            .ranking
            .iter()
            .copied()
            .find(|tag| tag.tag().defines(operation))?;
        tracing::trace!(%operation, ?tag, "precedence resolved");
        state.resolved.insert(operation, tag);
        Some(tag)
    }

    /// Resolves `operation`, builds the strategy for the winning tag through
    /// `instantiate`, and applies the operation to it.
    pub fn dispatch<'a, V>(
        &self,
        operation: Operation<V>,
        instantiate: impl FnOnce(T) -> Box<dyn Strategy<V> + 'a>,
    ) -> Result<Container<V>, SortError> {
        let name = operation.name();
        let tag = self
            .resolve(name)
            .ok_or_else(|| SortError::unknown_operation(name.as_str()))?;
        tracing::debug!(operation = %name, ?tag, "dispatching");
        instantiate(tag).apply(operation)
    }
}

/// The full two-level configuration consulted by unqualified calls.
///
/// Each [`Sorter`](crate::Sorter) holds one behind an `Arc`; share an `Arc<SortOrder>`
/// between sorters to configure them together.
///
/// ```
/// use kvsort::{PrecedenceTag, SortOrder};
///
/// let order = SortOrder::default();
/// order.set_order([PrecedenceTag::DiscardKey, PrecedenceTag::ByKey]);
///
/// assert_eq!(
///     order.get_order(),
///     vec![
///         PrecedenceTag::ByKey,
///         PrecedenceTag::ByValue,
///         PrecedenceTag::DiscardKey,
///         PrecedenceTag::MaintainKey,
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct SortOrder {
    families: Precedence<Family>,
    key_policies: Precedence<KeyPolicy>,
}

impl SortOrder {
    pub fn new(tags: impl IntoIterator<Item = PrecedenceTag>) -> Self {
        let order = Self::default();
        order.set_order(tags);
        order
    }

    pub fn from_config(config: &SortConfig) -> Self {
        Self::new(config.tags())
    }

    /// Feeds top-level tags to the family ranking and sub-level tags to the by-value
    /// ranking. Both caches are cleared.
    pub fn set_order(&self, tags: impl IntoIterator<Item = PrecedenceTag>) {
        let tags: Vec<PrecedenceTag> = tags.into_iter().collect();
        self.families.set_order(&tags);
        self.key_policies.set_order(&tags);
    }

    /// Like [`SortOrder::set_order`] with tag names; unrecognized names are ignored.
    pub fn set_order_names<S: AsRef<str>>(&self, names: impl IntoIterator<Item = S>) {
        self.set_order(parse_tags(names));
    }

    /// The family ranking followed by the by-value ranking.
    pub fn get_order(&self) -> Vec<PrecedenceTag> {
        self.families
            .get_order()
            .into_iter()
            .map(Tag::tag)
            .chain(self.key_policies.get_order().into_iter().map(Tag::tag))
            .collect()
    }

    pub fn families(&self) -> &Precedence<Family> {
        &self.families
    }

    pub fn key_policies(&self) -> &Precedence<KeyPolicy> {
        &self.key_policies
    }
}

pub(crate) fn parse_tags<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Vec<PrecedenceTag> {
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let tag = name.parse::<PrecedenceTag>().ok();
            if tag.is_none() {
                tracing::debug!(name, "ignoring unrecognized precedence tag");
            }
            tag
        })
        .collect()
}
