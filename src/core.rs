//! Core traits and types for kvsort.
//!
//! This module defines:
//! - [`Key`]: An integer or string key of an ordered container.
//! - [`Container`]: The ordered key-value map every operation consumes and produces.
//! - [`SortValue`]: The trait keys and values implement to be sortable under every
//!   [`OrderingMode`](crate::mode::OrderingMode).
//! - SortPtr: Internal pointer/cache structure used by the string kernel.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Ordered key-value container. Iteration order is insertion order.
pub type Container<V> = IndexMap<Key, V>;

/// Size of the prefix to be cached in the sort pointer.
pub const SPLICE_PREFIX_SIZE: usize = 8;

/// Pointer to an item, storing index and cached 8-byte key prefix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SortPtr {
    pub index: usize,
    pub cache: u64,
}

/// Returns the first 8 bytes of `key` starting at `offset`, big-endian and zero padded.
///
/// Comparing two prefixes as integers gives the same answer as comparing the byte
/// slices, except when both are equal (the keys may still differ past the prefix or
/// only in trailing zero bytes).
#[inline(always)]
pub(crate) fn u64_prefix(key: &[u8], offset: usize) -> u64 {
    if offset >= key.len() {
        return 0;
    }

    let rest = &key[offset..];
    let mut buf = [0u8; SPLICE_PREFIX_SIZE];
    let take = rest.len().min(SPLICE_PREFIX_SIZE);
    buf[..take].copy_from_slice(&rest[..take]);
    u64::from_be_bytes(buf)
}

/// A key of a [`Container`].
///
/// Strings holding a canonical decimal integer are normalized to [`Key::Int`], so
/// `Key::from("8") == Key::Int(8)` while `"08"` stays a string.
///
/// ```
/// use kvsort::Key;
///
/// assert_eq!(Key::from("8"), Key::Int(8));
/// assert_eq!(Key::from("08"), Key::Str("08".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    fn parse(s: &str) -> Self {
        if is_canonical_int(s) {
            if let Ok(value) = s.parse::<i64>() {
                return Key::Int(value);
            }
        }
        Key::Str(s.to_string())
    }
}

fn is_canonical_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => {
            first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit)
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{value}"),
            Key::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        if is_canonical_int(&value) {
            return Key::parse(&value);
        }
        Key::Str(value)
    }
}

/// A trait for comparing keys and values under every ordering mode.
///
/// Implementations exist for the integer and float primitives, `bool`, `char`,
/// `String`, `str`, `Option<T>`, references and [`Key`].
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use kvsort::SortValue;
/// use std::borrow::Cow;
/// use std::cmp::Ordering;
///
/// #[derive(Clone)]
/// struct Version {
///     label: String,
///     build: u32,
/// }
///
/// impl SortValue for Version {
///     fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
///         Some(self.build.cmp(&other.build))
///     }
///
///     fn as_number(&self) -> Option<f64> {
///         Some(f64::from(self.build))
///     }
///
///     fn as_text(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.label)
///     }
/// }
/// ```
pub trait SortValue {
    /// Loose comparison used by `OrderingMode::Regular`.
    ///
    /// Returns `None` when the two items cannot be ordered.
    fn regular_cmp(&self, other: &Self) -> Option<Ordering>;

    /// Numeric view used by `OrderingMode::Numeric`, `None` if there is none.
    fn as_number(&self) -> Option<f64>;

    /// Textual view used by the string and natural modes.
    fn as_text(&self) -> Cow<'_, str>;
}

/// Parses a numeric string: optional surrounding whitespace, optional sign, digits with
/// an optional fraction and exponent. Words like `inf` or `NaN` are not numeric.
pub(crate) fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let numeric_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric_chars || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Both numeric: compare as numbers. Otherwise compare bytes.
fn text_regular_cmp(a: &str, b: &str) -> Option<Ordering> {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y),
        _ => Some(a.as_bytes().cmp(b.as_bytes())),
    }
}

impl SortValue for Key {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => Some(a.cmp(b)),
            (Key::Str(a), Key::Str(b)) => text_regular_cmp(a, b),
            (Key::Int(a), Key::Str(b)) => match parse_numeric(b) {
                Some(y) => (*a as f64).partial_cmp(&y),
                None => Some(a.to_string().as_bytes().cmp(b.as_bytes())),
            },
            (Key::Str(_), Key::Int(_)) => other.regular_cmp(self).map(Ordering::reverse),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Key::Int(value) => Some(*value as f64),
            Key::Str(value) => parse_numeric(value),
        }
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Int(value) => Cow::Owned(value.to_string()),
            Key::Str(value) => Cow::Borrowed(value),
        }
    }
}

impl SortValue for str {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        text_regular_cmp(self, other)
    }

    fn as_number(&self) -> Option<f64> {
        parse_numeric(self)
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SortValue for String {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        text_regular_cmp(self, other)
    }

    fn as_number(&self) -> Option<f64> {
        parse_numeric(self)
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: SortValue + ?Sized> SortValue for &T {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).regular_cmp(*other)
    }

    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }

    fn as_text(&self) -> Cow<'_, str> {
        (**self).as_text()
    }
}

// `None` orders before any `Some`, reads as zero and renders empty.
impl<T: SortValue> SortValue for Option<T> {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(a), Some(b)) => a.regular_cmp(b),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            None => Some(0.0),
            Some(value) => value.as_number(),
        }
    }

    fn as_text(&self) -> Cow<'_, str> {
        match self {
            None => Cow::Borrowed(""),
            Some(value) => value.as_text(),
        }
    }
}

macro_rules! impl_sort_value_int {
    ($($t:ty),*) => {
        $(
            impl SortValue for $t {
                fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }

                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn as_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_sort_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_sort_value_float {
    ($($t:ty),*) => {
        $(
            impl SortValue for $t {
                fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }

                fn as_number(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }

                fn as_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_sort_value_float!(f32, f64);

impl SortValue for bool {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn as_number(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "1" } else { "" })
    }
}

impl SortValue for char {
    fn regular_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn as_number(&self) -> Option<f64> {
        self.to_digit(10).map(f64::from)
    }

    fn as_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
