//! Ordering kernels.
//!
//! Every operation sorts a permutation of indices and then materializes a new container
//! from it, so the input is never touched and a failed sort leaves nothing behind.
//!
//! - **Comparison sort**: stable merge sort over indices. It always terminates with a
//!   permutation, even when the comparison is not a total order (loose comparison of
//!   mixed numeric and non-numeric strings is not transitive). Incomparable pairs and
//!   panicking comparators are turned into [`SortError::SortFailure`].
//! - **String kernel**: byte-wise ordering with an 8-byte prefix cached next to each index,
//!   so most comparisons never touch the full key. Large inputs are first distributed
//!   into 256 buckets on the leading byte.
//! - **Shuffle**: a uniformly random permutation.

use crate::core::{Container, Key, SPLICE_PREFIX_SIZE, SortPtr, SortValue, u64_prefix};
use crate::error::SortError;
use crate::mode::{Direction, OrderingMode};
use crate::natural::natural_cmp;
use cuneiform::cuneiform;
use rand::Rng;
use rand::seq::SliceRandom;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};

const RADIX_SORT_THRESHOLD: usize = 1024;

/// Runs up to this length are insertion sorted before merging.
const INSERTION_RUN: usize = 16;

/// Number of buckets for Radix sort (256 for byte-wise).
const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Returns the indices that order `items` under `mode`.
pub(crate) fn order_by_mode<T: SortValue>(
    items: &[T],
    mode: OrderingMode,
    direction: Direction,
) -> Result<Vec<usize>, SortError> {
    match mode {
        OrderingMode::Regular => order_by(items, direction, |a, b| a.regular_cmp(b)),
        OrderingMode::Numeric => {
            let numbers = items
                .iter()
                .map(|item| {
                    item.as_number().ok_or_else(|| {
                        SortError::sort_failure(format!(
                            "`{}` has no numeric value",
                            item.as_text()
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, SortError>>()?;
            order_by(&numbers, direction, |a, b| a.partial_cmp(b))
        }
        OrderingMode::String => Ok(string_order(items, false, direction)),
        OrderingMode::StringCaseInsensitive => Ok(string_order(items, true, direction)),
        OrderingMode::Natural => {
            order_by(&texts(items, false), direction, |a, b| Some(natural_cmp(a, b)))
        }
        OrderingMode::NaturalCaseInsensitive => {
            order_by(&texts(items, true), direction, |a, b| Some(natural_cmp(a, b)))
        }
    }
}

fn string_order<T: SortValue>(items: &[T], fold_case: bool, direction: Direction) -> Vec<usize> {
    let texts = texts(items, fold_case);
    let bytes: Vec<&[u8]> = texts.iter().map(|text| text.as_bytes()).collect();
    text_order(&bytes, direction)
}

fn texts<T: SortValue>(items: &[T], fold_case: bool) -> Vec<Cow<'_, str>> {
    items
        .iter()
        .map(|item| {
            let text = item.as_text();
            if fold_case {
                Cow::Owned(text.to_lowercase())
            } else {
                text
            }
        })
        .collect()
}

/// Stable comparison sort over indices of `items`.
///
/// `compare` returns `None` for pairs that cannot be ordered; any such pair fails the
/// whole sort.
pub(crate) fn order_by<T, F>(
    items: &[T],
    direction: Direction,
    mut compare: F,
) -> Result<Vec<usize>, SortError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    let mut incomparable = false;

    // Caller comparators may panic.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        merge_sort(&mut indices, &mut |a, b| match compare(&items[a], &items[b]) {
            Some(ordering) => direction.orient(ordering),
            None => {
                incomparable = true;
                Ordering::Equal
            }
        });
    }));

    if outcome.is_err() {
        return Err(SortError::sort_failure("the compare function panicked"));
    }
    if incomparable {
        return Err(SortError::sort_failure("items are not comparable"));
    }
    Ok(indices)
}

/// Stable bottom-up merge sort of `indices`.
///
/// Only ever moves indices between two buffers, so an inconsistent `compare` yields some
/// permutation instead of a panic.
fn merge_sort<F>(indices: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    indices
        .chunks_mut(INSERTION_RUN)
        .for_each(|run| insertion_sort(run, compare));

    let len = indices.len();
    let mut buffer = vec![0usize; len];
    let mut width = INSERTION_RUN;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &indices[start..mid],
                &indices[mid..end],
                &mut buffer[start..end],
                compare,
            );
            start = end;
        }
        indices.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn insertion_sort<F>(run: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    for i in 1..run.len() {
        let mut j = i;
        while j > 0 && compare(run[j - 1], run[j]) == Ordering::Greater {
            run.swap(j - 1, j);
            j -= 1;
        }
    }
}

// Ties take from the left run.
fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j == right.len()
            || (i < left.len() && compare(left[i], right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Byte-wise ordering of `texts`. Infallible and stable.
pub(crate) fn text_order<T: AsRef<[u8]>>(texts: &[T], direction: Direction) -> Vec<usize> {
    let mut ptrs: Vec<SortPtr> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| SortPtr {
            index,
            cache: u64_prefix(text.as_ref(), 0),
        })
        .collect();

    if ptrs.len() > RADIX_SORT_THRESHOLD {
        radix_buckets(texts, &mut ptrs, direction);
    } else {
        ptrs.sort_by(|a, b| direction.orient(compare_entries(texts, a, b)));
    }

    ptrs.into_iter().map(|p| p.index).collect()
}

/// Stable bucket pass on the leading byte, then a comparison sort per bucket.
///
/// 1. Counts frequencies of each leading byte (from cache).
/// 2. Computes bucket starting positions, walking buckets backwards when descending.
/// 3. Permutes pointers into their buckets, preserving input order inside each bucket.
/// 4. Sorts each bucket on the full keys.
fn radix_buckets<T: AsRef<[u8]>>(texts: &[T], ptrs: &mut [SortPtr], direction: Direction) {
    let mut counts = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    // cache >> 56 extracts the most significant byte (big-endian prefix)
    ptrs.iter().for_each(|p| {
        counts[(p.cache >> 56) as usize] += 1;
    });

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    let mut assign = |bucket: usize| {
        offsets[bucket] = sum;
        sum += counts[bucket];
    };
    match direction {
        Direction::Ascending => (0..RADIX_BUCKETS).for_each(&mut assign),
        Direction::Descending => (0..RADIX_BUCKETS).rev().for_each(&mut assign),
    }

    let buffer = ptrs.to_vec();
    let mut cursors = offsets;
    buffer.iter().for_each(|p| {
        let bucket = (p.cache >> 56) as usize;
        ptrs[cursors[bucket]] = *p;
        cursors[bucket] += 1;
    });

    offsets
        .iter()
        .zip(counts.iter())
        .filter(|&(_, &count)| count > 1)
        .for_each(|(&start, &count)| {
            ptrs[start..start + count]
                .sort_by(|a, b| direction.orient(compare_entries(texts, a, b)));
        });
}

/// Compares two entries in ascending byte order.
///
/// 1. **Fast path**: Compares cached `u64` values.
/// 2. **Slow path**: If caches match and both keys are at least 8 bytes long, the first
///    8 bytes are known equal and only the tails are compared. Shorter keys are compared
///    in full, since zero padding makes `"a"` and `"a\0"` share a cache.
#[inline(always)]
fn compare_entries<T: AsRef<[u8]>>(texts: &[T], a: &SortPtr, b: &SortPtr) -> Ordering {
    if a.cache != b.cache {
        return a.cache.cmp(&b.cache);
    }

    let key_a = texts[a.index].as_ref();
    let key_b = texts[b.index].as_ref();

    if key_a.len() < SPLICE_PREFIX_SIZE || key_b.len() < SPLICE_PREFIX_SIZE {
        return key_a.cmp(key_b);
    }
    key_a[SPLICE_PREFIX_SIZE..].cmp(&key_b[SPLICE_PREFIX_SIZE..])
}

/// A uniformly random permutation of `0..len`.
pub(crate) fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}

/// Builds a new container with the pairs of `items` in `indices` order, keys kept.
pub(crate) fn take_pairs<V: Clone>(items: &Container<V>, indices: &[usize]) -> Container<V> {
    indices
        .iter()
        .filter_map(|&index| items.get_index(index))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds a new container with the values of `items` in `indices` order, keyed `0..n`.
pub(crate) fn take_values<V: Clone>(items: &Container<V>, indices: &[usize]) -> Container<V> {
    indices
        .iter()
        .filter_map(|&index| items.get_index(index))
        .zip(0i64..)
        .map(|((_, value), position)| (Key::Int(position), value.clone()))
        .collect()
}
