//! # Layer 3: Ordering Consumers
//!
//! Thin adapters that hand a [`Compare`] implementation to slice sorting and
//! ordered std containers.
//!
//! Sorting needs a strict weak order, so [`sort`] only accepts total
//! strengths. Sorting a `Partial` type takes an explicit
//! [`UnorderedPolicy`]:
//!
//! ```compile_fail
//! let mut heights = [1.5f64, f64::NAN, 0.5];
//! tola_ord::sort::sort(&mut heights);
//! ```
//!
//! ```
//! use tola_ord::sort::{sort_by_policy, UnorderedPolicy};
//!
//! let mut heights = [1.5f64, f64::NAN, 0.5];
//! sort_by_policy(&mut heights, UnorderedPolicy::Last).unwrap();
//! assert_eq!(heights[..2], [0.5, 1.5]);
//! assert!(heights[2].is_nan());
//! ```
//!
//! [`sort_by_policy`] never hands an `Unordered` outcome to std, so pairwise
//! incomparable values are fine there. The total sorts trust the comparator:
//! one that breaks its strict weak order (such as
//! [`Synthesized`](crate::compare::Synthesized) over NaN) may make std's
//! sort panic.

use core::cmp::Ordering;

use crate::category::{Strength, Total};
use crate::compare::Compare;
use crate::ordering::{ComparisonResult, OrderingResult};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

#[cfg(feature = "alloc")]
use crate::error::SortError;

/// What a sort does with values that are unordered even against themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnorderedPolicy {
    /// Fail without sorting.
    #[default]
    Reject,
    /// Move them to the front, keeping their relative order.
    First,
    /// Move them to the back, keeping their relative order.
    Last,
}

#[inline]
fn total_cmp<T: Compare>(a: &T, b: &T) -> Ordering
where
    T::Strength: Total,
{
    <T::Strength as Total>::to_ordering(a.compare(b))
}

#[inline]
fn is_incomparable<T: Compare>(value: &T) -> bool {
    value.compare(value).outcome().is_unordered()
}

/// Stable sort under a total comparator.
#[cfg(feature = "alloc")]
pub fn sort<T: Compare>(slice: &mut [T])
where
    T::Strength: Total,
{
    slice.sort_by(total_cmp::<T>);
}

/// Unstable sort under a total comparator.
pub fn sort_unstable<T: Compare>(slice: &mut [T])
where
    T::Strength: Total,
{
    slice.sort_unstable_by(total_cmp::<T>);
}

/// Stable sort by a projected key with a total comparator.
#[cfg(feature = "alloc")]
pub fn sort_by_projection<T, K, P>(slice: &mut [T], project: P)
where
    K: Compare,
    K::Strength: Total,
    P: Fn(&T) -> K,
{
    slice.sort_by(|a, b| total_cmp(&project(a), &project(b)));
}

/// Stable sort of any strength.
///
/// Values unordered against themselves (NaN-like) are rejected or moved to
/// one end according to `policy`. The rest are placed in a linear extension
/// of their partial order: each position takes the earliest remaining value
/// that nothing remaining precedes, so equivalent values keep their input
/// order. Under `Reject`, a pair of ordinary values comparing `Unordered`
/// fails as well. Both rejections leave the slice untouched.
///
/// Costs O(n²) comparisons.
#[cfg(feature = "alloc")]
pub fn sort_by_policy<T: Compare>(slice: &mut [T], policy: UnorderedPolicy) -> Result<(), SortError> {
    let ordinary = match policy {
        UnorderedPolicy::Reject => {
            if let Some(index) = slice.iter().position(is_incomparable::<T>) {
                tracing::debug!(index, "rejected sort over incomparable element");
                return Err(SortError::Incomparable { index });
            }
            slice
        }
        UnorderedPolicy::First | UnorderedPolicy::Last => {
            let front = policy == UnorderedPolicy::First;
            slice.sort_by_key(|value| is_incomparable(value) != front);

            let count = slice.iter().filter(|value| is_incomparable(*value)).count();
            if count > 0 {
                tracing::debug!(count, ?policy, "moved incomparable elements");
            }

            let len = slice.len();
            if front { &mut slice[count..] } else { &mut slice[..len - count] }
        }
    };

    let (order, unordered) = linear_extension(ordinary);
    if unordered && policy == UnorderedPolicy::Reject {
        tracing::debug!("rejected sort over unordered pair");
        return Err(SortError::Unordered);
    }
    permute(ordinary, order);
    Ok(())
}

/// `true` when `slice[i]` must come before `slice[j]`. Always asks the
/// lower index, so counting and releasing see the same outcome.
#[cfg(feature = "alloc")]
#[inline]
fn precedes<T: Compare>(slice: &[T], i: usize, j: usize) -> bool {
    if i < j {
        slice[i].compare(&slice[j]).outcome() == ComparisonResult::Less
    } else {
        slice[j].compare(&slice[i]).outcome() == ComparisonResult::Greater
    }
}

/// Source index for each output position, and whether any pair was
/// `Unordered`.
///
/// A comparator with a cycle cannot stall the walk: when no value is free,
/// the earliest remaining one is taken.
#[cfg(feature = "alloc")]
fn linear_extension<T: Compare>(slice: &[T]) -> (Vec<usize>, bool) {
    let n = slice.len();
    let mut pending = vec![0usize; n];
    let mut unordered = false;
    for i in 0..n {
        for j in i + 1..n {
            match slice[i].compare(&slice[j]).outcome() {
                ComparisonResult::Less => pending[j] += 1,
                ComparisonResult::Greater => pending[i] += 1,
                ComparisonResult::Unordered => unordered = true,
                ComparisonResult::Equal | ComparisonResult::Equivalent => {}
            }
        }
    }

    let mut placed = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while order.len() < n {
        let Some(next) = (0..n)
            .find(|&i| !placed[i] && pending[i] == 0)
            .or_else(|| (0..n).find(|&i| !placed[i]))
        else {
            break;
        };
        placed[next] = true;
        order.push(next);
        for j in 0..n {
            if !placed[j] && precedes(slice, next, j) {
                pending[j] = pending[j].saturating_sub(1);
            }
        }
    }
    (order, unordered)
}

/// Move `slice[order[k]]` to position `k`.
#[cfg(feature = "alloc")]
fn permute<T>(slice: &mut [T], order: Vec<usize>) {
    let mut dest = vec![0usize; order.len()];
    for (position, source) in order.into_iter().enumerate() {
        dest[source] = position;
    }
    for i in 0..dest.len() {
        while dest[i] != i {
            let d = dest[i];
            slice.swap(i, d);
            dest.swap(i, d);
        }
    }
}

/// `true` when every neighbouring pair compares `Less`, `Equal` or
/// `Equivalent`. Any `Unordered` pair makes the slice unsorted.
pub fn is_sorted<T: Compare>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0].compare(&w[1]).is_le())
}

// =============================================================================
// Key
// =============================================================================

/// Bridge from [`Compare`] to the std comparison traits.
///
/// `PartialEq`/`PartialOrd` are available for every strength; `Eq`/`Ord`
/// only for total ones, so a `Key<f64>` cannot be put in a `BTreeSet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Key<T>(pub T);

impl<T> Key<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Compare> PartialEq for Key<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.equivalent(&other.0)
    }
}

impl<T: Compare> Eq for Key<T> where T::Strength: Total {}

impl<T: Compare> PartialOrd for Key<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.compare(&other.0).to_std()
    }
}

impl<T: Compare> Ord for Key<T>
where
    T::Strength: Total,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        total_cmp(&self.0, &other.0)
    }
}

/// `true` when sorting `T` needs an explicit [`UnorderedPolicy`].
#[inline]
pub const fn requires_policy<T: Compare>() -> bool {
    !<T::Strength as Strength>::CATEGORY.is_total()
}
