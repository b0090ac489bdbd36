//! Lexicographic three-way comparison of sequences.
//!
//! Elements are compared pairwise; the first non-zero outcome (including
//! `Unordered`) decides. When one sequence is a prefix of the other, the
//! shorter one sorts first.

use super::{Compare, ResultOf};
use crate::ordering::OrderingResult;

/// Three-way lexicographic comparison of two slices.
pub fn lexicographic<T: Compare>(a: &[T], b: &[T]) -> ResultOf<T> {
    for (x, y) in a.iter().zip(b) {
        let r = x.compare(y);
        if !r.is_eq() {
            return r;
        }
    }
    <ResultOf<T> as OrderingResult>::from_std(a.len().cmp(&b.len()))
}

fn all_equivalent<T: Compare>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equivalent(y))
}

impl<T: Compare> Compare for [T] {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        lexicographic(self, other)
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        all_equivalent(self, other)
    }
}

impl<T: Compare, const N: usize> Compare for [T; N] {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        lexicographic(self, other)
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        all_equivalent(self, other)
    }
}

#[cfg(feature = "alloc")]
impl<T: Compare> Compare for alloc::vec::Vec<T> {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        lexicographic(self, other)
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        all_equivalent(self, other)
    }
}
