//! `Compare` for primitive and core types.

use core::cmp::{Ordering, Reverse};
use core::time::Duration;

use super::{Compare, ResultOf};
use crate::category::{Partial, Strong};
use crate::ordering::{OrderingResult, PartialOrdering, StrongOrdering};

// =============================================================================
// Totally ordered scalars
// =============================================================================

macro_rules! impl_strong {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Compare for $ty {
                type Strength = Strong;

                #[inline]
                fn compare(&self, other: &Self) -> StrongOrdering {
                    StrongOrdering::from_std(Ord::cmp(self, other))
                }

                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_strong!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, (), str, Duration,
);

#[cfg(feature = "alloc")]
impl_strong!(alloc::string::String);

// =============================================================================
// Floating point
// =============================================================================

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            /// NaN is `Unordered` against every value, itself included.
            impl Compare for $ty {
                type Strength = Partial;

                #[inline]
                fn compare(&self, other: &Self) -> PartialOrdering {
                    PartialOrdering::from_partial(PartialOrd::partial_cmp(self, other))
                }

                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// =============================================================================
// Indirection
// =============================================================================

impl<T: Compare + ?Sized> Compare for &T {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        T::compare(*self, *other)
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        T::equivalent(*self, *other)
    }
}

#[cfg(feature = "alloc")]
impl<T: Compare + ?Sized> Compare for alloc::boxed::Box<T> {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        T::compare(self, other)
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        T::equivalent(self, other)
    }
}

// =============================================================================
// Option / Reverse
// =============================================================================

/// `None` sorts before any `Some`; two `None`s are equal.
impl<T: Compare> Compare for Option<T> {
    type Strength = T::Strength;

    fn compare(&self, other: &Self) -> ResultOf<T> {
        match (self, other) {
            (Some(a), Some(b)) => a.compare(b),
            (None, None) => <ResultOf<T> as OrderingResult>::EQUIVALENT,
            (None, Some(_)) => <ResultOf<T> as OrderingResult>::from_std(Ordering::Less),
            (Some(_), None) => <ResultOf<T> as OrderingResult>::from_std(Ordering::Greater),
        }
    }

    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.equivalent(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Compare> Compare for Reverse<T> {
    type Strength = T::Strength;

    #[inline]
    fn compare(&self, other: &Self) -> ResultOf<T> {
        self.0.compare(&other.0).reverse()
    }

    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.0.equivalent(&other.0)
    }
}
