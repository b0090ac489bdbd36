//! Wrappers that give a type a comparator with a chosen strength.
//!
//! | Adapter          | Strength | Source                                   |
//! |------------------|----------|------------------------------------------|
//! | `TotalOrder<F>`  | Strong   | IEEE-754 total order (`f32`, `f64`)      |
//! | `Nullable<T>`    | Partial  | `T`, with "missing" unordered            |
//! | `ByOrd<T>`       | Strong   | `core::cmp::Ord`                         |
//! | `ByPartialOrd<T>`| Partial  | `core::cmp::PartialOrd`                  |
//! | `Synthesized<T>` | Weak     | `==` and `<` only                        |

use core::cmp::Ordering;

use super::Compare;
use crate::category::{Partial, Strong, Weak};
use crate::ordering::{OrderingResult, PartialOrdering, StrongOrdering, WeakOrdering};

// =============================================================================
// TotalOrder
// =============================================================================

/// A float ordered by the IEEE-754 `totalOrder` predicate.
///
/// Every value is ordered, NaN included:
/// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalOrder<F>(pub F);

macro_rules! impl_total_order {
    ($($ty:ty),*) => {
        $(
            impl Compare for TotalOrder<$ty> {
                type Strength = Strong;

                #[inline]
                fn compare(&self, other: &Self) -> StrongOrdering {
                    StrongOrdering::from_std(self.0.total_cmp(&other.0))
                }
            }
        )*
    };
}

impl_total_order!(f32, f64);

/// Strong comparison of two floats under the total order.
#[inline]
pub fn strong_order(a: f64, b: f64) -> StrongOrdering {
    TotalOrder(a).compare(&TotalOrder(b))
}

// =============================================================================
// Nullable
// =============================================================================

/// An optional value whose absence is incomparable.
///
/// `None` is `Unordered` against every value, another `None` included, and
/// never equal to anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<T>(pub Option<T>);

impl<T> Nullable<T> {
    #[inline]
    pub const fn missing() -> Self {
        Nullable(None)
    }

    #[inline]
    pub const fn new(value: T) -> Self {
        Nullable(Some(value))
    }
}

impl<T: Compare> Compare for Nullable<T> {
    type Strength = Partial;

    fn compare(&self, other: &Self) -> PartialOrdering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.compare(b).outcome().into(),
            _ => PartialOrdering::Unordered,
        }
    }

    fn equivalent(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.equivalent(b),
            _ => false,
        }
    }
}

// =============================================================================
// std bridges
// =============================================================================

/// Strong comparator from `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByOrd<T>(pub T);

impl<T: Ord> Compare for ByOrd<T> {
    type Strength = Strong;

    #[inline]
    fn compare(&self, other: &Self) -> StrongOrdering {
        StrongOrdering::from_std(self.0.cmp(&other.0))
    }
}

/// Partial comparator from `PartialOrd`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ByPartialOrd<T>(pub T);

impl<T: PartialOrd> Compare for ByPartialOrd<T> {
    type Strength = Partial;

    #[inline]
    fn compare(&self, other: &Self) -> PartialOrdering {
        PartialOrdering::from_partial(self.0.partial_cmp(&other.0))
    }
}

/// Weak comparator synthesized from `==` and `<`.
///
/// `a == b` is `Equivalent`, `a < b` is `Less`, anything else `Greater`. The
/// wrapped operators must form a strict weak order; values for which neither
/// holds in either direction (NaN) end up `Greater`.
///
/// Such values break antisymmetry (`a > b` and `b > a`), and std's sort may
/// panic when [`sort`](crate::sort::sort) meets them. Wrap only values known
/// to be ordered, or sort the unwrapped values with
/// [`sort_by_policy`](crate::sort::sort_by_policy).
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesized<T>(pub T);

impl<T: PartialOrd> Compare for Synthesized<T> {
    type Strength = Weak;

    #[inline]
    fn compare(&self, other: &Self) -> WeakOrdering {
        if self.0 == other.0 {
            WeakOrdering::Equivalent
        } else if self.0 < other.0 {
            WeakOrdering::Less
        } else {
            WeakOrdering::Greater
        }
    }
}

impl<T: PartialOrd> Synthesized<T> {
    /// Std ordering of the synthesized comparison.
    #[inline]
    pub fn cmp_std(&self, other: &Self) -> Ordering {
        match self.compare(other) {
            WeakOrdering::Less => Ordering::Less,
            WeakOrdering::Equivalent => Ordering::Equal,
            WeakOrdering::Greater => Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order_orders_nan() {
        assert_eq!(strong_order(f64::NAN, f64::NAN), StrongOrdering::Equal);
        assert_eq!(strong_order(1.0, f64::NAN), StrongOrdering::Less);
        assert_eq!(strong_order(-0.0, 0.0), StrongOrdering::Less);
        assert_eq!(
            TotalOrder(f32::INFINITY).compare(&TotalOrder(1.0)),
            StrongOrdering::Greater
        );
    }

    #[test]
    fn test_nullable() {
        let two = Nullable::new(2i32);
        let four = Nullable::new(4i32);
        assert_eq!(two.compare(&four), PartialOrdering::Less);
        assert_eq!(four.compare(&four), PartialOrdering::Equivalent);
        assert_eq!(two.compare(&Nullable::missing()), PartialOrdering::Unordered);
        assert_eq!(
            Nullable::<i32>::missing().compare(&Nullable::missing()),
            PartialOrdering::Unordered
        );
        assert!(four.equivalent(&four));
        assert!(!Nullable::<i32>::missing().equivalent(&Nullable::missing()));
    }

    #[test]
    fn test_by_ord_and_partial_ord() {
        assert_eq!(ByOrd("a").compare(&ByOrd("b")), StrongOrdering::Less);
        assert_eq!(
            ByPartialOrd(f64::NAN).compare(&ByPartialOrd(1.0)),
            PartialOrdering::Unordered
        );
    }

    #[test]
    fn test_synthesized() {
        #[derive(PartialEq, PartialOrd)]
        struct Rating(u8);

        assert_eq!(Synthesized(Rating(1)).compare(&Synthesized(Rating(2))), WeakOrdering::Less);
        assert_eq!(
            Synthesized(Rating(2)).compare(&Synthesized(Rating(2))),
            WeakOrdering::Equivalent
        );
        assert_eq!(Synthesized(Rating(3)).cmp_std(&Synthesized(Rating(2))), Ordering::Greater);
    }
}
