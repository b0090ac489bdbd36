//! Integer comparison across signedness and width.
//!
//! `-7i32 < 42u32` is `false` after the usual arithmetic conversions. These
//! functions compare the mathematical values instead:
//!
//! ```
//! use tola_ord::compare::mixed::{cmp_less, cmp_greater_equal, in_range};
//!
//! assert!(cmp_less(-7i32, 42u32));
//! assert!(cmp_greater_equal(42u32, -7i32));
//! assert!(!in_range::<usize>(-1i32));
//! assert!(in_range::<usize>(665i32));
//! ```

use super::Compare;
use crate::category::Strong;
use crate::ordering::{OrderingResult, StrongOrdering};

mod sealed {
    pub trait Sealed {}
}

/// An integer in sign-magnitude form wide enough for every primitive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Widened {
    negative: bool,
    magnitude: u128,
}

impl Compare for Widened {
    type Strength = Strong;

    fn compare(&self, other: &Self) -> StrongOrdering {
        match (self.negative, other.negative) {
            (false, false) => StrongOrdering::from_std(self.magnitude.cmp(&other.magnitude)),
            (true, true) => StrongOrdering::from_std(other.magnitude.cmp(&self.magnitude)),
            (true, false) => StrongOrdering::Less,
            (false, true) => StrongOrdering::Greater,
        }
    }
}

/// Primitive integer types.
pub trait Integral: Copy + sealed::Sealed {
    const MIN: Self;
    const MAX: Self;

    fn widen(self) -> Widened;
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integral for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> Widened {
                    Widened { negative: self < 0, magnitude: self.unsigned_abs() as u128 }
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integral for $ty {
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn widen(self) -> Widened {
                    Widened { negative: false, magnitude: self as u128 }
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// Three-way comparison of the mathematical values of `a` and `b`.
#[inline]
pub fn cmp_three_way<A: Integral, B: Integral>(a: A, b: B) -> StrongOrdering {
    a.widen().compare(&b.widen())
}

macro_rules! cmp_predicates {
    ($($name:ident => $test:ident, $doc:literal;)*) => {
        paste::paste! {
            $(
                #[doc = $doc]
                #[inline]
                pub fn [<cmp_ $name>]<A: Integral, B: Integral>(a: A, b: B) -> bool {
                    cmp_three_way(a, b).$test()
                }
            )*
        }
    };
}

cmp_predicates! {
    equal => is_eq, "`a == b` on mathematical values.";
    not_equal => is_ne, "`a != b` on mathematical values.";
    less => is_lt, "`a < b` on mathematical values.";
    greater => is_gt, "`a > b` on mathematical values.";
    less_equal => is_le, "`a <= b` on mathematical values.";
    greater_equal => is_ge, "`a >= b` on mathematical values.";
}

/// `true` when `value` is representable in `R` without wrapping.
#[inline]
pub fn in_range<R: Integral>(value: impl Integral) -> bool {
    cmp_greater_equal(value, R::MIN) && cmp_less_equal(value, R::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sign() {
        assert!(cmp_less(-7i32, 42u32));
        assert!(cmp_greater(42u32, -7i32));
        assert!(cmp_not_equal(-1i8, u8::MAX));
        assert!(cmp_equal(5u64, 5i8));
        assert_eq!(cmp_three_way(-1i64, 0u8), StrongOrdering::Less);
    }

    #[test]
    fn test_extremes() {
        assert!(cmp_less(i128::MIN, 0u8));
        assert!(cmp_greater(u128::MAX, i128::MAX));
        assert!(cmp_less(i128::MIN, i128::MIN + 1));
        assert_eq!(cmp_three_way(i8::MIN, i8::MIN), StrongOrdering::Equal);
    }

    #[test]
    fn test_in_range() {
        assert!(!in_range::<usize>(-1i32));
        assert!(in_range::<usize>(665i32));
        assert!(in_range::<u8>(255u64));
        assert!(!in_range::<u8>(256u64));
        assert!(in_range::<i8>(-128i64));
        assert!(!in_range::<i8>(-129i64));
    }
}
