//! Type-level ordering strength.
//!
//! Core types: `Strong`, `Weak`, `Partial`, `Strength` trait.

use core::cmp::Ordering;

use super::Category;
use crate::ordering::{OrderingResult, PartialOrdering, StrongOrdering, WeakOrdering};

/// Type-level ordering strength.
pub trait Strength: 'static {
    const CATEGORY: Category;

    /// Typed outcome of a comparison at this strength.
    type Result: OrderingResult;

    /// Type-level meet: the weaker of `Self` and `Other`.
    type Meet<Other: Strength>: Strength;

    /// Meet with `Weak`. Lets `Weak::Meet<O>` dispatch on `O`.
    type MeetWeak: Strength;
}

/// Type-level Strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Strong;

/// Type-level Weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weak;

/// Type-level Partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Partial;

impl Strength for Strong {
    const CATEGORY: Category = Category::Strong;
    type Result = StrongOrdering;
    type Meet<Other: Strength> = Other;
    type MeetWeak = Weak;
}

impl Strength for Weak {
    const CATEGORY: Category = Category::Weak;
    type Result = WeakOrdering;
    type Meet<Other: Strength> = Other::MeetWeak;
    type MeetWeak = Weak;
}

impl Strength for Partial {
    const CATEGORY: Category = Category::Partial;
    type Result = PartialOrdering;
    type Meet<Other: Strength> = Partial;
    type MeetWeak = Partial;
}

/// Meet alias: `Meet<A, B>` is the weaker of `A` and `B`.
pub type Meet<A, B> = <A as Strength>::Meet<B>;

// =============================================================================
// Total strengths
// =============================================================================

/// Strengths whose results always map onto `core::cmp::Ordering`.
///
/// Implemented for `Strong` and `Weak` only; consumers that need a strict
/// weak order (sorting, ordered containers) bound on this.
pub trait Total: Strength {
    fn to_ordering(result: Self::Result) -> Ordering;
}

impl Total for Strong {
    #[inline(always)]
    fn to_ordering(result: StrongOrdering) -> Ordering {
        match result {
            StrongOrdering::Less => Ordering::Less,
            StrongOrdering::Equal => Ordering::Equal,
            StrongOrdering::Greater => Ordering::Greater,
        }
    }
}

impl Total for Weak {
    #[inline(always)]
    fn to_ordering(result: WeakOrdering) -> Ordering {
        match result {
            WeakOrdering::Less => Ordering::Less,
            WeakOrdering::Equivalent => Ordering::Equal,
            WeakOrdering::Greater => Ordering::Greater,
        }
    }
}

// =============================================================================
// Weakening
// =============================================================================

/// Convert a typed result into the result of a weaker (or equal) strength.
///
/// There is no impl in the strengthening direction: asking for a
/// `Strong` result out of a `PartialOrdering` does not type-check.
#[diagnostic::on_unimplemented(
    message = "a `{S}` ordering cannot be built from a `{Self}` result",
    label = "this comparison is weaker than the requested strength",
    note = "an aggregate is only as strong as its weakest field: request a weaker strength or wrap the field (e.g. `TotalOrder` for floats)"
)]
pub trait WeakenTo<S: Strength> {
    fn weaken(self) -> S::Result;
}

macro_rules! impl_weaken {
    ($from:ty => $($to:ty),+) => {
        $(
            impl WeakenTo<$to> for $from {
                #[inline(always)]
                fn weaken(self) -> <$to as Strength>::Result {
                    self.into()
                }
            }
        )+
    };
}

impl_weaken!(StrongOrdering => Strong, Weak, Partial);
impl_weaken!(WeakOrdering => Weak, Partial);
impl_weaken!(PartialOrdering => Partial);

#[cfg(test)]
mod tests {
    use super::*;

    fn category<S: Strength>() -> Category {
        S::CATEGORY
    }

    #[test]
    fn test_type_level_meet() {
        assert_eq!(category::<Meet<Strong, Strong>>(), Category::Strong);
        assert_eq!(category::<Meet<Strong, Weak>>(), Category::Weak);
        assert_eq!(category::<Meet<Weak, Strong>>(), Category::Weak);
        assert_eq!(category::<Meet<Weak, Partial>>(), Category::Partial);
        assert_eq!(category::<Meet<Partial, Strong>>(), Category::Partial);
        assert_eq!(category::<Meet<Weak, Weak>>(), Category::Weak);
    }

    #[test]
    fn test_type_level_meet_matches_runtime() {
        fn check<A: Strength, B: Strength>() {
            assert_eq!(
                <Meet<A, B> as Strength>::CATEGORY,
                A::CATEGORY.meet(B::CATEGORY)
            );
        }
        check::<Strong, Strong>();
        check::<Strong, Weak>();
        check::<Strong, Partial>();
        check::<Weak, Strong>();
        check::<Weak, Weak>();
        check::<Weak, Partial>();
        check::<Partial, Strong>();
        check::<Partial, Weak>();
        check::<Partial, Partial>();
    }

    #[test]
    fn test_weaken() {
        let r: WeakOrdering = WeakenTo::<Weak>::weaken(StrongOrdering::Equal);
        assert_eq!(r, WeakOrdering::Equivalent);
        let r: PartialOrdering = WeakenTo::<Partial>::weaken(StrongOrdering::Less);
        assert_eq!(r, PartialOrdering::Less);
        let r: PartialOrdering = WeakenTo::<Partial>::weaken(WeakOrdering::Equivalent);
        assert_eq!(r, PartialOrdering::Equivalent);
    }

    #[test]
    fn test_total_to_ordering() {
        assert_eq!(Strong::to_ordering(StrongOrdering::Greater), Ordering::Greater);
        assert_eq!(Weak::to_ordering(WeakOrdering::Equivalent), Ordering::Equal);
    }
}
