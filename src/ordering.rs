//! # Comparison Results
//!
//! One typed result per strength plus a dynamic [`ComparisonResult`] that can
//! hold any outcome:
//!
//! | Type               | Outcomes                                  |
//! |--------------------|-------------------------------------------|
//! | `StrongOrdering`   | `Less`, `Equal`, `Greater`                |
//! | `WeakOrdering`     | `Less`, `Equivalent`, `Greater`           |
//! | `PartialOrdering`  | `Less`, `Equivalent`, `Greater`, `Unordered` |
//! | `ComparisonResult` | all of the above                          |
//!
//! `Unordered` only exists in `PartialOrdering`, so a strong comparator can
//! not produce it.
//!
//! ## Relation to zero
//!
//! `Less` is "below zero", `Equal`/`Equivalent` are "zero", `Greater` is
//! "above zero". `Unordered` has no relation to zero: every `is_*` query on
//! it returns `false`, including `is_ne`.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::category::Category;

// =============================================================================
// Typed results
// =============================================================================

/// Result of a `Strong` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrongOrdering {
    Less,
    Equal,
    Greater,
}

/// Result of a `Weak` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeakOrdering {
    Less,
    Equivalent,
    Greater,
}

/// Result of a `Partial` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialOrdering {
    Less,
    Equivalent,
    Greater,
    Unordered,
}

/// Any comparison outcome, without the type-level strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonResult {
    Less,
    Equal,
    Equivalent,
    Greater,
    Unordered,
}

// =============================================================================
// ComparisonResult
// =============================================================================

impl ComparisonResult {
    #[inline]
    pub const fn is_lt(self) -> bool {
        matches!(self, ComparisonResult::Less)
    }

    #[inline]
    pub const fn is_le(self) -> bool {
        matches!(
            self,
            ComparisonResult::Less | ComparisonResult::Equal | ComparisonResult::Equivalent
        )
    }

    #[inline]
    pub const fn is_eq(self) -> bool {
        matches!(self, ComparisonResult::Equal | ComparisonResult::Equivalent)
    }

    /// `Less` or `Greater`. `false` for `Unordered`.
    #[inline]
    pub const fn is_ne(self) -> bool {
        matches!(self, ComparisonResult::Less | ComparisonResult::Greater)
    }

    #[inline]
    pub const fn is_gt(self) -> bool {
        matches!(self, ComparisonResult::Greater)
    }

    #[inline]
    pub const fn is_ge(self) -> bool {
        matches!(
            self,
            ComparisonResult::Greater | ComparisonResult::Equal | ComparisonResult::Equivalent
        )
    }

    #[inline]
    pub const fn is_unordered(self) -> bool {
        matches!(self, ComparisonResult::Unordered)
    }

    /// Swap `Less` and `Greater`.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            ComparisonResult::Less => ComparisonResult::Greater,
            ComparisonResult::Greater => ComparisonResult::Less,
            other => other,
        }
    }

    /// Map onto `core::cmp::Ordering`; `None` for `Unordered`.
    #[inline]
    pub const fn to_std(self) -> Option<Ordering> {
        match self {
            ComparisonResult::Less => Some(Ordering::Less),
            ComparisonResult::Equal | ComparisonResult::Equivalent => Some(Ordering::Equal),
            ComparisonResult::Greater => Some(Ordering::Greater),
            ComparisonResult::Unordered => None,
        }
    }

    /// Express a zero outcome in the vocabulary of `category`:
    /// `Equal` for `Strong`, `Equivalent` otherwise.
    #[inline]
    pub const fn at(self, category: Category) -> Self {
        match (self, category) {
            (ComparisonResult::Equal | ComparisonResult::Equivalent, Category::Strong) => {
                ComparisonResult::Equal
            }
            (ComparisonResult::Equal | ComparisonResult::Equivalent, _) => {
                ComparisonResult::Equivalent
            }
            (other, _) => other,
        }
    }
}

impl From<Ordering> for ComparisonResult {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => ComparisonResult::Less,
            Ordering::Equal => ComparisonResult::Equal,
            Ordering::Greater => ComparisonResult::Greater,
        }
    }
}

impl From<Option<Ordering>> for ComparisonResult {
    #[inline]
    fn from(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(Ordering::Less) => ComparisonResult::Less,
            Some(Ordering::Equal) => ComparisonResult::Equivalent,
            Some(Ordering::Greater) => ComparisonResult::Greater,
            None => ComparisonResult::Unordered,
        }
    }
}

// =============================================================================
// OrderingResult
// =============================================================================

/// Common surface of the typed results.
pub trait OrderingResult: Copy + Eq + Debug + Into<ComparisonResult> + 'static {
    const CATEGORY: Category;

    /// The zero outcome (`Equal` or `Equivalent`).
    const EQUIVALENT: Self;

    fn from_std(ordering: Ordering) -> Self;

    fn reverse(self) -> Self;

    #[inline]
    fn outcome(self) -> ComparisonResult {
        self.into()
    }

    #[inline]
    fn is_lt(self) -> bool {
        self.outcome().is_lt()
    }

    #[inline]
    fn is_le(self) -> bool {
        self.outcome().is_le()
    }

    #[inline]
    fn is_eq(self) -> bool {
        self.outcome().is_eq()
    }

    #[inline]
    fn is_ne(self) -> bool {
        self.outcome().is_ne()
    }

    #[inline]
    fn is_gt(self) -> bool {
        self.outcome().is_gt()
    }

    #[inline]
    fn is_ge(self) -> bool {
        self.outcome().is_ge()
    }

    #[inline]
    fn to_std(self) -> Option<Ordering> {
        self.outcome().to_std()
    }

    /// Lexicographic chaining: keep `self` unless it is the zero outcome.
    #[inline]
    fn then_with<F: FnOnce() -> Self>(self, next: F) -> Self {
        if self.is_eq() { next() } else { self }
    }
}

impl OrderingResult for StrongOrdering {
    const CATEGORY: Category = Category::Strong;
    const EQUIVALENT: Self = StrongOrdering::Equal;

    #[inline]
    fn from_std(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => StrongOrdering::Less,
            Ordering::Equal => StrongOrdering::Equal,
            Ordering::Greater => StrongOrdering::Greater,
        }
    }

    #[inline]
    fn reverse(self) -> Self {
        match self {
            StrongOrdering::Less => StrongOrdering::Greater,
            StrongOrdering::Equal => StrongOrdering::Equal,
            StrongOrdering::Greater => StrongOrdering::Less,
        }
    }
}

impl OrderingResult for WeakOrdering {
    const CATEGORY: Category = Category::Weak;
    const EQUIVALENT: Self = WeakOrdering::Equivalent;

    #[inline]
    fn from_std(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => WeakOrdering::Less,
            Ordering::Equal => WeakOrdering::Equivalent,
            Ordering::Greater => WeakOrdering::Greater,
        }
    }

    #[inline]
    fn reverse(self) -> Self {
        match self {
            WeakOrdering::Less => WeakOrdering::Greater,
            WeakOrdering::Equivalent => WeakOrdering::Equivalent,
            WeakOrdering::Greater => WeakOrdering::Less,
        }
    }
}

impl OrderingResult for PartialOrdering {
    const CATEGORY: Category = Category::Partial;
    const EQUIVALENT: Self = PartialOrdering::Equivalent;

    #[inline]
    fn from_std(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => PartialOrdering::Less,
            Ordering::Equal => PartialOrdering::Equivalent,
            Ordering::Greater => PartialOrdering::Greater,
        }
    }

    #[inline]
    fn reverse(self) -> Self {
        match self {
            PartialOrdering::Less => PartialOrdering::Greater,
            PartialOrdering::Greater => PartialOrdering::Less,
            other => other,
        }
    }
}

impl PartialOrdering {
    /// Build from `PartialOrd::partial_cmp` output.
    #[inline]
    pub fn from_partial(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(ordering) => Self::from_std(ordering),
            None => PartialOrdering::Unordered,
        }
    }
}

// =============================================================================
// Conversions (weakening only)
// =============================================================================

impl From<Ordering> for StrongOrdering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        StrongOrdering::from_std(ordering)
    }
}

impl From<StrongOrdering> for WeakOrdering {
    #[inline]
    fn from(r: StrongOrdering) -> Self {
        match r {
            StrongOrdering::Less => WeakOrdering::Less,
            StrongOrdering::Equal => WeakOrdering::Equivalent,
            StrongOrdering::Greater => WeakOrdering::Greater,
        }
    }
}

impl From<StrongOrdering> for PartialOrdering {
    #[inline]
    fn from(r: StrongOrdering) -> Self {
        WeakOrdering::from(r).into()
    }
}

impl From<WeakOrdering> for PartialOrdering {
    #[inline]
    fn from(r: WeakOrdering) -> Self {
        match r {
            WeakOrdering::Less => PartialOrdering::Less,
            WeakOrdering::Equivalent => PartialOrdering::Equivalent,
            WeakOrdering::Greater => PartialOrdering::Greater,
        }
    }
}

/// Any outcome fits a partial ordering; `Equal` becomes `Equivalent`.
impl From<ComparisonResult> for PartialOrdering {
    #[inline]
    fn from(r: ComparisonResult) -> Self {
        match r {
            ComparisonResult::Less => PartialOrdering::Less,
            ComparisonResult::Equal | ComparisonResult::Equivalent => PartialOrdering::Equivalent,
            ComparisonResult::Greater => PartialOrdering::Greater,
            ComparisonResult::Unordered => PartialOrdering::Unordered,
        }
    }
}

impl From<StrongOrdering> for ComparisonResult {
    #[inline]
    fn from(r: StrongOrdering) -> Self {
        match r {
            StrongOrdering::Less => ComparisonResult::Less,
            StrongOrdering::Equal => ComparisonResult::Equal,
            StrongOrdering::Greater => ComparisonResult::Greater,
        }
    }
}

impl From<WeakOrdering> for ComparisonResult {
    #[inline]
    fn from(r: WeakOrdering) -> Self {
        match r {
            WeakOrdering::Less => ComparisonResult::Less,
            WeakOrdering::Equivalent => ComparisonResult::Equivalent,
            WeakOrdering::Greater => ComparisonResult::Greater,
        }
    }
}

impl From<PartialOrdering> for ComparisonResult {
    #[inline]
    fn from(r: PartialOrdering) -> Self {
        match r {
            PartialOrdering::Less => ComparisonResult::Less,
            PartialOrdering::Equivalent => ComparisonResult::Equivalent,
            PartialOrdering::Greater => ComparisonResult::Greater,
            PartialOrdering::Unordered => ComparisonResult::Unordered,
        }
    }
}
