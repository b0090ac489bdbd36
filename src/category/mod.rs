//! # Layer 0: Ordering-Strength Lattice
//!
//! Two views of the same three-element lattice:
//!
//! - [`Category`]: a plain value, used at runtime (schemas, diagnostics,
//!   generic consumers choosing a behavior).
//! - [`Strength`]: type-level markers ([`Strong`], [`Weak`], [`Partial`]),
//!   used by the compiler to reject impossible compositions.
//!
//! ```text
//!   Strong      total order, equal values are substitutable
//!     |
//!   Weak        total order, equivalent values may still differ
//!     |
//!   Partial     some pairs are Unordered (NaN-like values)
//! ```
//!
//! Composition always takes the meet (the weakest input).

pub mod strength;

pub use strength::{Meet, Partial, Strong, Strength, Total, Weak, WeakenTo};

use core::fmt;

// =============================================================================
// Category
// =============================================================================

/// Strength of an ordering.
///
/// Variants are declared weakest first, so the derived `Ord` matches the
/// lattice: `Partial < Weak < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Partial,
    Weak,
    Strong,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 3] = [Category::Partial, Category::Weak, Category::Strong];

    /// Weakest of two categories.
    #[inline]
    pub const fn meet(self, other: Category) -> Category {
        if (self as u8) <= (other as u8) { self } else { other }
    }

    /// Strongest of two categories.
    #[inline]
    pub const fn join(self, other: Category) -> Category {
        if (self as u8) >= (other as u8) { self } else { other }
    }

    /// `true` when every pair of values is ordered (no `Unordered` outcome).
    #[inline]
    pub const fn is_total(self) -> bool {
        !matches!(self, Category::Partial)
    }

    /// `true` when this category is at least as strong as `required`.
    #[inline]
    pub const fn satisfies(self, required: Category) -> bool {
        (self as u8) >= (required as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Partial => "partial",
            Category::Weak => "weak",
            Category::Strong => "strong",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compose two categories.
#[inline]
pub const fn combine(a: Category, b: Category) -> Category {
    a.meet(b)
}

/// Compose a sequence of categories.
///
/// Returns `None` for an empty sequence: a composite needs at least one
/// comparable field before it has a category at all.
pub fn combine_all<I>(categories: I) -> Option<Category>
where
    I: IntoIterator<Item = Category>,
{
    categories.into_iter().reduce(combine)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_order() {
        assert!(Category::Partial < Category::Weak);
        assert!(Category::Weak < Category::Strong);
    }

    #[test]
    fn test_meet_is_weakest() {
        for a in Category::ALL {
            for b in Category::ALL {
                let m = combine(a, b);
                assert!(m <= a && m <= b);
                assert!(m == a || m == b);
                assert_eq!(m, combine(b, a));
            }
        }
    }

    #[test]
    fn test_combine_all() {
        assert_eq!(combine_all([]), None);
        assert_eq!(combine_all([Category::Strong]), Some(Category::Strong));
        assert_eq!(
            combine_all([Category::Strong, Category::Weak, Category::Strong]),
            Some(Category::Weak)
        );
        assert_eq!(
            combine_all([Category::Strong, Category::Partial]),
            Some(Category::Partial)
        );
    }

    #[test]
    fn test_satisfies_and_total() {
        assert!(Category::Strong.satisfies(Category::Weak));
        assert!(!Category::Partial.satisfies(Category::Weak));
        assert!(Category::Weak.is_total());
        assert!(!Category::Partial.is_total());
        assert_eq!(Category::Weak.join(Category::Partial), Category::Weak);
    }
}
