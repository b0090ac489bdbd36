//! # Layer 1: Field Comparators
//!
//! [`Compare`] is the three-way comparison of two values of one type. Its
//! associated [`Strength`] fixes, at the type level, which outcomes are
//! possible:
//!
//! ```
//! use tola_ord::prelude::*;
//!
//! assert_eq!(1i32.compare(&1), StrongOrdering::Equal);
//! assert_eq!(3.13f64.compare(&3.14), PartialOrdering::Less);
//! assert_eq!(f64::NAN.compare(&f64::NAN), PartialOrdering::Unordered);
//!
//! assert_eq!(category_of::<u8>(), Category::Strong);
//! assert_eq!(category_of::<f32>(), Category::Partial);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! compare/
//! ├── primitives.rs - integers, floats, text, references, Option, Reverse
//! ├── sequence.rs   - lexicographic slices, arrays, Vec
//! ├── tuple.rs      - tuples as composites over their positions
//! ├── adapters.rs   - TotalOrder, Nullable, ByOrd, ByPartialOrd, Synthesized
//! └── mixed.rs      - mixed-signedness integer comparison
//! ```

mod primitives;
mod sequence;
mod tuple;
pub mod adapters;
pub mod mixed;

pub use adapters::{ByOrd, ByPartialOrd, Nullable, Synthesized, TotalOrder};

use crate::category::{Category, Strength};
use crate::ordering::OrderingResult;

/// Typed result of comparing two `T`s.
pub type ResultOf<T> = <<T as Compare>::Strength as Strength>::Result;

/// Three-way comparison between two values of the same type.
///
/// Implementations must be pure: the same pair always yields the same
/// outcome. Overriding [`Compare::equivalent`] is allowed for speed, but it
/// must agree with `compare(..).is_eq()`.
pub trait Compare {
    /// Strongest category this comparator guarantees.
    type Strength: Strength;

    /// Runtime view of `Self::Strength`.
    const CATEGORY: Category = <Self::Strength as Strength>::CATEGORY;

    fn compare(&self, other: &Self) -> ResultOf<Self>;

    /// Equality-only check.
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

/// Category of `T`'s comparator.
#[inline]
pub const fn category_of<T: Compare + ?Sized>() -> Category {
    T::CATEGORY
}

/// Free-function form of [`Compare::compare`].
#[inline]
pub fn compare<T: Compare + ?Sized>(a: &T, b: &T) -> ResultOf<T> {
    a.compare(b)
}
