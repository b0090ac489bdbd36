//! # Layer 2: Aggregate Comparison
//!
//! A composite declares an explicit, ordered list of comparable fields. Its
//! comparison walks that list lexicographically (the base composite first,
//! then own fields in declaration order) and stops at the first field that
//! is not equal. Its category is the weakest category among all fields.
//!
//! A base is compared through its own `Compare` impl, so the base's
//! declared strength bounds every type derived from it. Descriptors still
//! list the base's fields one by one.
//!
//! ## Declaring a composite
//!
//! ```
//! use tola_ord::prelude::*;
//!
//! #[derive(Composite)]
//! #[composite(fields(value))]
//! struct Base {
//!     value: String,
//! }
//!
//! #[derive(Composite)]
//! #[composite(base = base, fields(data), strength = Strong)]
//! struct Derived {
//!     base: Base,
//!     data: Vec<i32>,
//! }
//!
//! let d1 = Derived { base: Base { value: "text".into() }, data: vec![1, 2, 3] };
//! let d2 = Derived { base: Base { value: "text".into() }, data: vec![1, 2, 4] };
//! assert_eq!(d1.compare(&d2), StrongOrdering::Less);
//! ```
//!
//! ## Construction-time rejection
//!
//! Requesting a strength the fields cannot support does not compile:
//!
//! ```compile_fail
//! use tola_ord::prelude::*;
//!
//! #[derive(Composite)]
//! #[composite(fields(name, height), strength = Strong)]
//! struct Sample {
//!     name: String,
//!     height: f64, // Partial: NaN is unordered
//! }
//! ```
//!
//! The same holds through a base that asked for a weaker strength:
//!
//! ```compile_fail
//! use tola_ord::prelude::*;
//!
//! #[derive(Composite)]
//! #[composite(fields(id), strength = Partial)]
//! struct Loose {
//!     id: u32,
//! }
//!
//! #[derive(Composite)]
//! #[composite(base = base, fields(x), strength = Strong)]
//! struct Claimed {
//!     base: Loose,
//!     x: u32,
//! }
//! ```
//!
//! An empty field list is rejected as well:
//!
//! ```compile_fail
//! use tola_ord::aggregate::{Composite, Nil};
//!
//! struct Nothing;
//!
//! impl Composite for Nothing {
//!     type Fields = Nil;
//!     type Strength = tola_ord::Strong;
//!     const NAME: &'static str = "Nothing";
//! }
//! ```

mod fields;
mod descriptor;
#[cfg(feature = "alloc")]
mod schema;

pub use fields::{
    At, Cons, Field, FieldList, FieldVisitor, Inherit, Lexicographic, Nil, NonEmpty, Through,
};
pub use descriptor::{FieldDescriptor, for_each_field};
#[cfg(feature = "alloc")]
pub use descriptor::descriptors;
#[cfg(feature = "alloc")]
pub use schema::Schema;

use crate::category::{Category, Strength};
use crate::ordering::OrderingResult;

// =============================================================================
// Composite
// =============================================================================

/// A value compared field by field.
///
/// `Fields` is fixed when the type is defined. `Strength` is either the
/// inferred meet `<Self::Fields as FieldList<Self>>::Strength` or a weaker
/// one requested by the declaration; a stronger request fails to satisfy
/// [`Lexicographic`] and does not compile.
pub trait Composite {
    type Fields: FieldList<Self> + NonEmpty;

    type Strength: Strength;

    /// Type name used in descriptors and errors.
    const NAME: &'static str;
}

/// Strength inferred from the fields alone.
pub type FieldsStrength<T> = <<T as Composite>::Fields as FieldList<T>>::Strength;

/// Category inferred from the fields alone.
#[inline]
pub const fn fields_category<T: Composite + ?Sized>() -> Category {
    <FieldsStrength<T> as Strength>::CATEGORY
}

/// Lexicographic comparison over `T`'s declared fields, at `T`'s strength.
///
/// Returns the first non-zero field outcome (`Less`, `Greater`, or
/// `Unordered`), or the zero outcome of `T::Strength` when every field is
/// equal/equivalent.
#[inline]
pub fn compare_fields<T>(a: &T, b: &T) -> <T::Strength as Strength>::Result
where
    T: Composite + ?Sized,
    T::Fields: Lexicographic<T, T::Strength>,
{
    match <T::Fields as Lexicographic<T, T::Strength>>::first_difference(a, b) {
        Some(r) => r,
        None => <<T::Strength as Strength>::Result as OrderingResult>::EQUIVALENT,
    }
}

/// Field-by-field equivalence over `T`'s declared fields.
///
/// Agrees with `compare_fields(a, b).is_eq()` without computing an ordering.
#[inline]
pub fn equivalent_fields<T: Composite + ?Sized>(a: &T, b: &T) -> bool {
    <T::Fields as FieldList<T>>::all_equivalent(a, b)
}
