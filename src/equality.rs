//! # Equality
//!
//! Equality is declared per type through an explicit [`Equality::Mode`]:
//!
//! - [`Consistent`]: `equals(a, b)` holds exactly when `compare(a, b)` is
//!   `Equal`/`Equivalent`. Checked field by field, without computing an
//!   ordering.
//! - [`Independent<L>`]: equality over its own field list `L`, which may be
//!   narrower than the ordering fields. Nothing ties it to the ordering: two
//!   values can be unequal yet sort as equivalent, or the other way round.
//!
//! There is no default mode. A type that wants independent equality has to
//! name `Independent`, and `#[derive(Composite)]` only accepts a separate
//! equality field list when it is spelled `eq = independent(..)`:
//!
//! ```compile_fail
//! use tola_ord::prelude::*;
//!
//! #[derive(Composite)]
//! #[composite(fields(name, age, height), eq(name, age))]
//! struct Human {
//!     name: String,
//!     age: u32,
//!     height: f64,
//! }
//! ```

use core::marker::PhantomData;

use crate::aggregate::FieldList;
use crate::compare::Compare;

/// How a type answers `equals`.
pub trait EqualityMode<T: ?Sized> {
    /// `true` when `equals` always agrees with the ordering.
    const CONSISTENT: bool;

    fn equals(a: &T, b: &T) -> bool;
}

/// Equality derived from the ordering's own field set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Consistent;

/// Equality over a separately declared field list `L`.
pub struct Independent<L>(PhantomData<L>);

impl<T: Compare + ?Sized> EqualityMode<T> for Consistent {
    const CONSISTENT: bool = true;

    #[inline]
    fn equals(a: &T, b: &T) -> bool {
        a.equivalent(b)
    }
}

impl<T: ?Sized, L: FieldList<T>> EqualityMode<T> for Independent<L> {
    const CONSISTENT: bool = false;

    #[inline]
    fn equals(a: &T, b: &T) -> bool {
        L::all_equivalent(a, b)
    }
}

/// Types with a declared equality.
pub trait Equality {
    type Mode: EqualityMode<Self>;
}

/// `true` when `a` equals `b` under `T`'s declared equality.
///
/// An `Unordered` field (NaN, a missing [`Nullable`](crate::Nullable)) is
/// never equal, not even to itself.
#[inline]
pub fn equals<T: Equality + ?Sized>(a: &T, b: &T) -> bool {
    <T::Mode as EqualityMode<T>>::equals(a, b)
}

/// `true` when `T`'s equality is guaranteed to agree with its ordering.
#[inline]
pub const fn is_consistent<T: Equality + ?Sized>() -> bool {
    <T::Mode as EqualityMode<T>>::CONSISTENT
}
