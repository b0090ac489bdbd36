//! # Heterogeneous Comparison
//!
//! Comparing two distinct types through a shared projection. The capability
//! is directed: `A: CompareWith<B>` says nothing about `B: CompareWith<A>`,
//! and each direction has to be declared on its own.
//!
//! ```
//! use tola_ord::prelude::*;
//! use tola_ord::hetero::compare_projected;
//!
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! struct Human {
//!     name: String,
//!     how_old: i32,
//!     height: f64,
//! }
//!
//! impl CompareWith<Person> for Human {
//!     type Strength = Strong;
//!
//!     fn compare_with(&self, person: &Person) -> StrongOrdering {
//!         compare_projected(
//!             self,
//!             person,
//!             |h| (h.name.as_str(), h.how_old),
//!             |p| (p.name.as_str(), i32::from(p.age)),
//!         )
//!     }
//! }
//!
//! let john = Human { name: "John".into(), how_old: 33, height: 178.8 };
//! let older = Person { name: "John".into(), age: 34 };
//! assert_eq!(john.compare_with(&older), StrongOrdering::Less);
//! # let _ = john.height;
//! ```

use crate::category::Strength;
use crate::compare::{Compare, ResultOf};

/// Directed three-way comparison of `Self` against `Rhs`.
pub trait CompareWith<Rhs: ?Sized> {
    type Strength: Strength;

    fn compare_with(&self, rhs: &Rhs) -> <Self::Strength as Strength>::Result;
}

impl<T: Compare + ?Sized> CompareWith<T> for T {
    type Strength = T::Strength;

    #[inline]
    fn compare_with(&self, rhs: &T) -> ResultOf<T> {
        self.compare(rhs)
    }
}

/// Project both sides to a shared key `K` and compare the keys.
///
/// Tuple keys compare lexicographically as composites, so the result's
/// strength is the meet of the key's components.
#[inline]
pub fn compare_projected<'a, 'b, A, B, K, L, R>(a: &'a A, b: &'b B, left: L, right: R) -> ResultOf<K>
where
    A: ?Sized,
    B: ?Sized,
    K: Compare,
    L: FnOnce(&'a A) -> K,
    R: FnOnce(&'b B) -> K,
{
    left(a).compare(&right(b))
}

/// Comparator over a key extracted from each value.
#[inline]
pub fn by_key<T, K, P>(project: P) -> impl Fn(&T, &T) -> ResultOf<K>
where
    T: ?Sized,
    K: Compare,
    P: Fn(&T) -> K,
{
    move |a, b| project(a).compare(&project(b))
}
