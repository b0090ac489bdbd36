//! Runtime descriptors of a composite's flattened field sequence.

use core::fmt;
use core::marker::PhantomData;

use super::{Composite, Field, FieldList, FieldVisitor};
use crate::category::Category;
use crate::compare::{Compare, category_of};
use crate::ordering::ComparisonResult;

/// One entry of a composite's effective field sequence.
///
/// Built from the type-level list; the comparator is erased to a plain
/// function pointer.
pub struct FieldDescriptor<T: ?Sized> {
    /// Type that declares the field (the base type for inherited fields).
    pub owner: &'static str,
    pub name: &'static str,
    /// 0 for own fields, 1 for fields of the direct base, and so on.
    pub depth: usize,
    pub category: Category,
    compare: fn(&T, &T) -> ComparisonResult,
    equivalent: fn(&T, &T) -> bool,
}

impl<T: ?Sized> FieldDescriptor<T> {
    /// Descriptor for the accessor `F`.
    pub fn of<F: Field<T>>() -> Self {
        FieldDescriptor {
            owner: F::OWNER,
            name: F::NAME,
            depth: F::DEPTH,
            category: category_of::<F::Value>(),
            compare: erased_compare::<T, F>,
            equivalent: erased_equivalent::<T, F>,
        }
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> ComparisonResult {
        (self.compare)(a, b)
    }

    #[inline]
    pub fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.equivalent)(a, b)
    }

    /// `true` for fields inherited from a base composite.
    #[inline]
    pub fn is_inherited(&self) -> bool {
        self.depth > 0
    }
}

fn erased_compare<T: ?Sized, F: Field<T>>(a: &T, b: &T) -> ComparisonResult {
    F::get(a).compare(F::get(b)).into()
}

fn erased_equivalent<T: ?Sized, F: Field<T>>(a: &T, b: &T) -> bool {
    F::get(a).equivalent(F::get(b))
}

impl<T: ?Sized> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FieldDescriptor<T> {}

impl<T: ?Sized> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("owner", &self.owner)
            .field("name", &self.name)
            .field("depth", &self.depth)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Collection
// =============================================================================

struct Collect<T: ?Sized, C> {
    sink: C,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, C: FnMut(FieldDescriptor<T>)> FieldVisitor<T> for Collect<T, C> {
    #[inline]
    fn visit<F: Field<T>>(&mut self, ceiling: Category) {
        let mut descriptor = FieldDescriptor::of::<F>();
        descriptor.category = descriptor.category.meet(ceiling);
        (self.sink)(descriptor);
    }
}

/// Call `sink` once per field of `T`, base fields first.
///
/// An inherited field never reports a category stronger than the base
/// composite that declares it.
pub fn for_each_field<T, C>(sink: C)
where
    T: Composite + ?Sized,
    C: FnMut(FieldDescriptor<T>),
{
    let mut collect = Collect { sink, _marker: PhantomData };
    <T::Fields as FieldList<T>>::walk(&mut collect);
}

/// Effective field sequence of `T`, base fields first.
#[cfg(feature = "alloc")]
pub fn descriptors<T: Composite + ?Sized>() -> alloc::vec::Vec<FieldDescriptor<T>> {
    let mut out = alloc::vec::Vec::with_capacity(<T::Fields as FieldList<T>>::LEN);
    for_each_field::<T, _>(|d| out.push(d));
    out
}
