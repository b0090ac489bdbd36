//! Type-level field lists.
//!
//! A composite's comparable fields are a cons list of accessor types:
//!
//! ```text
//! Inherit<At<0>, Cons<At<1>, Cons<At<2>, Nil>>>
//!   |              |          |
//!   base fields    own field  own field
//!   (flattened)    (1st)      (2nd)
//! ```
//!
//! The list's strength is the type-level meet of every entry, so it is known
//! without looking at any value.

use core::marker::PhantomData;

use crate::category::{Category, Meet, Strength, WeakenTo};
use crate::compare::{Compare, ResultOf};
use crate::ordering::OrderingResult;

use super::Composite;

// =============================================================================
// Field accessors
// =============================================================================

/// One comparable field of `T`.
pub trait Field<T: ?Sized> {
    type Value: Compare + ?Sized;

    /// Type that declares the field.
    const OWNER: &'static str;

    const NAME: &'static str;

    /// Number of base composites between `T` and the declaring type.
    const DEPTH: usize = 0;

    fn get(value: &T) -> &Self::Value;
}

/// Accessor for the field at declaration position `I`.
///
/// `#[derive(Composite)]` implements `Field<YourType>` for the positions it
/// lists; tuples implement it for every position.
#[derive(Debug, Clone, Copy, Default)]
pub struct At<const I: usize>;

/// A field of `P::Value` reached through the field `P` of `T`.
///
/// The intermediate value must be `'static`: base composites cannot borrow.
pub struct Through<P, F>(PhantomData<(P, F)>);

impl<T, P, F> Field<T> for Through<P, F>
where
    T: ?Sized,
    P: Field<T>,
    P::Value: 'static,
    F: Field<P::Value>,
{
    type Value = F::Value;
    const OWNER: &'static str = F::OWNER;
    const NAME: &'static str = F::NAME;
    const DEPTH: usize = F::DEPTH + 1;

    #[inline(always)]
    fn get(value: &T) -> &F::Value {
        F::get(P::get(value))
    }
}

// =============================================================================
// List nodes
// =============================================================================

/// Empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// Field `F` followed by `Tail`.
pub struct Cons<F, Tail>(PhantomData<(F, Tail)>);

/// Every field of the base composite reached through `P`, followed by `Tail`.
pub struct Inherit<P, Tail>(PhantomData<(P, Tail)>);

/// Lists with at least one entry. A composite must have one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no comparable fields",
    note = "declare at least one field or a base composite"
)]
pub trait NonEmpty {}

impl<F, Tail> NonEmpty for Cons<F, Tail> {}
impl<P, Tail> NonEmpty for Inherit<P, Tail> {}

// =============================================================================
// FieldList
// =============================================================================

/// Visitor over the flattened field sequence, base fields first.
///
/// `ceiling` is the weakest strength declared by the base composites that
/// enclose the field, `Strong` for own fields.
pub trait FieldVisitor<T: ?Sized> {
    fn visit<F: Field<T>>(&mut self, ceiling: Category);
}

/// Ordered list of comparable fields of `T`.
pub trait FieldList<T: ?Sized> {
    /// Meet of every field's strength. `Strong` for the empty list.
    type Strength: Strength;

    /// Number of fields after flattening base composites.
    const LEN: usize;

    /// Field-by-field equivalence, without computing an ordering.
    fn all_equivalent(a: &T, b: &T) -> bool;

    fn walk<V: FieldVisitor<T>>(visitor: &mut V);
}

impl<T: ?Sized> FieldList<T> for Nil {
    type Strength = crate::category::Strong;
    const LEN: usize = 0;

    #[inline(always)]
    fn all_equivalent(_: &T, _: &T) -> bool {
        true
    }

    #[inline(always)]
    fn walk<V: FieldVisitor<T>>(_: &mut V) {}
}

impl<T, F, Tail> FieldList<T> for Cons<F, Tail>
where
    T: ?Sized,
    F: Field<T>,
    Tail: FieldList<T>,
{
    type Strength = Meet<<F::Value as Compare>::Strength, Tail::Strength>;
    const LEN: usize = 1 + Tail::LEN;

    #[inline]
    fn all_equivalent(a: &T, b: &T) -> bool {
        F::get(a).equivalent(F::get(b)) && Tail::all_equivalent(a, b)
    }

    fn walk<V: FieldVisitor<T>>(visitor: &mut V) {
        visitor.visit::<F>(Category::Strong);
        Tail::walk(visitor);
    }
}

/// The base is one unit: its strength, ordering and equivalence all come
/// from its own `Compare` impl. Only [`FieldList::walk`] looks inside it.
impl<T, P, Tail> FieldList<T> for Inherit<P, Tail>
where
    T: ?Sized,
    P: Field<T>,
    P::Value: Composite + 'static,
    Tail: FieldList<T>,
{
    type Strength = Meet<<P::Value as Compare>::Strength, Tail::Strength>;
    const LEN: usize = <<P::Value as Composite>::Fields as FieldList<P::Value>>::LEN + Tail::LEN;

    #[inline]
    fn all_equivalent(a: &T, b: &T) -> bool {
        P::get(a).equivalent(P::get(b)) && Tail::all_equivalent(a, b)
    }

    fn walk<V: FieldVisitor<T>>(visitor: &mut V) {
        let mut lifted = Lift::<T, P, V> {
            inner: visitor,
            ceiling: <<P::Value as Compare>::Strength as Strength>::CATEGORY,
            _marker: PhantomData,
        };
        <<P::Value as Composite>::Fields as FieldList<P::Value>>::walk(&mut lifted);
        Tail::walk(visitor);
    }
}

/// Re-targets a visitor of `T` at the base composite behind `P`.
struct Lift<'v, T: ?Sized, P, V> {
    inner: &'v mut V,
    ceiling: Category,
    _marker: PhantomData<(fn(&T), P)>,
}

impl<T, P, V> FieldVisitor<P::Value> for Lift<'_, T, P, V>
where
    T: ?Sized,
    P: Field<T>,
    P::Value: 'static,
    V: FieldVisitor<T>,
{
    #[inline(always)]
    fn visit<F: Field<P::Value>>(&mut self, ceiling: Category) {
        self.inner.visit::<Through<P, F>>(ceiling.meet(self.ceiling));
    }
}

// =============================================================================
// Lexicographic composition
// =============================================================================

/// Short-circuit lexicographic comparison of a field list at strength `S`.
///
/// Every field result is weakened to `S`. A field weaker than `S` has no
/// `WeakenTo<S>` impl, so the bound fails where the composite is declared.
pub trait Lexicographic<T: ?Sized, S: Strength> {
    /// First field outcome that is not zero (`Less`, `Greater` or
    /// `Unordered`), or `None` when every field is equal/equivalent.
    fn first_difference(a: &T, b: &T) -> Option<S::Result>;
}

impl<T: ?Sized, S: Strength> Lexicographic<T, S> for Nil {
    #[inline(always)]
    fn first_difference(_: &T, _: &T) -> Option<S::Result> {
        None
    }
}

impl<T, S, F, Tail> Lexicographic<T, S> for Cons<F, Tail>
where
    T: ?Sized,
    S: Strength,
    F: Field<T>,
    ResultOf<F::Value>: WeakenTo<S>,
    Tail: Lexicographic<T, S>,
{
    #[inline]
    fn first_difference(a: &T, b: &T) -> Option<S::Result> {
        let r = <ResultOf<F::Value> as WeakenTo<S>>::weaken(F::get(a).compare(F::get(b)));
        if r.is_eq() { Tail::first_difference(a, b) } else { Some(r) }
    }
}

impl<T, S, P, Tail> Lexicographic<T, S> for Inherit<P, Tail>
where
    T: ?Sized,
    S: Strength,
    P: Field<T>,
    ResultOf<P::Value>: WeakenTo<S>,
    Tail: Lexicographic<T, S>,
{
    #[inline]
    fn first_difference(a: &T, b: &T) -> Option<S::Result> {
        let r = <ResultOf<P::Value> as WeakenTo<S>>::weaken(P::get(a).compare(P::get(b)));
        if r.is_eq() { Tail::first_difference(a, b) } else { Some(r) }
    }
}
