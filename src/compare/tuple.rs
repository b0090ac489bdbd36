//! Tuples are composites whose fields are their positions.
//!
//! `(A, B, C)` compares like a composite declared with fields `0, 1, 2`, and
//! its strength is the meet of `A`, `B` and `C`.

use super::{Compare, ResultOf};
use crate::aggregate::{
    At, Composite, Cons, Field, FieldList, Lexicographic, Nil, compare_fields, equivalent_fields,
};

macro_rules! tuple_fields {
    () => { Nil };
    ($idx:tt $($rest:tt)*) => { Cons<At<$idx>, tuple_fields!($($rest)*)> };
}

macro_rules! impl_tuple {
    // One `Field` impl per position. `$all` carries the full parameter list.
    (@fields $all:tt) => {};
    (@fields $all:tt $T:ident $idx:tt $($rest:tt)*) => {
        impl_tuple!(@field $all $T $idx);
        impl_tuple!(@fields $all $($rest)*);
    };
    (@field [$($all:ident)+] $T:ident $idx:tt) => {
        impl<$($all: Compare),+> Field<($($all,)+)> for At<$idx> {
            type Value = $T;
            const OWNER: &'static str = "tuple";
            const NAME: &'static str = stringify!($idx);

            #[inline(always)]
            fn get(value: &($($all,)+)) -> &$T {
                &value.$idx
            }
        }
    };

    ($(($T:ident $idx:tt))+) => {
        impl_tuple!(@fields [$($T)+] $($T $idx)+);

        impl<$($T: Compare),+> Composite for ($($T,)+) {
            type Fields = tuple_fields!($($idx)+);
            type Strength = <Self::Fields as FieldList<Self>>::Strength;
            const NAME: &'static str = "tuple";
        }

        impl<$($T: Compare),+> Compare for ($($T,)+)
        where
            <Self as Composite>::Fields: Lexicographic<Self, <Self as Composite>::Strength>,
        {
            type Strength = <Self as Composite>::Strength;

            #[inline]
            fn compare(&self, other: &Self) -> ResultOf<Self> {
                compare_fields(self, other)
            }

            #[inline]
            fn equivalent(&self, other: &Self) -> bool {
                equivalent_fields(self, other)
            }
        }
    };
}

impl_tuple!((A 0));
impl_tuple!((A 0) (B 1));
impl_tuple!((A 0) (B 1) (C 2));
impl_tuple!((A 0) (B 1) (C 2) (D 3));
impl_tuple!((A 0) (B 1) (C 2) (D 3) (E 4));
impl_tuple!((A 0) (B 1) (C 2) (D 3) (E 4) (F 5));
impl_tuple!((A 0) (B 1) (C 2) (D 3) (E 4) (F 5) (G 6));
impl_tuple!((A 0) (B 1) (C 2) (D 3) (E 4) (F 5) (G 6) (H 7));
