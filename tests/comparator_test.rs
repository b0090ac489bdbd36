//! Built-in comparators, adapters and mixed-sign integer comparison.
//!
//! This test file covers:
//! 1. Primitive and std type categories
//! 2. Sequences and tuples (lexicographic)
//! 3. Adapters (TotalOrder, Nullable, ByOrd, ByPartialOrd, Synthesized)
//! 4. Mixed-sign integer comparison

use std::cmp::{Ordering, Reverse};
use std::time::Duration;

use tola_ord::compare::adapters::strong_order;
use tola_ord::compare::mixed::{
    cmp_equal, cmp_greater, cmp_greater_equal, cmp_less, cmp_less_equal, cmp_not_equal,
    cmp_three_way, in_range,
};
use tola_ord::prelude::*;
use tola_ord::sort::sort;

// =============================================================================
// Part 1: Primitive Categories
// =============================================================================

#[test]
fn test_primitive_categories() {
    assert_eq!(category_of::<i32>(), Category::Strong);
    assert_eq!(category_of::<u128>(), Category::Strong);
    assert_eq!(category_of::<bool>(), Category::Strong);
    assert_eq!(category_of::<char>(), Category::Strong);
    assert_eq!(category_of::<str>(), Category::Strong);
    assert_eq!(category_of::<String>(), Category::Strong);
    assert_eq!(category_of::<Duration>(), Category::Strong);
    assert_eq!(category_of::<f32>(), Category::Partial);
    assert_eq!(category_of::<f64>(), Category::Partial);
}

#[test]
fn test_wrapper_categories_follow_inner() {
    assert_eq!(category_of::<Option<u8>>(), Category::Strong);
    assert_eq!(category_of::<Option<f64>>(), Category::Partial);
    assert_eq!(category_of::<Box<str>>(), Category::Strong);
    assert_eq!(category_of::<Reverse<f32>>(), Category::Partial);
    assert_eq!(category_of::<&i64>(), Category::Strong);
}

#[test]
fn test_float_outcomes() {
    assert_eq!(1.0f64.compare(&2.0), PartialOrdering::Less);
    assert_eq!(0.0f64.compare(&-0.0), PartialOrdering::Equivalent);
    assert_eq!(f64::NAN.compare(&1.0), PartialOrdering::Unordered);
    assert_eq!(1.0f32.compare(&f32::NAN), PartialOrdering::Unordered);
}

#[test]
fn test_option_none_first() {
    assert_eq!(None::<u8>.compare(&Some(0u8)), StrongOrdering::Less);
    assert_eq!(Some(0u8).compare(&None), StrongOrdering::Greater);
    assert_eq!(None::<u8>.compare(&None), StrongOrdering::Equal);
    assert_eq!(None::<f64>.compare(&None), PartialOrdering::Equivalent);
    assert_eq!(Some(f64::NAN).compare(&Some(1.0)), PartialOrdering::Unordered);
}

#[test]
fn test_reverse() {
    assert_eq!(Reverse(1u8).compare(&Reverse(2u8)), StrongOrdering::Greater);
    assert_eq!(Reverse(f64::NAN).compare(&Reverse(1.0)), PartialOrdering::Unordered);
}

#[test]
fn test_strings() {
    assert_eq!("abc".compare("abd"), StrongOrdering::Less);
    assert_eq!(String::from("b").compare(&String::from("a")), StrongOrdering::Greater);
    assert_eq!(Duration::from_millis(5).compare(&Duration::from_secs(1)), StrongOrdering::Less);
}

// =============================================================================
// Part 2: Sequences and Tuples
// =============================================================================

#[test]
fn test_slice_prefix_is_less() {
    assert_eq!(vec![1i32, 2].compare(&vec![1, 2, 3]), StrongOrdering::Less);
    assert_eq!([1i32, 3].compare(&[1, 2]), StrongOrdering::Greater);
    assert_eq!(Vec::<i32>::new().compare(&Vec::new()), StrongOrdering::Equal);
}

#[test]
fn test_slice_of_floats() {
    let a = [1.0, f64::NAN];
    let b = [1.0, 2.0];
    assert_eq!(a[..].compare(&b[..]), PartialOrdering::Unordered);

    let c = [0.5, f64::NAN];
    // decided before the NaN
    assert_eq!(c[..].compare(&b[..]), PartialOrdering::Less);
}

#[test]
fn test_tuples() {
    assert_eq!((1i32, "b").compare(&(1, "a")), StrongOrdering::Greater);
    assert_eq!((1u8, 2.0f64).compare(&(1u8, 2.0f64)), PartialOrdering::Equivalent);
    assert_eq!(category_of::<(u8, f64)>(), Category::Partial);
    assert_eq!(category_of::<(u8, char, bool)>(), Category::Strong);
    assert_eq!(
        (1i32, 2, 3, 4, 5, 6, 7, 8).compare(&(1, 2, 3, 4, 5, 6, 7, 9)),
        StrongOrdering::Less
    );
}

// =============================================================================
// Part 3: Adapters
// =============================================================================

#[test]
fn test_total_order_floats() {
    assert_eq!(category_of::<TotalOrder<f64>>(), Category::Strong);
    assert_eq!(strong_order(-0.0, 0.0), StrongOrdering::Less);
    assert_eq!(strong_order(f64::NAN, f64::NAN), StrongOrdering::Equal);
    assert_eq!(strong_order(1.0, f64::INFINITY), StrongOrdering::Less);

    let mut values = vec![TotalOrder(f64::NAN), TotalOrder(1.0), TotalOrder(-3.0)];
    sort(&mut values);
    assert_eq!(values[0].0, -3.0);
    assert_eq!(values[1].0, 1.0);
    assert!(values[2].0.is_nan());
}

#[test]
fn test_nullable() {
    assert_eq!(category_of::<Nullable<i32>>(), Category::Partial);
    assert_eq!(Nullable::new(1i32).compare(&Nullable::new(2)), PartialOrdering::Less);
    assert_eq!(Nullable::<i32>::missing().compare(&Nullable::new(2)), PartialOrdering::Unordered);
    assert_eq!(
        Nullable::<i32>::missing().compare(&Nullable::missing()),
        PartialOrdering::Unordered
    );
}

#[test]
fn test_std_bridges() {
    assert_eq!(ByOrd("a").compare(&ByOrd("b")), StrongOrdering::Less);
    assert_eq!(category_of::<ByPartialOrd<i32>>(), Category::Partial);
    assert_eq!(ByPartialOrd(f32::NAN).compare(&ByPartialOrd(0.0)), PartialOrdering::Unordered);
}

/// Only `==` and `<` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Rating {
    value: f32,
}

#[test]
fn test_synthesized_from_eq_and_lt() {
    let low = Synthesized(Rating { value: 1.0 });
    let high = Synthesized(Rating { value: 4.5 });
    assert_eq!(category_of::<Synthesized<Rating>>(), Category::Weak);
    assert_eq!(low.compare(&high), WeakOrdering::Less);
    assert_eq!(high.compare(&low), WeakOrdering::Greater);
    assert_eq!(low.compare(&low), WeakOrdering::Equivalent);
    assert_eq!(low.cmp_std(&high), Ordering::Less);
}

// =============================================================================
// Part 4: Mixed-Sign Integers
// =============================================================================

#[test]
fn test_mixed_sign_predicates() {
    assert!(cmp_less(-1i32, 0u32));
    assert!(cmp_not_equal(-1i64, u64::MAX));
    assert!(!cmp_equal(-1i8, 255u8));
    assert!(cmp_greater(u128::MAX, i128::MAX));
    assert!(cmp_less_equal(i128::MIN, 0u8));
    assert!(cmp_greater_equal(7usize, 7i16));
    assert!(cmp_equal(300u16, 300i64));
}

#[test]
fn test_mixed_three_way() {
    assert_eq!(cmp_three_way(-1i8, 255u8), StrongOrdering::Less);
    assert_eq!(cmp_three_way(u64::MAX, -1i64), StrongOrdering::Greater);
    assert_eq!(cmp_three_way(0i32, 0u64), StrongOrdering::Equal);
}

#[test]
fn test_in_range() {
    assert!(!in_range::<u8>(300i32));
    assert!(in_range::<u8>(255u64));
    assert!(in_range::<i8>(-128i64));
    assert!(!in_range::<i8>(-129i64));
    assert!(!in_range::<usize>(-1i32));
    assert!(in_range::<u128>(i64::MAX));
}
