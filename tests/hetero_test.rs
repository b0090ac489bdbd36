//! Directed comparison between distinct types.

use tola_ord::hetero::{by_key, compare_projected};
use tola_ord::prelude::*;

struct Human {
    name: String,
    how_old: u32,
}

struct Person {
    name: String,
    age: u8,
}

impl CompareWith<Person> for Human {
    type Strength = Strong;

    fn compare_with(&self, rhs: &Person) -> StrongOrdering {
        compare_projected(
            self,
            rhs,
            |h| (h.name.as_str(), h.how_old),
            |p| (p.name.as_str(), u32::from(p.age)),
        )
    }
}

fn human(name: &str, how_old: u32) -> Human {
    Human { name: name.to_string(), how_old }
}

fn person(name: &str, age: u8) -> Person {
    Person { name: name.to_string(), age }
}

#[test]
fn test_shared_fields() {
    assert_eq!(human("Ann", 30).compare_with(&person("Ann", 30)), StrongOrdering::Equal);
    assert_eq!(human("Ann", 30).compare_with(&person("Ann", 31)), StrongOrdering::Less);
    assert_eq!(human("Bob", 1).compare_with(&person("Ann", 99)), StrongOrdering::Greater);
}

#[test]
fn test_wide_age_not_truncated() {
    // 300 does not fit in the person's u8
    assert_eq!(human("Ann", 300).compare_with(&person("Ann", 255)), StrongOrdering::Greater);
}

#[test]
fn test_reflexive_impl() {
    assert_eq!(5i32.compare_with(&7i32), StrongOrdering::Less);
    assert_eq!(1.0f64.compare_with(&f64::NAN), PartialOrdering::Unordered);
}

#[test]
fn test_projected_key_strength() {
    let r = compare_projected(&1.5f64, &person("Ann", 2), |x| *x, |p| f64::from(p.age));
    assert_eq!(r, PartialOrdering::Less);

    let r = compare_projected(&f64::NAN, &person("Ann", 2), |x| *x, |p| f64::from(p.age));
    assert_eq!(r, PartialOrdering::Unordered);
}

#[test]
fn test_by_key() {
    let by_age = by_key(|p: &Person| p.age);
    assert_eq!(by_age(&person("Zed", 1), &person("Amy", 2)), StrongOrdering::Less);
    assert_eq!(by_age(&person("Zed", 2), &person("Amy", 2)), StrongOrdering::Equal);
}
