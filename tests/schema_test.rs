//! Runtime field descriptors and comparison schemas.

use tola_ord::aggregate::{FieldDescriptor, descriptors};
use tola_ord::prelude::*;
use tola_ord::{At, SchemaError};

// =============================================================================
// Test Types
// =============================================================================

#[derive(Composite)]
#[composite(fields(name, age, height))]
struct Human {
    name: String,
    age: u32,
    height: f64,
}

#[derive(Composite)]
#[composite(fields(value))]
struct Base {
    value: String,
}

#[derive(Composite)]
#[composite(base = base, fields(data))]
struct Derived {
    base: Base,
    data: Vec<i32>,
}

#[derive(Composite)]
#[composite(fields(id), strength = Partial)]
struct LooseId {
    id: u32,
}

#[derive(Composite)]
#[composite(base = base, fields(x))]
struct OnLoose {
    base: LooseId,
    x: u32,
}

fn human(name: &str, age: u32, height: f64) -> Human {
    Human { name: name.to_string(), age, height }
}

fn derived(value: &str, data: &[i32]) -> Derived {
    Derived { base: Base { value: value.to_string() }, data: data.to_vec() }
}

// =============================================================================
// Descriptors
// =============================================================================

#[test]
fn test_descriptor_sequence() {
    let fields = descriptors::<Human>();
    let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
    let categories: Vec<Category> = fields.iter().map(|f| f.category).collect();

    assert_eq!(names, ["name", "age", "height"]);
    assert_eq!(categories, [Category::Strong, Category::Strong, Category::Partial]);
    assert!(fields.iter().all(|f| f.owner == "Human" && !f.is_inherited()));
}

#[test]
fn test_inherited_descriptors_come_first() {
    let fields = descriptors::<Derived>();
    assert_eq!(fields.len(), 2);

    assert_eq!(fields[0].name, "value");
    assert_eq!(fields[0].owner, "Base");
    assert_eq!(fields[0].depth, 1);
    assert!(fields[0].is_inherited());

    assert_eq!(fields[1].name, "data");
    assert_eq!(fields[1].owner, "Derived");
    assert_eq!(fields[1].depth, 0);
}

#[test]
fn test_descriptor_compares_its_field() {
    let height = FieldDescriptor::<Human>::of::<At<2>>();
    let a = human("Zed", 1, 1.5);
    let b = human("Amy", 2, 1.6);
    assert_eq!(height.compare(&a, &b), ComparisonResult::Less);
    assert!(height.equivalent(&a, &a));
}

#[test]
fn test_inherited_descriptor_capped_by_base() {
    let fields = descriptors::<OnLoose>();
    assert_eq!(fields[0].name, "id");
    assert_eq!(fields[0].category, Category::Partial);
    assert_eq!(fields[1].name, "x");
    assert_eq!(fields[1].category, Category::Strong);
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_category() {
    let schema = Schema::<Human>::of().unwrap();
    assert_eq!(schema.owner(), "Human");
    assert_eq!(schema.len(), 3);
    assert_eq!(schema.category(), Category::Partial);
    assert_eq!(Schema::<Derived>::of().unwrap().category(), Category::Strong);
}

#[test]
fn test_schema_category_matches_typed() {
    let schema = Schema::<OnLoose>::of().unwrap();
    assert_eq!(schema.category(), category_of::<OnLoose>());
    assert_eq!(
        schema.require(Category::Strong),
        Err(SchemaError::TooWeak {
            owner: "OnLoose",
            field: "id",
            required: Category::Strong,
            actual: Category::Partial,
        })
    );
}

#[test]
fn test_require_names_weak_field() {
    let schema = Schema::<Human>::of().unwrap();
    assert_eq!(schema.require(Category::Partial), Ok(()));
    assert_eq!(
        schema.require(Category::Strong),
        Err(SchemaError::TooWeak {
            owner: "Human",
            field: "height",
            required: Category::Strong,
            actual: Category::Partial,
        })
    );
}

#[test]
fn test_schema_compare_matches_typed() {
    let schema = Schema::<Derived>::of().unwrap();
    let d1 = derived("text", &[1, 2, 3]);
    let d2 = derived("text", &[1, 2, 4]);
    assert_eq!(schema.compare(&d1, &d2), ComparisonResult::Less);
    assert_eq!(schema.compare(&d1, &d1), ComparisonResult::Equal);
    assert_eq!(schema.compare(&d1, &d2), ComparisonResult::from(d1.compare(&d2)));
}

#[test]
fn test_schema_zero_outcome_follows_category() {
    let schema = Schema::<Human>::of().unwrap();
    let h = human("Alice", 30, 1.75);
    assert_eq!(schema.compare(&h, &h), ComparisonResult::Equivalent);

    let nan = human("Alice", 30, f64::NAN);
    assert_eq!(schema.compare(&nan, &nan), ComparisonResult::Unordered);
    assert!(!schema.equals(&nan, &nan));
}

#[test]
fn test_select_subset() {
    let schema = Schema::<Human>::of().unwrap();
    let identity = schema.select(&["name", "age"]).unwrap();
    assert_eq!(identity.category(), Category::Strong);

    let h1 = human("Alice", 30, 1.75);
    let h2 = human("Alice", 30, 1.80);
    assert!(identity.equals(&h1, &h2));
    assert!(!schema.equals(&h1, &h2));
    assert_eq!(identity.compare(&h1, &h2), ComparisonResult::Equal);
}

#[test]
fn test_select_unknown_field() {
    let schema = Schema::<Human>::of().unwrap();
    let err = schema.select(&["name", "nickname"]).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnknownField { owner: "Human", field: "nickname".to_string() }
    );
    assert_eq!(err.to_string(), "`Human` has no field named `nickname`");
}

#[test]
fn test_empty_schema_rejected() {
    let err = Schema::<Human>::from_descriptors("Human", Vec::new()).unwrap_err();
    assert_eq!(err, SchemaError::Empty { owner: "Human" });
    assert_eq!(err.to_string(), "`Human` has no comparable fields");

    let schema = Schema::<Human>::of().unwrap();
    assert!(schema.select(&[]).is_err());
}

#[test]
fn test_too_weak_message() {
    let err = SchemaError::TooWeak {
        owner: "Human",
        field: "height",
        required: Category::Strong,
        actual: Category::Partial,
    };
    assert_eq!(
        err.to_string(),
        "`Human` cannot provide a strong ordering: field `height` is only partial"
    );
}

// =============================================================================
// Threads
// =============================================================================

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_metadata_is_send_sync() {
    assert_send_sync::<FieldDescriptor<Human>>();
    assert_send_sync::<Schema<Human>>();
    assert_send_sync::<Schema<Derived>>();
    assert_send_sync::<Category>();
    assert_send_sync::<ComparisonResult>();
    assert_send_sync::<TotalOrder<f64>>();
}

#[test]
fn test_shared_schema_across_threads() {
    let schema = Schema::<Human>::of().unwrap();
    let people = [
        human("Alice", 30, 1.75),
        human("Alice", 31, 1.60),
        human("Bob", 20, f64::NAN),
    ];
    let expected: Vec<ComparisonResult> =
        people.iter().map(|p| schema.compare(&people[0], p)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    people
                        .iter()
                        .map(|p| {
                            assert_eq!(
                                ComparisonResult::from(people[0].compare(p)),
                                schema.compare(&people[0], p)
                            );
                            schema.compare(&people[0], p)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
