#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Vec/String/Box comparators, runtime schemas, stable sorting

//! # tola-ord
//!
//! Three-way comparison with a **type-level ordering-strength lattice**.
//!
//! ## Architecture
//!
//! Every comparator has a strength: `Strong`, `Weak` or `Partial`. Composite
//! values declare their comparable fields explicitly; the composite's
//! strength is the meet of its fields, and asking for more than that is a
//! compile error at the declaration.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Lattice                                                 |
//! |  - Category (runtime), Strong / Weak / Partial (type-level), Meet |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Comparators                                             |
//! |  - Compare, StrongOrdering / WeakOrdering / PartialOrdering       |
//! |  - primitives, sequences, tuples, adapters, mixed-sign integers   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Aggregation                                             |
//! |  - Composite, Field / At<I>, Cons / Inherit / Nil, Lexicographic  |
//! |  - Equality (Consistent / Independent), CompareWith               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Consumers & Metadata                                    |
//! |  - sort / sort_by_policy / Key, Schema + FieldDescriptor          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_ord::prelude::*;
//!
//! #[derive(Composite)]
//! #[composite(fields(value), strength = Strong)]
//! struct Number {
//!     value: i32,
//! }
//!
//! #[derive(Composite)]
//! #[composite(fields(value))]
//! struct FloatNumber {
//!     value: f64,
//! }
//!
//! assert_eq!(Number { value: 1 }.compare(&Number { value: 1 }), StrongOrdering::Equal);
//! assert_eq!(category_of::<FloatNumber>(), Category::Partial);
//!
//! let nan = FloatNumber { value: f64::NAN };
//! assert_eq!(nan.compare(&nan), PartialOrdering::Unordered);
//! assert!(!equals(&nan, &nan));
//! ```
//!
//! All comparisons are pure and allocation-free; nothing is shared between
//! calls, so comparators can be used from any number of threads.

// Allow `::tola_ord` to work inside the crate itself
extern crate self as tola_ord;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Lattice
// =============================================================================
pub mod category;
pub mod ordering;

// =============================================================================
// Layer 1: Comparators
// =============================================================================
pub mod compare;

// =============================================================================
// Layer 2: Aggregation
// =============================================================================
pub mod aggregate;
pub mod equality;
pub mod hetero;

// =============================================================================
// Layer 3: Consumers
// =============================================================================
pub mod sort;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use category::{Category, Meet, Partial, Strength, Strong, Total, Weak, WeakenTo, combine, combine_all};
pub use ordering::{ComparisonResult, OrderingResult, PartialOrdering, StrongOrdering, WeakOrdering};
pub use compare::{
    ByOrd, ByPartialOrd, Compare, Nullable, ResultOf, Synthesized, TotalOrder, category_of, compare,
};
pub use aggregate::{
    At, Composite, Cons, Field, FieldDescriptor, FieldList, Inherit, Lexicographic, Nil,
    compare_fields, equivalent_fields,
};
#[cfg(feature = "alloc")]
pub use aggregate::Schema;
pub use equality::{Consistent, Equality, EqualityMode, Independent, equals, is_consistent};
pub use hetero::CompareWith;
pub use error::{SchemaError, SortError};

// Re-export proc-macros
pub use macros::Composite;

/// Common items for comparison code.
pub mod prelude {
    pub use crate::category::{Category, Partial, Strength, Strong, Total, Weak};
    pub use crate::ordering::{
        ComparisonResult, OrderingResult, PartialOrdering, StrongOrdering, WeakOrdering,
    };
    pub use crate::compare::{
        ByOrd, ByPartialOrd, Compare, Nullable, Synthesized, TotalOrder, category_of,
    };
    pub use crate::aggregate::Composite;
    #[cfg(feature = "alloc")]
    pub use crate::aggregate::Schema;
    pub use crate::equality::{Equality, equals};
    pub use crate::hetero::CompareWith;
    pub use crate::sort::{Key, UnorderedPolicy};
    pub use macros::Composite;
}
