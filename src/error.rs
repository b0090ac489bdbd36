//! Error types.
//!
//! Incomparable values are never an error: `Unordered` is an ordinary
//! outcome. Errors only arise when metadata cannot support a request, or when
//! a consumer is told to reject unordered input.

use thiserror::Error;

use crate::category::Category;

/// A comparison schema cannot be built or cannot serve a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("`{owner}` has no comparable fields")]
    Empty { owner: &'static str },

    #[error("`{owner}` cannot provide a {required} ordering: field `{field}` is only {actual}")]
    TooWeak {
        owner: &'static str,
        field: &'static str,
        required: Category,
        actual: Category,
    },

    #[cfg(feature = "alloc")]
    #[error("`{owner}` has no field named `{field}`")]
    UnknownField {
        owner: &'static str,
        field: alloc::string::String,
    },
}

/// A sort was asked to reject unordered input and found some.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// `index` holds a value that is unordered even against itself.
    #[error("element {index} is unordered against every value")]
    Incomparable { index: usize },

    /// Two ordinary elements compare `Unordered`.
    #[error("two elements compare unordered")]
    Unordered,
}
