//! Procedural macros for tola-ord
//!
//! ## Derive
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Composite)]` | struct | Field-wise three-way comparison |
//!
//! ## Attribute keys
//!
//! | Key | Example | Meaning |
//! |-----|---------|---------|
//! | `fields(..)` | `fields(name, 0)` | Own fields, in comparison order |
//! | `base = ..` | `base = base` | Embedded composite, compared first |
//! | `strength = ..` | `strength = Strong` | Requested category (default: inferred) |
//! | `eq = ..` | `eq = independent(name)` | Equality mode (default: `consistent`) |
//! | `std` | `std` | Also implement the std comparison traits |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Composite)]
//! #[composite(fields(name, age, height), eq = independent(name, age))]
//! struct Human {
//!     name: String,
//!     age: u32,
//!     height: f64,
//! }
//!
//! assert_eq!(category_of::<Human>(), Category::Partial);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive `Composite`, `Compare` and `Equality` from an explicit field list.
///
/// Requires a `#[composite(...)]` attribute; fields are never discovered
/// implicitly.
///
/// # Usage
/// ```ignore
/// #[derive(Composite)]
/// #[composite(fields(value), strength = Strong, std)]
/// struct Number {
///     value: i32,
/// }
///
/// let mut set = BTreeSet::new();
/// set.insert(Number { value: 1 });
/// ```
///
/// Requesting `strength = Strong` over a partial field (`f64`) fails to
/// compile, as does an equality field list written without `independent`.
#[proc_macro_derive(Composite, attributes(composite))]
pub fn derive_composite(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_composite(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
