//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Composite)]` | on struct | Declare comparable fields, strength and equality |

mod composite;

pub use composite::expand_derive_composite;
