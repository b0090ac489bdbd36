//! Runtime view of a composite's comparison metadata.

use alloc::string::ToString;
use alloc::vec::Vec;

use super::{Composite, FieldDescriptor, descriptors};
use crate::category::{Category, combine_all};
use crate::error::SchemaError;
use crate::ordering::ComparisonResult;

/// The effective field sequence of a composite together with its aggregate
/// category, computed once at construction.
///
/// Comparison through a schema follows the same lexicographic rule as the
/// statically typed path, on erased field comparators.
///
/// ```
/// use tola_ord::prelude::*;
///
/// #[derive(Composite)]
/// #[composite(fields(name, age, height))]
/// struct Human {
///     name: String,
///     age: u32,
///     height: f64,
/// }
///
/// let schema = Schema::<Human>::of().unwrap();
/// assert_eq!(schema.category(), Category::Partial);
/// assert!(schema.require(Category::Strong).is_err());
///
/// let identity = schema.select(&["name", "age"]).unwrap();
/// assert_eq!(identity.category(), Category::Strong);
/// ```
pub struct Schema<T: ?Sized> {
    owner: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    category: Category,
}

impl<T: Composite + ?Sized> Schema<T> {
    /// Schema of a declared composite.
    pub fn of() -> Result<Self, SchemaError> {
        Self::from_descriptors(T::NAME, descriptors::<T>())
    }
}

impl<T: ?Sized> Schema<T> {
    /// Schema over an explicit descriptor sequence.
    pub fn from_descriptors(
        owner: &'static str,
        fields: Vec<FieldDescriptor<T>>,
    ) -> Result<Self, SchemaError> {
        let Some(category) = combine_all(fields.iter().map(|f| f.category)) else {
            tracing::debug!(owner, "rejected comparison schema without fields");
            return Err(SchemaError::Empty { owner });
        };

        tracing::debug!(owner, fields = fields.len(), %category, "built comparison schema");
        Ok(Schema { owner, fields, category })
    }

    #[inline]
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Aggregate category: the weakest field category.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check that this schema can back a `required` ordering.
    ///
    /// Fails with the first field whose category is too weak.
    pub fn require(&self, required: Category) -> Result<(), SchemaError> {
        if self.category.satisfies(required) {
            return Ok(());
        }
        match self.fields.iter().find(|f| !f.category.satisfies(required)) {
            Some(field) => {
                tracing::debug!(
                    owner = self.owner,
                    field = field.name,
                    %required,
                    actual = %field.category,
                    "comparison schema too weak"
                );
                Err(SchemaError::TooWeak {
                    owner: self.owner,
                    field: field.name,
                    required,
                    actual: field.category,
                })
            }
            None => Ok(()),
        }
    }

    /// A new schema over the named fields, in the order given.
    ///
    /// Intended for equality-relevant subsets. A name matches the first field
    /// with that name in the effective sequence (base fields come first).
    /// Results of a subset schema are not consistent with the full ordering.
    pub fn select(&self, names: &[&str]) -> Result<Schema<T>, SchemaError> {
        let mut fields = Vec::with_capacity(names.len());
        for name in names {
            match self.fields.iter().find(|f| f.name == *name) {
                Some(field) => fields.push(*field),
                None => {
                    return Err(SchemaError::UnknownField {
                        owner: self.owner,
                        field: name.to_string(),
                    });
                }
            }
        }
        Schema::from_descriptors(self.owner, fields)
    }

    /// Lexicographic comparison over the descriptor sequence.
    ///
    /// Stops at the first `Less`, `Greater` or `Unordered` field outcome.
    /// When every field is equal/equivalent, the zero outcome is reported in
    /// the schema's category (`Equal` for strong, `Equivalent` otherwise).
    pub fn compare(&self, a: &T, b: &T) -> ComparisonResult {
        for field in &self.fields {
            let r = field.compare(a, b);
            if !r.is_eq() {
                return r;
            }
        }
        ComparisonResult::Equal.at(self.category)
    }

    /// Field-by-field equivalence over the descriptor sequence.
    pub fn equals(&self, a: &T, b: &T) -> bool {
        self.fields.iter().all(|f| f.equivalent(a, b))
    }
}

impl<T: ?Sized> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Schema { owner: self.owner, fields: self.fields.clone(), category: self.category }
    }
}

impl<T: ?Sized> core::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Schema")
            .field("owner", &self.owner)
            .field("category", &self.category)
            .field("fields", &self.fields)
            .finish()
    }
}
