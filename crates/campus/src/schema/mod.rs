//! Schema descriptors for expected response shapes
//!
//! A [`Schema`] describes the shape of an API response for introspection
//! only: which fields are scalar and which are nested objects (relations).
//! Validation libraries and response types are converted into this neutral
//! descriptor once, and everything downstream walks only the descriptor.

mod convert;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field descriptors of an object schema, in declaration order.
pub type SchemaFields = IndexMap<String, Schema>;

/// A recursive description of a response shape.
///
/// Owned trees cannot refer back to an ancestor, so a `Schema` is always
/// finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "shape", rename_all = "snake_case")]
pub enum Schema {
    /// A leaf value (string, number, boolean, date, enum...)
    Scalar,

    /// A nested object with named fields
    Object(SchemaFields),

    /// A list; only the element shape is kept
    ArrayOf(Box<Schema>),
}

impl Default for Schema {
    fn default() -> Self {
        Schema::Object(SchemaFields::new())
    }
}

impl Schema {
    /// A scalar leaf.
    pub fn scalar() -> Self {
        Schema::Scalar
    }

    /// An object schema built from `(name, schema)` pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Object(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// An array whose elements have the given shape.
    pub fn array_of(element: Schema) -> Self {
        Schema::ArrayOf(Box::new(element))
    }

    /// Add a field (builder pattern).
    ///
    /// Array schemas add the field to their element; a scalar becomes an
    /// object holding just this field.
    pub fn with_field(self, name: impl Into<String>, field: Schema) -> Self {
        match self {
            Schema::Object(mut fields) => {
                fields.insert(name.into(), field);
                Schema::Object(fields)
            }
            Schema::ArrayOf(element) => Schema::array_of(element.with_field(name, field)),
            Schema::Scalar => Schema::object([(name, field)]),
        }
    }

    /// The shape after unwrapping any number of array layers.
    pub fn element(&self) -> &Schema {
        let mut current = self;
        while let Schema::ArrayOf(inner) = current {
            current = inner;
        }
        current
    }

    /// Object fields of this schema (or of its array element).
    pub fn fields(&self) -> Option<&SchemaFields> {
        match self.element() {
            Schema::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether this field is a leaf. Arrays of scalars count as leaves.
    pub fn is_scalar(&self) -> bool {
        matches!(self.element(), Schema::Scalar)
    }

    /// Whether this field is a relation: an object or an array of objects.
    pub fn is_relation(&self) -> bool {
        !self.is_scalar()
    }

    /// Look up a direct field by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields().and_then(|f| f.get(name))
    }
}
