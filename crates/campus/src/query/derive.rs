//! Walking a schema to find scalar fields and relations

use indexmap::IndexMap;

use crate::config::QueryConfig;
use crate::schema::{Schema, SchemaFields};

/// Fields and relations found in a schema, before case conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    /// Scalar fields of the root object
    pub fields: Vec<String>,

    /// Relation paths to expand, dotted when nested (`school.district`)
    pub expand: Vec<String>,

    /// Scalar fields of each relation, keyed by the relation's path
    pub nested_fields: IndexMap<String, Vec<String>>,
}

impl DerivedFields {
    /// Whether nothing was derived.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.expand.is_empty() && self.nested_fields.is_empty()
    }
}

/// Derive fields and expansions from a schema with the default config.
///
/// Root-level scalars go to `fields`. Every object or array-of-object field
/// is a relation: its path is added to `expand` and its own scalars are
/// recorded under `nested_fields[path]`, then its relations are visited
/// depth-first. A schema whose root is not an object derives nothing.
pub fn derive_from_schema(schema: &Schema) -> DerivedFields {
    derive_with_config(schema, &QueryConfig::default())
}

/// Derive fields and expansions, stopping at `config.max_depth` levels of
/// relation nesting.
pub fn derive_with_config(schema: &Schema, config: &QueryConfig) -> DerivedFields {
    let mut derived = DerivedFields::default();

    let Some(root) = schema.fields() else {
        tracing::trace!("schema root is scalar, nothing to derive");
        return derived;
    };

    for (name, field) in root {
        if field.is_scalar() {
            derived.fields.push(name.clone());
        } else if let Some(fields) = field.fields() {
            visit_relation(name, fields, 1, config, &mut derived);
        }
    }

    tracing::trace!(
        fields = derived.fields.len(),
        relations = derived.expand.len(),
        "derived sparse fieldset"
    );
    derived
}

fn visit_relation(
    path: &str,
    fields: &SchemaFields,
    depth: usize,
    config: &QueryConfig,
    derived: &mut DerivedFields,
) {
    if depth > config.max_depth {
        tracing::warn!(
            relation = path,
            max_depth = config.max_depth,
            "relation nesting too deep, not expanding"
        );
        return;
    }

    derived.expand.push(path.to_string());

    let leaves = fields
        .iter()
        .filter(|(_, field)| field.is_scalar())
        .map(|(name, _)| name.clone())
        .collect();
    derived.nested_fields.insert(path.to_string(), leaves);

    for (name, field) in fields {
        if let Some(child) = field.fields() {
            visit_relation(&format!("{path}.{name}"), child, depth + 1, config, derived);
        }
    }
}
