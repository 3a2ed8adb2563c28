//! Building schema descriptors from JSON Schema documents and sample values

use serde_json::Value as Json;

use super::{Schema, SchemaFields};
use crate::error::{CampusError, Result};
use crate::value::Value;

impl Schema {
    /// Convert a JSON-Schema-like document into a descriptor.
    ///
    /// Understood keywords:
    /// - `type: "object"` with `properties`
    /// - `type: "array"` with `items`
    /// - nullable forms: `type: ["string", "null"]`, and `anyOf` / `oneOf`
    ///   whose only non-null member is unwrapped
    ///
    /// Missing `properties` or `items` are treated as empty. Any other type
    /// is a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Schema`] if a node is not a JSON object, or if
    /// `properties` / `items` have the wrong JSON type.
    pub fn from_json(document: &Json) -> Result<Schema> {
        convert_node(document, "")
    }

    /// Infer a descriptor from a sample response value.
    ///
    /// Maps become objects; a list becomes an array of the union of its map
    /// elements' fields (first occurrence wins), or an array of scalars when
    /// it holds no maps. Everything else is scalar.
    pub fn infer(sample: &Value) -> Schema {
        match sample {
            Value::Map(map) => Schema::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Schema::infer(v)))
                    .collect(),
            ),
            Value::List(items) => {
                let mut merged: Option<SchemaFields> = None;
                for item in items.iter() {
                    if let Schema::Object(fields) = Schema::infer(item) {
                        let target = merged.get_or_insert_with(SchemaFields::new);
                        for (name, field) in fields {
                            target.entry(name).or_insert(field);
                        }
                    }
                }
                Schema::array_of(merged.map_or(Schema::Scalar, Schema::Object))
            }
            _ => Schema::Scalar,
        }
    }
}

fn convert_node(node: &Json, path: &str) -> Result<Schema> {
    let Json::Object(keywords) = node else {
        return Err(CampusError::schema(
            path,
            format!("expected a schema object, got {}", json_kind(node)),
        ));
    };

    for union_key in ["anyOf", "oneOf"] {
        if let Some(members) = keywords.get(union_key) {
            return convert_union(members, path, union_key);
        }
    }

    let ty = match keywords.get("type") {
        Some(Json::String(ty)) => Some(ty.as_str()),
        Some(Json::Array(types)) => types
            .iter()
            .filter_map(Json::as_str)
            .find(|ty| *ty != "null"),
        _ => None,
    };

    match ty {
        Some("object") => convert_properties(keywords.get("properties"), path),
        Some("array") => match keywords.get("items") {
            None => Ok(Schema::array_of(Schema::Scalar)),
            Some(items) => Ok(Schema::array_of(convert_node(items, path)?)),
        },
        // Untyped nodes with properties are objects
        None if keywords.contains_key("properties") => {
            convert_properties(keywords.get("properties"), path)
        }
        _ => Ok(Schema::Scalar),
    }
}

fn convert_properties(properties: Option<&Json>, path: &str) -> Result<Schema> {
    let properties = match properties {
        None | Some(Json::Null) => return Ok(Schema::Object(SchemaFields::new())),
        Some(Json::Object(properties)) => properties,
        Some(other) => {
            return Err(CampusError::schema(
                path,
                format!("`properties` must be an object, got {}", json_kind(other)),
            ))
        }
    };

    let mut fields = SchemaFields::new();
    for (name, property) in properties {
        let child_path = if path.is_empty() {
            name.clone()
        } else {
            format!("{path}.{name}")
        };
        fields.insert(name.clone(), convert_node(property, &child_path)?);
    }
    Ok(Schema::Object(fields))
}

fn convert_union(members: &Json, path: &str, keyword: &str) -> Result<Schema> {
    let Json::Array(members) = members else {
        return Err(CampusError::schema(
            path,
            format!("`{keyword}` must be an array, got {}", json_kind(members)),
        ));
    };

    let non_null: Vec<&Json> = members
        .iter()
        .filter(|m| m.get("type").and_then(Json::as_str) != Some("null"))
        .collect();

    match non_null.as_slice() {
        [only] => convert_node(only, path),
        // Heterogeneous unions have no single shape to expand
        _ => Ok(Schema::Scalar),
    }
}

fn json_kind(node: &Json) -> &'static str {
    match node {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
