//! Building flat query parameters from derived or explicit field lists

use indexmap::IndexMap;
use serde::Serialize;

use super::case::to_snake_path;
use super::derive::{derive_with_config, DerivedFields};
use crate::config::QueryConfig;
use crate::context::ContextStack;
use crate::schema::Schema;
use crate::value::Value;

/// Explicit field, expansion and passthrough parameter lists.
///
/// When passed to [`build_query_params`] these replace schema derivation
/// entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Scalar fields of the root entity
    pub fields: Vec<String>,

    /// Relation paths to expand
    pub expand: Vec<String>,

    /// Fields of each relation, keyed by relation path
    pub nested_fields: IndexMap<String, Vec<String>>,

    /// Extra parameters copied through unchanged (values coerced to strings)
    pub params: IndexMap<String, Value>,
}

impl QueryOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add root fields (builder pattern)
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add relation expansions (builder pattern)
    pub fn with_expand<S: Into<String>>(mut self, expand: impl IntoIterator<Item = S>) -> Self {
        self.expand.extend(expand.into_iter().map(Into::into));
        self
    }

    /// Add fields of one relation (builder pattern)
    pub fn with_nested<S: Into<String>>(
        mut self,
        relation: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.nested_fields
            .entry(relation.into())
            .or_default()
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add a passthrough parameter (builder pattern)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Copy the named context values into passthrough parameters.
    ///
    /// Names the context does not provide are skipped.
    pub fn with_params_from<'a>(
        mut self,
        context: &ContextStack,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        for name in names {
            if let Some(value) = context.get(name) {
                self.params.insert(name.to_string(), value.clone());
            }
        }
        self
    }
}

impl From<DerivedFields> for QueryOptions {
    fn from(derived: DerivedFields) -> Self {
        Self {
            fields: derived.fields,
            expand: derived.expand,
            nested_fields: derived.nested_fields,
            params: IndexMap::new(),
        }
    }
}

/// Flat, ordered query parameters ready for an HTTP client's query
/// serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, String>);

impl QueryParams {
    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Unwrap into the underlying map
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build query parameters with the default config.
///
/// With `options`, the schema is ignored and the explicit lists are used
/// as-is. Without, fields are derived from `schema`.
pub fn build_query_params(schema: &Schema, options: Option<&QueryOptions>) -> QueryParams {
    build_query_params_with_config(schema, options, &QueryConfig::default())
}

/// Build query parameters.
///
/// Field and expand paths are case-converted per segment (when
/// `config.convert_case` is set), relation fields are flattened into the
/// fieldset as `relation.field`, and empty lists are omitted. Passthrough
/// params are written last, so they win over `fields`/`expand` of the same
/// name. Null params are dropped.
pub fn build_query_params_with_config(
    schema: &Schema,
    options: Option<&QueryOptions>,
    config: &QueryConfig,
) -> QueryParams {
    let explicit = options.is_some();
    let derived;
    let options = match options {
        Some(options) => options,
        None => {
            derived = QueryOptions::from(derive_with_config(schema, config));
            &derived
        }
    };

    let mut fields: Vec<String> = options
        .fields
        .iter()
        .map(|f| convert_path(f, config))
        .collect();
    for (relation, children) in &options.nested_fields {
        fields.extend(
            children
                .iter()
                .map(|child| convert_path(&format!("{relation}.{child}"), config)),
        );
    }
    let expand: Vec<String> = options
        .expand
        .iter()
        .map(|e| convert_path(e, config))
        .collect();

    let mut params = IndexMap::new();
    if !fields.is_empty() {
        params.insert(config.fields_key.clone(), fields.join(&config.separator));
    }
    if !expand.is_empty() {
        params.insert(config.expand_key.clone(), expand.join(&config.separator));
    }
    for (key, value) in &options.params {
        if let Some(value) = param_string(value, &config.separator) {
            params.insert(key.clone(), value);
        }
    }

    tracing::debug!(
        explicit,
        params = params.len(),
        "built query params"
    );
    QueryParams(params)
}

fn convert_path(path: &str, config: &QueryConfig) -> String {
    if config.convert_case {
        to_snake_path(path)
    } else {
        path.to_string()
    }
}

/// Coerce a passthrough value to its query-string form.
fn param_string(value: &Value, separator: &str) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.as_str().to_string()),
        Value::List(items) => Some(
            items
                .iter()
                .map(|item| param_string(item, separator).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(separator),
        ),
        Value::Map(_) => Some(serde_json::Value::from(value).to_string()),
        Value::Float(n) if n.is_infinite() => {
            Some(if *n > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
        }
        // `1.0` is sent as `1`
        Value::Float(n) => Some(format!("{n}")),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_param_string_coercion() {
        assert_eq!(param_string(&Value::Int(3), ","), Some("3".to_string()));
        assert_eq!(param_string(&Value::Float(1.0), ","), Some("1".to_string()));
        assert_eq!(param_string(&Value::Bool(true), ","), Some("true".to_string()));
        assert_eq!(param_string(&Value::Null, ","), None);
        assert_eq!(
            param_string(&Value::Float(f64::INFINITY), ","),
            Some("Infinity".to_string())
        );
        assert_eq!(
            param_string(&Value::Float(f64::NEG_INFINITY), ","),
            Some("-Infinity".to_string())
        );
        assert_eq!(param_string(&Value::Float(f64::NAN), ","), Some("NaN".to_string()));
        assert_eq!(
            param_string(&Value::from(vec![1i64, 2, 3]), ","),
            Some("1,2,3".to_string())
        );
        assert_eq!(
            param_string(&Value::map([("a", Value::Int(1))]), ","),
            Some(r#"{"a":1}"#.to_string())
        );
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let params = build_query_params(&Schema::scalar(), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_custom_keys_and_separator() {
        let config = QueryConfig {
            expand_key: "include".to_string(),
            separator: "|".to_string(),
            ..QueryConfig::default()
        };
        let schema = Schema::object([
            ("id", Schema::scalar()),
            ("fullName", Schema::scalar()),
            ("house", Schema::object([("colour", Schema::scalar())])),
        ]);

        let params = build_query_params_with_config(&schema, None, &config);
        assert_eq!(params.get("fields"), Some("id|full_name|house.colour"));
        assert_eq!(params.get("include"), Some("house"));
        assert!(!params.contains_key("expand"));
    }

    #[test]
    fn test_case_conversion_can_be_disabled() {
        let schema = Schema::object([("fullName", Schema::scalar())]);
        let config = QueryConfig::new().without_case_conversion();
        let params = build_query_params_with_config(&schema, None, &config);
        assert_eq!(params.get("fields"), Some("fullName"));
    }

    #[test]
    fn test_passthrough_overrides_derived_key() {
        let options = QueryOptions::new()
            .with_fields(["id"])
            .with_param("fields", "everything");
        let params = build_query_params(&Schema::default(), Some(&options));
        assert_eq!(params.get("fields"), Some("everything"));
        assert_eq!(params.len(), 1);
    }
}
