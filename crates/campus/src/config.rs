//! Query derivation configuration

use serde::Deserialize;

use crate::error::{CampusError, Result};

/// Settings for turning derived fields into query parameters.
///
/// The defaults match the sparse-fieldset convention of the backend:
/// `?fields=a,b.c&expand=b` with snake_case identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Parameter name carrying the sparse fieldset
    pub fields_key: String,

    /// Parameter name carrying the relation expansions
    pub expand_key: String,

    /// Joiner for list-valued parameters
    pub separator: String,

    /// Convert camelCase paths to snake_case
    pub convert_case: bool,

    /// Deepest relation nesting the schema walk will descend into
    pub max_depth: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            fields_key: "fields".to_string(),
            expand_key: "expand".to_string(),
            separator: ",".to_string(),
            convert_case: true,
            max_depth: 32,
        }
    }
}

impl QueryConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Keep identifiers exactly as given.
    pub fn without_case_conversion(mut self) -> Self {
        self.convert_case = false;
        self
    }

    /// Load a config from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Config`] if the document is not valid JSON,
    /// has mistyped keys, or names an empty parameter key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: QueryConfig =
            serde_json::from_str(json).map_err(|e| CampusError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameter keys are usable.
    pub fn validate(&self) -> Result<()> {
        if self.fields_key.is_empty() || self.expand_key.is_empty() {
            return Err(CampusError::Config(
                "`fields_key` and `expand_key` must not be empty".to_string(),
            ));
        }
        if self.fields_key == self.expand_key {
            return Err(CampusError::Config(format!(
                "`fields_key` and `expand_key` are both `{}`",
                self.fields_key
            )));
        }
        Ok(())
    }
}
