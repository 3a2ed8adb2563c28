//! Error types for campus adapters
//!
//! The core operations (membership toggling, query derivation) are total and
//! never fail. Errors only come from the adapters around them: converting a
//! schema document, loading configuration, or looking up a scoped context.

use thiserror::Error;

/// Main error type for campus operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CampusError {
    /// A schema document could not be converted into a descriptor
    #[error("Schema error at `{path}`: {message}")]
    Schema {
        /// Dotted path of the offending node (empty for the root)
        path: String,
        /// What was wrong with it
        message: String,
    },

    /// A context value was requested outside of any scope providing it
    #[error("Context `{name}` used outside of a scope that provides it")]
    MissingContext {
        /// Name of the requested context
        name: String,
    },

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl CampusError {
    /// Build a schema error for the node at `path`.
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        CampusError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for campus operations
pub type Result<T> = std::result::Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_display() {
        let err = CampusError::MissingContext {
            name: "filters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Context `filters` used outside of a scope that provides it"
        );
    }

    #[test]
    fn test_schema_error_display() {
        let err = CampusError::schema("address.city", "expected an object");
        assert_eq!(
            err.to_string(),
            "Schema error at `address.city`: expected an object"
        );
    }
}
