//! Error types for archsense-core
//!
//! Errors only arise while building models and loading configuration.
//! Classification itself is total and never fails.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for archsense-core operations
#[derive(Debug, Error)]
pub enum ModelError {
    /// Two business types share a qualified name
    #[error("duplicate business type '{qualified_name}'")]
    DuplicateType { qualified_name: String },

    /// Two boundary interfaces share a qualified name
    #[error("duplicate boundary interface '{qualified_name}'")]
    DuplicatePort { qualified_name: String },

    /// A property's back-reference names a type other than its owner
    #[error("property '{property}' of '{owner}' declares foreign owner '{declaring_type}'")]
    UnknownDeclaringType {
        property: String,
        declaring_type: String,
        owner: String,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for archsense operations
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::UnknownDeclaringType {
            property: "total".to_string(),
            declaring_type: "a.Invoice".to_string(),
            owner: "a.Order".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "property 'total' of 'a.Order' declares foreign owner 'a.Invoice'"
        );

        let err: ModelError = ConfigError::MissingVersion.into();
        assert!(err.to_string().contains("version"));
    }
}
