//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: strict, conventional, permissive")]
    UnknownPreset(String),

    /// Required token list is empty
    #[error("Token list '{field}' must not be empty")]
    EmptyTokenList { field: String },

    /// Malformed token
    #[error("Invalid token {token:?} in '{field}': {reason}")]
    InvalidToken {
        field: String,
        token: String,
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 3,
            supported: vec![1],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported configuration version 3. Supported versions: 1"
        );
    }
}
