//! Configuration validation

use super::classification_config::ClassificationConfig;
use super::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

fn require_non_empty(field: &str, values: &[String]) -> ConfigResult<()> {
    if values.is_empty() {
        return Err(ConfigError::EmptyTokenList {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn check_tokens(field: &str, values: &[String]) -> ConfigResult<()> {
    for token in values {
        let reason = if token.trim().is_empty() {
            "blank token"
        } else if token.chars().any(char::is_whitespace) {
            "tokens cannot contain whitespace"
        } else {
            continue;
        };
        return Err(ConfigError::InvalidToken {
            field: field.to_string(),
            token: token.clone(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

impl Validatable for ClassificationConfig {
    fn validate(&self) -> ConfigResult<()> {
        let lists: [(&str, &[String]); 12] = [
            ("inbound_namespace_tokens", &self.inbound_namespace_tokens),
            ("outbound_namespace_tokens", &self.outbound_namespace_tokens),
            ("inbound_name_suffixes", &self.inbound_name_suffixes),
            ("outbound_name_suffixes", &self.outbound_name_suffixes),
            ("aggregate_markers", &self.aggregate_markers),
            ("persistence_markers", &self.persistence_markers),
            ("repository_markers", &self.repository_markers),
            ("repository_suffixes", &self.repository_suffixes),
            ("aggregate_namespace_segments", &self.aggregate_namespace_segments),
            ("aggregate_name_suffixes", &self.aggregate_name_suffixes),
            ("identifier_suffixes", &self.identifier_suffixes),
            ("collection_types", &self.collection_types),
        ];
        for (field, values) in lists {
            check_tokens(field, values)?;
        }

        require_non_empty("repository_suffixes", &self.repository_suffixes)?;
        require_non_empty("identifier_suffixes", &self.identifier_suffixes)?;
        if self.enable_namespace_convention {
            require_non_empty(
                "aggregate_namespace_segments",
                &self.aggregate_namespace_segments,
            )?;
        }
        if self.enable_name_convention {
            require_non_empty("aggregate_name_suffixes", &self.aggregate_name_suffixes)?;
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ClassificationConfig"
    }
}
