//! Configuration I/O (YAML loading)
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! preset: conventional
//! overrides:
//!   repository_suffixes: [Repository, Store]
//!   parallel: true
//! ```

use super::classification_config::ClassificationConfig;
use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_namespace_tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_namespace_tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_name_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_name_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_markers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_markers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_markers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_namespace_convention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_namespace_segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_name_convention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_name_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_suffixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}

macro_rules! apply_overrides {
    ($overrides:expr, $config:expr, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = $overrides.$field {
                $config.$field = value;
            }
        )*
    };
}

impl ConfigOverrides {
    fn apply(self, config: &mut ClassificationConfig) {
        apply_overrides!(
            self,
            config,
            [
                inbound_namespace_tokens,
                outbound_namespace_tokens,
                inbound_name_suffixes,
                outbound_name_suffixes,
                aggregate_markers,
                persistence_markers,
                repository_markers,
                repository_suffixes,
                enable_namespace_convention,
                aggregate_namespace_segments,
                enable_name_convention,
                aggregate_name_suffixes,
                identifier_suffixes,
                collection_types,
                parallel,
            ]
        );
    }

    fn snapshot(config: &ClassificationConfig) -> Self {
        let config = config.clone();
        Self {
            inbound_namespace_tokens: Some(config.inbound_namespace_tokens),
            outbound_namespace_tokens: Some(config.outbound_namespace_tokens),
            inbound_name_suffixes: Some(config.inbound_name_suffixes),
            outbound_name_suffixes: Some(config.outbound_name_suffixes),
            aggregate_markers: Some(config.aggregate_markers),
            persistence_markers: Some(config.persistence_markers),
            repository_markers: Some(config.repository_markers),
            repository_suffixes: Some(config.repository_suffixes),
            enable_namespace_convention: Some(config.enable_namespace_convention),
            aggregate_namespace_segments: Some(config.aggregate_namespace_segments),
            enable_name_convention: Some(config.enable_name_convention),
            aggregate_name_suffixes: Some(config.aggregate_name_suffixes),
            identifier_suffixes: Some(config.identifier_suffixes),
            collection_types: Some(config.collection_types),
            parallel: Some(config.parallel),
        }
    }
}

impl ClassificationConfig {
    /// Parse and validate a schema-v1 YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match export.preset {
            Some(name) => Preset::from_str(&name).map_err(|_| ConfigError::UnknownPreset(name))?,
            None => Preset::default(),
        };

        let mut config = Self::from_preset(preset);
        if let Some(overrides) = export.overrides {
            overrides.apply(&mut config);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export every field as an override of the default preset
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: Some(Preset::default().to_string()),
            overrides: Some(ConfigOverrides::snapshot(self)),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
