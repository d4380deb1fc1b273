//! Token tables driving every classification heuristic

use super::preset::Preset;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static DEFAULT_CONFIG: Lazy<Arc<ClassificationConfig>> =
    Lazy::new(|| Arc::new(ClassificationConfig::from_preset(Preset::default())));

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Classification configuration
///
/// Name and namespace tokens compare case-insensitively. Attribute and
/// collection-type names are qualified and compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Namespace segments marking an inbound port
    pub inbound_namespace_tokens: Vec<String>,
    /// Namespace segments marking an outbound port
    pub outbound_namespace_tokens: Vec<String>,
    /// Simple-name suffixes marking an inbound port
    pub inbound_name_suffixes: Vec<String>,
    /// Simple-name suffixes marking an outbound port
    pub outbound_name_suffixes: Vec<String>,

    /// Strong aggregate-root attributes
    pub aggregate_markers: Vec<String>,
    /// Weak persistence attributes (need a repository match to count)
    pub persistence_markers: Vec<String>,
    /// Attributes marking an interface as a repository
    pub repository_markers: Vec<String>,
    /// Repository naming (`<Type><suffix>`)
    pub repository_suffixes: Vec<String>,

    pub enable_namespace_convention: bool,
    /// Namespace segments marking aggregate packages (any segment, plural allowed)
    pub aggregate_namespace_segments: Vec<String>,
    pub enable_name_convention: bool,
    /// Simple-name suffixes of aggregate roots
    pub aggregate_name_suffixes: Vec<String>,

    /// Simple-name suffixes of identifier types (case-sensitive)
    pub identifier_suffixes: Vec<String>,
    /// Qualified names of collection-shaped types
    pub collection_types: Vec<String>,

    /// Classify independent types on the rayon pool
    pub parallel: bool,
}

impl ClassificationConfig {
    /// Complete configuration for `preset`
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self {
            inbound_namespace_tokens: tokens(&[
                "inbound",
                "driving",
                "primary",
                "api",
                "usecase",
                "application",
            ]),
            outbound_namespace_tokens: tokens(&["outbound", "driven", "secondary", "spi"]),
            inbound_name_suffixes: tokens(&[
                "UseCase",
                "CommandHandler",
                "Command",
                "QueryHandler",
                "Query",
                "Api",
                "Facade",
                "Service",
            ]),
            outbound_name_suffixes: tokens(&[
                "Repository",
                "Gateway",
                "Client",
                "EventPublisher",
                "Publisher",
                "Provider",
                "Adapter",
            ]),
            aggregate_markers: tokens(&[
                "org.jmolecules.ddd.annotation.AggregateRoot",
                "org.jmolecules.ddd.types.AggregateRoot",
            ]),
            persistence_markers: tokens(&[
                "jakarta.persistence.Entity",
                "javax.persistence.Entity",
                "org.springframework.data.mongodb.core.mapping.Document",
            ]),
            repository_markers: tokens(&[
                "org.jmolecules.ddd.annotation.Repository",
                "org.springframework.stereotype.Repository",
            ]),
            repository_suffixes: tokens(&["Repository"]),
            enable_namespace_convention: true,
            aggregate_namespace_segments: tokens(&["aggregate", "aggregates"]),
            enable_name_convention: true,
            aggregate_name_suffixes: tokens(&["AggregateRoot", "Aggregate"]),
            identifier_suffixes: tokens(&["Id", "ID", "Identifier"]),
            collection_types: tokens(&[
                "java.util.List",
                "java.util.Set",
                "java.util.SortedSet",
                "java.util.Collection",
                "java.util.Queue",
                "java.util.Deque",
                "java.util.Map",
                "java.lang.Iterable",
                "kotlin.collections.List",
                "kotlin.collections.MutableList",
                "kotlin.collections.Set",
                "kotlin.collections.MutableSet",
                "kotlin.collections.Collection",
            ]),
            parallel: false,
        };

        match preset {
            Preset::Strict => {
                config.enable_namespace_convention = false;
                config.enable_name_convention = false;
            }
            Preset::Conventional => {}
            Preset::Permissive => {
                config.repository_suffixes.extend(tokens(&["Repo", "Store"]));
            }
        }
        config
    }

    /// Process-wide default (Conventional), shared without copying
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_CONFIG)
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn with_aggregate_marker(mut self, attribute: impl Into<String>) -> Self {
        self.aggregate_markers.push(attribute.into());
        self
    }

    pub fn conventions(mut self, namespace: bool, name: bool) -> Self {
        self.enable_namespace_convention = namespace;
        self.enable_name_convention = name;
        self
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}
