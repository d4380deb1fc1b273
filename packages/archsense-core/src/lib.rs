/*
 * Archsense Core - Architectural Semantic Classification
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (TypeRef, Attribute, Provenance)
 * - domain/      : Semantic model (business types, ports, snapshot, views)
 * - features/    : Vertical slices (port_direction → aggregate_classification → relationships → enrichment)
 * - pipeline/    : Two-phase orchestration (facts → enriched snapshot)
 * - config/      : Presets, YAML schema, validation
 *
 * Classification runs exactly once per compilation. Downstream consumers only
 * ever see the frozen snapshot through read-only views.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod domain;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{ClassificationConfig, ConfigError, Preset, Validatable};
pub use domain::{
    ApplicationService, BusinessType, BusinessTypeKind, ModelSnapshot, ModelStage, Port,
    PortDirection, PortFact, PortModel, Property, RelationKind, RelationshipMetadata, TypeModel,
};
pub use errors::{ModelError, Result};
pub use features::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity, TracingSink};
pub use features::enrichment::{EnrichmentReport, SemanticEnricher};
pub use pipeline::{AnalysisPipeline, ExtractedFacts};
pub use shared::models::{Attribute, AttributeIndex, Provenance, TypeRef};
