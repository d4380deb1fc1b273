/// Enrichment Feature
///
/// The single cross-referencing pass over the business-type model and the
/// port model. Runs the aggregate-root chain once per type, then the
/// relationship classifier once per property.
///
/// ## Identity preservation
/// - An already enriched model is returned as the same `Arc` without work
/// - A pass that changes nothing returns the input `Arc` and seals it
///
/// ## Architecture
/// - **Domain**: EnrichmentReport, PromotedType
/// - **Application**: SemanticEnricher
pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
