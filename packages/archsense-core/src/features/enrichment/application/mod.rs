pub mod semantic_enricher;

pub use semantic_enricher::SemanticEnricher;
