//! Two-phase analysis pipeline
//!
//! Phase 1 builds the port model and the business-type model independently.
//! Phase 2 hands both, read-only, to the semantic enricher and freezes the
//! result into a `ModelSnapshot`.

pub mod analysis_pipeline;
pub mod facts;

pub use analysis_pipeline::AnalysisPipeline;
pub use facts::ExtractedFacts;
