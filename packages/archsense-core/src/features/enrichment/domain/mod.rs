//! Enrichment outcome summary

use crate::features::aggregate_classification::Evidence;
use serde::Serialize;

/// A type promoted ENTITY → AGGREGATE_ROOT during the pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotedType {
    pub qualified_name: String,
    pub evidence: Evidence,
}

/// What one enrichment pass did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    pub promoted: Vec<PromotedType>,
    pub relationships_attached: usize,
    pub diagnostics: usize,
    /// `false` means the input model was returned as is
    pub changed: bool,
}

impl EnrichmentReport {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn promoted_count(&self) -> usize {
        self.promoted.len()
    }
}
