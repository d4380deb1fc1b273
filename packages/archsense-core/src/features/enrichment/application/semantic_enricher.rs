//! Semantic enricher
//!
//! Step order per pass:
//! 1. Aggregate-root decision for every type (promotion ENTITY → AGGREGATE_ROOT)
//! 2. Aggregate clusters over the promoted model
//! 3. Relationship outcome for every property
//! 4. Inverse properties, cluster roots, attachment

use crate::config::ClassificationConfig;
use crate::domain::{BusinessType, ModelSnapshot, ModelStage, PortModel, TypeModel};
use crate::features::aggregate_classification::{AggregateDecision, AggregateRootClassifier};
use crate::features::diagnostics::{CountingSink, Diagnostic, DiagnosticSink};
use crate::features::enrichment::{EnrichmentReport, PromotedType};
use crate::features::relationships::{
    resolve_inverse, RelationshipClassifier, RelationshipContext, RelationshipOutcome,
};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{info, trace};

/// Orchestrates both classifiers across the full model
#[derive(Debug, Clone)]
pub struct SemanticEnricher {
    config: Arc<ClassificationConfig>,
    aggregates: AggregateRootClassifier,
    relationships: RelationshipClassifier,
}

impl Default for SemanticEnricher {
    fn default() -> Self {
        Self::new(ClassificationConfig::shared_default())
    }
}

impl SemanticEnricher {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        Self {
            aggregates: AggregateRootClassifier::new(Arc::clone(&config)),
            relationships: RelationshipClassifier::new(Arc::clone(&config)),
            config,
        }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// Enrich `model` against the complete port model.
    ///
    /// Returns `model` itself (same `Arc`) when it is already enriched or when
    /// nothing changed.
    pub fn enrich(
        &self,
        model: &Arc<TypeModel>,
        ports: &PortModel,
        sink: &mut dyn DiagnosticSink,
    ) -> Arc<TypeModel> {
        self.enrich_with_report(model, ports, sink).0
    }

    pub fn enrich_with_report(
        &self,
        model: &Arc<TypeModel>,
        ports: &PortModel,
        sink: &mut dyn DiagnosticSink,
    ) -> (Arc<TypeModel>, EnrichmentReport) {
        if model.is_enriched() {
            trace!("enrich: model of {} types already enriched", model.len());
            return (Arc::clone(model), EnrichmentReport::unchanged());
        }

        let mut sink = CountingSink::new(sink);

        // Step 1: aggregate roots
        let decisions = self.classify_aggregates(model, ports, &mut sink);
        let mut promoted = Vec::new();
        let mut staged_types = Vec::with_capacity(model.len());
        for (ty, decision) in model.iter().zip(decisions) {
            if decision.is_root && !ty.is_aggregate_root() {
                staged_types.push(ty.promote_to_aggregate_root());
                promoted.push(PromotedType {
                    qualified_name: ty.qualified_name.clone(),
                    evidence: decision.evidence,
                });
            } else {
                staged_types.push(ty.clone());
            }
        }
        let staged = model.successor(staged_types, ModelStage::Extracted);

        // Step 2: clusters
        let context = RelationshipContext::new(&staged, &self.config.collection_types);

        // Step 3: relationship outcomes
        let outcomes: Vec<Vec<RelationshipOutcome<'_>>> = self.map_types(staged.types(), |ty| {
            ty.properties
                .iter()
                .map(|property| self.relationships.classify(property, ty, &context))
                .collect()
        });
        let targets: Vec<Vec<Option<&str>>> = outcomes
            .iter()
            .map(|outcomes| outcomes.iter().map(RelationshipOutcome::target).collect())
            .collect();

        // Step 4: attach
        let mut changed = !promoted.is_empty();
        let mut relationships_attached = 0;
        let mut enriched_types = Vec::with_capacity(staged.len());
        for (ty, outcomes) in staged.iter().zip(&outcomes) {
            let mut enriched = ty.clone();
            enriched.cluster_root = context
                .clusters()
                .root_of(&ty.qualified_name)
                .map(str::to_string);
            changed |= enriched.cluster_root != ty.cluster_root;

            for (slot, (property, outcome)) in ty.properties.iter().zip(outcomes).enumerate() {
                let RelationshipOutcome::Detected(metadata) = outcome else {
                    continue;
                };
                let mut metadata = metadata.clone();
                if let Some(position) = staged.position(&metadata.target) {
                    let target = &staged.types()[position];
                    if let Some(inverse) =
                        resolve_inverse(&ty.qualified_name, &property.name, target, &targets[position])
                    {
                        metadata = metadata.with_inverse(inverse);
                    }
                }
                enriched.properties[slot] = property.attach_relationship(metadata);
                relationships_attached += 1;
            }
            enriched_types.push(enriched);
        }
        changed |= relationships_attached > 0;

        let report = EnrichmentReport {
            promoted,
            relationships_attached,
            diagnostics: sink.count(),
            changed,
        };
        info!(
            "enrich: {} types, {} promoted, {} relationships, {} diagnostics",
            model.len(),
            report.promoted_count(),
            report.relationships_attached,
            report.diagnostics
        );

        if !changed {
            model.seal();
            return (Arc::clone(model), report);
        }
        let enriched = staged.successor(enriched_types, ModelStage::Enriched);
        (Arc::new(enriched), report)
    }

    /// Enrich the type model of a snapshot.
    ///
    /// Snapshots are frozen after enrichment, so this returns a snapshot
    /// sharing the same models and reports nothing.
    pub fn enrich_snapshot(
        &self,
        snapshot: &ModelSnapshot,
        sink: &mut dyn DiagnosticSink,
    ) -> ModelSnapshot {
        let types = self.enrich(snapshot.type_model(), snapshot.port_model(), sink);
        if Arc::ptr_eq(&types, snapshot.type_model()) {
            snapshot.clone()
        } else {
            snapshot.with_type_model(types)
        }
    }

    /// Per-type aggregate decisions in model order.
    ///
    /// In parallel mode each type reports into its own buffer; buffers are
    /// flushed in model order so the sink sees the sequential order.
    fn classify_aggregates(
        &self,
        model: &TypeModel,
        ports: &PortModel,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<AggregateDecision> {
        if !self.config.parallel {
            return model
                .iter()
                .map(|ty| self.aggregates.classify(ty, &ty.attributes, ports, &mut *sink))
                .collect();
        }

        let results: Vec<(AggregateDecision, Vec<Diagnostic>)> = model
            .types()
            .par_iter()
            .map(|ty| {
                let mut buffer: Vec<Diagnostic> = Vec::new();
                let decision = self.aggregates.classify(ty, &ty.attributes, ports, &mut buffer);
                (decision, buffer)
            })
            .collect();

        results
            .into_iter()
            .map(|(decision, buffer)| {
                for diagnostic in buffer {
                    sink.report(diagnostic);
                }
                decision
            })
            .collect()
    }

    fn map_types<'m, T, F>(&self, types: &'m [BusinessType], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&'m BusinessType) -> T + Sync + Send,
    {
        if self.config.parallel {
            types.par_iter().map(f).collect()
        } else {
            types.iter().map(f).collect()
        }
    }
}
