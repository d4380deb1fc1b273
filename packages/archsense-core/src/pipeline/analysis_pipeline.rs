//! Analysis pipeline: facts → frozen, enriched snapshot

use super::facts::ExtractedFacts;
use crate::config::ClassificationConfig;
use crate::domain::{ModelSnapshot, PortModel, TypeModel};
use crate::errors::Result;
use crate::features::diagnostics::DiagnosticSink;
use crate::features::enrichment::{EnrichmentReport, SemanticEnricher};
use crate::features::port_direction::{resolve_ports, HeuristicDirectionResolver, PortDirectionResolver};
use std::sync::Arc;
use tracing::info;

/// Runs classification exactly once per compilation
pub struct AnalysisPipeline {
    resolver: Box<dyn PortDirectionResolver>,
    enricher: SemanticEnricher,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(ClassificationConfig::shared_default())
    }
}

impl AnalysisPipeline {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        Self {
            resolver: Box::new(HeuristicDirectionResolver::new(Arc::clone(&config))),
            enricher: SemanticEnricher::new(config),
        }
    }

    /// Replace the port-direction heuristic
    pub fn with_resolver(mut self, resolver: Box<dyn PortDirectionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ClassificationConfig {
        self.enricher.config()
    }

    pub fn run(&self, facts: ExtractedFacts, sink: &mut dyn DiagnosticSink) -> Result<ModelSnapshot> {
        Ok(self.run_with_report(facts, sink)?.0)
    }

    pub fn run_with_report(
        &self,
        facts: ExtractedFacts,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(ModelSnapshot, EnrichmentReport)> {
        let ExtractedFacts {
            types,
            ports,
            services,
        } = facts;

        // Phase 1: independent models
        let ports = Arc::new(PortModel::new(resolve_ports(ports, self.resolver.as_ref()))?);
        let types = Arc::new(TypeModel::new(types)?);
        info!(
            "pipeline: {} types, {} ports ({} inbound), {} services",
            types.len(),
            ports.len(),
            ports.inbound().count(),
            services.len()
        );

        // Phase 2: single cross-referencing pass
        let (types, report) = self.enricher.enrich_with_report(&types, &ports, sink);

        Ok((ModelSnapshot::freeze(types, ports, services), report))
    }
}
