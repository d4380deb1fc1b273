//! Classification runs once: re-enrichment is an identity operation

mod common;

use archsense_core::{
    AnalysisPipeline, ClassificationConfig, Diagnostic, PortModel, SemanticEnricher, TypeModel,
};
use common::*;
use std::sync::Arc;

#[test]
fn test_enriching_snapshot_again_is_identity() {
    let mut first: Vec<Diagnostic> = Vec::new();
    let snapshot = AnalysisPipeline::default()
        .run(fixture_shop_facts(), &mut first)
        .unwrap();
    assert!(!first.is_empty());

    let mut second: Vec<Diagnostic> = Vec::new();
    let again = SemanticEnricher::default().enrich_snapshot(&snapshot, &mut second);

    assert!(Arc::ptr_eq(snapshot.type_model(), again.type_model()));
    assert!(Arc::ptr_eq(snapshot.port_model(), again.port_model()));
    assert!(second.is_empty(), "no duplicate diagnostics");
}

#[test]
fn test_enriched_model_is_not_reclassified() {
    let facts = fixture_shop_facts();
    let ports = PortModel::new(
        facts
            .ports
            .into_iter()
            .map(|f| f.into_port(archsense_core::PortDirection::Outbound))
            .collect(),
    )
    .unwrap();
    let model = Arc::new(TypeModel::new(facts.types).unwrap());
    let enricher = SemanticEnricher::default();

    let mut first: Vec<Diagnostic> = Vec::new();
    let enriched = enricher.enrich(&model, &ports, &mut first);
    assert!(!Arc::ptr_eq(&model, &enriched));

    let mut second: Vec<Diagnostic> = Vec::new();
    let (again, report) = enricher.enrich_with_report(&enriched, &ports, &mut second);
    assert!(Arc::ptr_eq(&enriched, &again));
    assert!(!report.changed);
    assert!(second.is_empty());
}

#[test]
fn test_unchanged_model_is_reference_equal() {
    let facts = FactsBuilder::new()
        .with_type(value_object("com.x.Money").with_property("amount", named("java.math.BigDecimal")))
        .with_type(entity("com.x.Note").with_property("text", named("java.lang.String")))
        .build();
    let model = Arc::new(TypeModel::new(facts.types).unwrap());

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let (out, report) =
        SemanticEnricher::default().enrich_with_report(&model, &PortModel::empty(), &mut diagnostics);

    assert!(Arc::ptr_eq(&model, &out));
    assert!(!report.changed);
    assert!(out.is_enriched());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_parallel_matches_sequential() {
    let run = |parallel: bool| {
        let config = Arc::new(ClassificationConfig::default().parallel(parallel));
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let snapshot = AnalysisPipeline::new(config)
            .run(fixture_n_entities(300), &mut diagnostics)
            .unwrap();
        (snapshot, diagnostics)
    };

    let (sequential, seq_diagnostics) = run(false);
    let (parallel, par_diagnostics) = run(true);

    assert_eq!(sequential.type_model().types(), parallel.type_model().types());
    assert_eq!(seq_diagnostics, par_diagnostics);
    assert_eq!(seq_diagnostics.len(), 100 + 60);
}
