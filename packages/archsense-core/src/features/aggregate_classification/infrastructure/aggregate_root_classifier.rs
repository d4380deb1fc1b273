//! Aggregate-root classifier
//!
//! The chain is an ordered table of rules. Each rule either decides (`Some`)
//! or passes (`None`); the first decision wins and no later rule runs. When
//! every rule passes the type stays an ENTITY.

use crate::config::ClassificationConfig;
use crate::domain::{BusinessType, BusinessTypeKind, PortModel};
use crate::features::aggregate_classification::{
    AggregateDecision, EvidenceKind, RepositoryMatcher,
};
use crate::features::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::shared::models::names::{ends_with_ignore_case, matching_segment};
use crate::shared::models::AttributeIndex;
use std::sync::Arc;
use tracing::debug;

/// Pre-resolved inputs of one classification call
struct RuleInput<'a> {
    ty: &'a BusinessType,
    attributes: &'a AttributeIndex,
    ports: &'a PortModel,
}

type Rule = fn(&AggregateRootClassifier, &RuleInput<'_>, &mut dyn DiagnosticSink) -> Option<AggregateDecision>;

const RULES: [Rule; 6] = [
    AggregateRootClassifier::pre_classified,
    AggregateRootClassifier::eligibility,
    AggregateRootClassifier::strong_marker,
    AggregateRootClassifier::repository_match,
    AggregateRootClassifier::namespace_convention,
    AggregateRootClassifier::name_convention,
];

#[derive(Debug, Clone)]
pub struct AggregateRootClassifier {
    config: Arc<ClassificationConfig>,
    matcher: RepositoryMatcher,
}

impl AggregateRootClassifier {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        let matcher = RepositoryMatcher::new(Arc::clone(&config));
        Self { config, matcher }
    }

    /// Run the evidence chain for `ty`.
    ///
    /// `attributes` is the type's normalized attribute index and `ports` the
    /// complete boundary-interface model. The only effect is reporting into
    /// `sink`.
    pub fn classify(
        &self,
        ty: &BusinessType,
        attributes: &AttributeIndex,
        ports: &PortModel,
        sink: &mut dyn DiagnosticSink,
    ) -> AggregateDecision {
        let input = RuleInput {
            ty,
            attributes,
            ports,
        };
        let decision = RULES
            .iter()
            .find_map(|rule| rule(self, &input, sink))
            .unwrap_or_else(|| {
                AggregateDecision::not_root(
                    EvidenceKind::NoSignal,
                    format!("no aggregate-root evidence for {}", ty.simple_name()),
                )
            });
        debug!(
            "aggregate {} -> {} ({})",
            ty.qualified_name, decision.is_root, decision.evidence
        );
        decision
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Rules, in priority order
    // ═══════════════════════════════════════════════════════════════════════

    fn pre_classified(
        &self,
        input: &RuleInput<'_>,
        _sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        (input.ty.kind == BusinessTypeKind::AggregateRoot).then(|| {
            AggregateDecision::root(
                EvidenceKind::ExplicitMarker,
                format!("{} is already classified AGGREGATE_ROOT", input.ty.simple_name()),
            )
        })
    }

    fn eligibility(
        &self,
        input: &RuleInput<'_>,
        _sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        (input.ty.kind != BusinessTypeKind::Entity).then(|| {
            AggregateDecision::not_root(
                EvidenceKind::NotEligible,
                format!(
                    "{} is {}; only ENTITY can be promoted",
                    input.ty.simple_name(),
                    input.ty.kind
                ),
            )
        })
    }

    fn strong_marker(
        &self,
        input: &RuleInput<'_>,
        _sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        input
            .attributes
            .find_any(&self.config.aggregate_markers)
            .map(|marker| {
                AggregateDecision::root(
                    EvidenceKind::ExplicitMarker,
                    format!("marked @{}", marker.simple_name()),
                )
            })
    }

    fn repository_match(
        &self,
        input: &RuleInput<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        let marker = input.attributes.find_any(&self.config.persistence_markers)?;
        match self.matcher.find_match(input.ty, input.ports) {
            Some(port) => Some(AggregateDecision::root(
                EvidenceKind::RepositoryMatch,
                format!(
                    "@{} confirmed by outbound port {}",
                    marker.simple_name(),
                    port.simple_name()
                ),
            )),
            None => {
                sink.report(
                    Diagnostic::new(
                        DiagnosticCode::WeakSignalIgnored,
                        format!(
                            "weak signal ignored: @{} on {} has no matching outbound repository",
                            marker.simple_name(),
                            input.ty.simple_name()
                        ),
                    )
                    .with_qualified_name(&input.ty.qualified_name)
                    .with_location(input.ty.provenance.clone()),
                );
                None
            }
        }
    }

    fn namespace_convention(
        &self,
        input: &RuleInput<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        if !self.config.enable_namespace_convention {
            return None;
        }
        let namespace = input.ty.namespace();
        let segment = self
            .config
            .aggregate_namespace_segments
            .iter()
            .find_map(|token| matching_segment(namespace, token))?;
        Some(self.convention(
            input,
            sink,
            EvidenceKind::NamespaceConvention,
            format!("namespace {} contains '{}'", namespace, segment),
        ))
    }

    fn name_convention(
        &self,
        input: &RuleInput<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<AggregateDecision> {
        if !self.config.enable_name_convention {
            return None;
        }
        let name = input.ty.simple_name();
        let suffix = self
            .config
            .aggregate_name_suffixes
            .iter()
            .find(|suffix| ends_with_ignore_case(name, suffix) && name.len() > suffix.len())?;
        Some(self.convention(
            input,
            sink,
            EvidenceKind::NameConvention,
            format!("name {} ends with '{}'", name, suffix),
        ))
    }

    fn convention(
        &self,
        input: &RuleInput<'_>,
        sink: &mut dyn DiagnosticSink,
        kind: EvidenceKind,
        rationale: String,
    ) -> AggregateDecision {
        sink.report(
            Diagnostic::new(
                DiagnosticCode::ConventionTriggered,
                format!(
                    "convention triggered: {} classified AGGREGATE_ROOT ({})",
                    input.ty.simple_name(),
                    rationale
                ),
            )
            .with_qualified_name(&input.ty.qualified_name)
            .with_location(input.ty.provenance.clone()),
        );
        AggregateDecision::root(kind, rationale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::domain::{PortDirection, PortFact};
    use crate::shared::models::Attribute;

    const STRONG: &str = "org.jmolecules.ddd.annotation.AggregateRoot";
    const WEAK: &str = "jakarta.persistence.Entity";

    fn classifier() -> AggregateRootClassifier {
        AggregateRootClassifier::new(ClassificationConfig::shared_default())
    }

    fn ports(names: &[&str]) -> PortModel {
        PortModel::new(
            names
                .iter()
                .map(|n| PortFact::new(*n).into_port(PortDirection::Outbound))
                .collect(),
        )
        .unwrap()
    }

    fn run(
        classifier: &AggregateRootClassifier,
        ty: &BusinessType,
        ports: &PortModel,
    ) -> (AggregateDecision, Vec<Diagnostic>) {
        let mut sink = Vec::new();
        let decision = classifier.classify(ty, &ty.attributes, ports, &mut sink);
        (decision, sink)
    }

    #[test]
    fn test_pre_classified_root_wins_over_everything() {
        let ty = BusinessType::new("com.example.misc.Order", BusinessTypeKind::AggregateRoot)
            .with_attribute(Attribute::new(WEAK));
        let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::ExplicitMarker);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_entity_never_promoted() {
        for kind in [
            BusinessTypeKind::ValueObject,
            BusinessTypeKind::Identifier,
            BusinessTypeKind::Enumeration,
            BusinessTypeKind::ImmutableData,
            BusinessTypeKind::Unknown,
        ] {
            let ty = BusinessType::new("com.example.aggregates.MoneyAggregate", kind)
                .with_attribute(Attribute::new(STRONG));
            let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
            assert!(!decision.is_root, "{kind} must not be promoted");
            assert_eq!(decision.kind(), EvidenceKind::NotEligible);
            assert!(diagnostics.is_empty());
        }
    }

    #[test]
    fn test_strong_marker() {
        let ty = BusinessType::new("com.example.Order", BusinessTypeKind::Entity)
            .with_attribute(Attribute::new(STRONG));
        let (decision, _) = run(&classifier(), &ty, &PortModel::empty());
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::ExplicitMarker);
    }

    #[test]
    fn test_weak_marker_with_repository() {
        let ty = BusinessType::new("com.example.Order", BusinessTypeKind::Entity)
            .with_attribute(Attribute::new(WEAK));
        let (decision, diagnostics) =
            run(&classifier(), &ty, &ports(&["com.example.ports.OrderRepository"]));
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::RepositoryMatch);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_weak_marker_without_repository() {
        let ty = BusinessType::new("com.example.Order", BusinessTypeKind::Entity)
            .with_attribute(Attribute::new(WEAK));
        let (decision, diagnostics) =
            run(&classifier(), &ty, &ports(&["com.example.ports.CustomerRepository"]));
        assert!(!decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::NoSignal);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::WeakSignalIgnored);
        assert_eq!(diagnostics[0].qualified_name.as_deref(), Some("com.example.Order"));
    }

    #[test]
    fn test_weak_marker_falls_through_to_convention() {
        let ty = BusinessType::new("com.example.aggregates.Invoice", BusinessTypeKind::Entity)
            .with_attribute(Attribute::new(WEAK));
        let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::NamespaceConvention);
        let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(
            codes,
            vec![
                DiagnosticCode::WeakSignalIgnored,
                DiagnosticCode::ConventionTriggered
            ]
        );
    }

    #[test]
    fn test_namespace_convention() {
        let ty = BusinessType::new("com.example.aggregates.billing.Invoice", BusinessTypeKind::Entity);
        let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::NamespaceConvention);
        assert_eq!(
            decision.evidence.rationale,
            "namespace com.example.aggregates.billing contains 'aggregates'"
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::ConventionTriggered);
        assert!(diagnostics[0].message.ends_with("contains 'aggregates')"));
    }

    #[test]
    fn test_name_convention() {
        let ty = BusinessType::new("com.example.billing.InvoiceAggregate", BusinessTypeKind::Entity);
        let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
        assert!(decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::NameConvention);
        assert_eq!(diagnostics.len(), 1);

        // A type named exactly like the suffix is not a convention hit
        let ty = BusinessType::new("com.example.billing.Aggregate", BusinessTypeKind::Entity);
        let (decision, _) = run(&classifier(), &ty, &PortModel::empty());
        assert!(!decision.is_root);
    }

    #[test]
    fn test_strict_preset_ignores_conventions() {
        let strict =
            AggregateRootClassifier::new(Arc::new(ClassificationConfig::from_preset(Preset::Strict)));
        let ty = BusinessType::new("com.example.aggregates.InvoiceAggregate", BusinessTypeKind::Entity);
        let (decision, diagnostics) = run(&strict, &ty, &PortModel::empty());
        assert!(!decision.is_root);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_plain_entity_stays_entity() {
        let ty = BusinessType::new("com.example.billing.LineItem", BusinessTypeKind::Entity);
        let (decision, diagnostics) = run(&classifier(), &ty, &PortModel::empty());
        assert!(!decision.is_root);
        assert_eq!(decision.kind(), EvidenceKind::NoSignal);
        assert!(diagnostics.is_empty());
    }
}
