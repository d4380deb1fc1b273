//! Token-based direction heuristic

use crate::config::ClassificationConfig;
use crate::domain::PortDirection;
use crate::features::port_direction::{DirectionDecision, DirectionRule, PortDirectionResolver};
use crate::shared::models::names::{ends_with_ignore_case, namespace_has_token};
use std::sync::Arc;

/// Resolves direction from configured namespace tokens and name suffixes.
///
/// Ambiguity resolves to OUTBOUND: infrastructure generation is the
/// dominant consumer.
#[derive(Debug, Clone)]
pub struct HeuristicDirectionResolver {
    config: Arc<ClassificationConfig>,
}

impl HeuristicDirectionResolver {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        Self { config }
    }

    fn namespace_matches(namespace: &str, tokens: &[String]) -> bool {
        tokens.iter().any(|t| namespace_has_token(namespace, t))
    }

    fn suffix_matches(simple_name: &str, suffixes: &[String]) -> bool {
        suffixes.iter().any(|s| ends_with_ignore_case(simple_name, s))
    }
}

impl Default for HeuristicDirectionResolver {
    fn default() -> Self {
        Self::new(ClassificationConfig::shared_default())
    }
}

impl PortDirectionResolver for HeuristicDirectionResolver {
    fn resolve(&self, simple_name: &str, namespace: &str) -> DirectionDecision {
        let config = &self.config;
        let (direction, rule) =
            if Self::namespace_matches(namespace, &config.inbound_namespace_tokens) {
                (PortDirection::Inbound, DirectionRule::InboundNamespace)
            } else if Self::namespace_matches(namespace, &config.outbound_namespace_tokens) {
                (PortDirection::Outbound, DirectionRule::OutboundNamespace)
            } else if Self::suffix_matches(simple_name, &config.inbound_name_suffixes) {
                (PortDirection::Inbound, DirectionRule::InboundSuffix)
            } else if Self::suffix_matches(simple_name, &config.outbound_name_suffixes) {
                (PortDirection::Outbound, DirectionRule::OutboundSuffix)
            } else {
                (PortDirection::Outbound, DirectionRule::Default)
            };
        DirectionDecision::new(direction, rule)
    }
}
