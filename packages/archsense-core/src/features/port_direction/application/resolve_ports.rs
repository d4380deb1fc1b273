//! Port facts → ports with decided directions

use crate::domain::{Port, PortFact};
use crate::features::port_direction::{DirectionDecision, DirectionRule, PortDirectionResolver};
use tracing::debug;

/// Decide every port's direction exactly once.
///
/// A direction declared during extraction wins and the heuristic is not
/// consulted for that port.
pub fn resolve_ports(facts: Vec<PortFact>, resolver: &dyn PortDirectionResolver) -> Vec<Port> {
    facts
        .into_iter()
        .map(|fact| {
            let decision = match fact.declared_direction {
                Some(direction) => DirectionDecision::new(direction, DirectionRule::Declared),
                None => resolver.resolve(fact.simple_name(), fact.namespace()),
            };
            debug!(
                "port {} -> {} ({:?})",
                fact.qualified_name, decision.direction, decision.rule
            );
            fact.into_port(decision.direction)
        })
        .collect()
}
