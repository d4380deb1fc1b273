/// Port direction resolver port
use crate::features::port_direction::DirectionDecision;

/// Port: classifies a boundary interface by name and namespace.
///
/// Implementations must be stateless and deterministic.
pub trait PortDirectionResolver: Send + Sync {
    fn resolve(&self, simple_name: &str, namespace: &str) -> DirectionDecision;
}
