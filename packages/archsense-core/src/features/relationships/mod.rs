/// Relationships Feature
///
/// Per-property relationship detection: kind, target and whether the
/// reference crosses an aggregate boundary.
///
/// ## Decision order (per property)
/// 1. Already carries relationship metadata → unchanged
/// 2. Element type is a known ENTITY / AGGREGATE_ROOT / VALUE_OBJECT → object reference
/// 3. Element type is an identifier of a known aggregate root → inter-aggregate reference
/// 4. Otherwise → plain value
///
/// ## Architecture
/// - **Domain**: AggregateClusters, ClusterMembership, RelationshipOutcome
/// - **Infrastructure**: cluster builder (petgraph), TypeLookup,
///   RelationshipClassifier, inverse-property resolution
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
