/// Aggregate Classification Feature
///
/// Decides, with recorded evidence, whether an ENTITY is an aggregate root.
///
/// ## Evidence chain (first applicable rule wins)
/// 1. Already AGGREGATE_ROOT → yes (explicit marker)
/// 2. Not an ENTITY → no
/// 3. Strong aggregate marker → yes
/// 4. Weak persistence marker + matching outbound repository → yes
///    (weak marker alone: informational notice, continue)
/// 5. Aggregate namespace convention → yes (notice)
/// 6. Aggregate name convention → yes (notice)
/// 7. Otherwise → no, stays ENTITY
///
/// ## Architecture
/// - **Domain**: Evidence, EvidenceKind, AggregateDecision
/// - **Infrastructure**: RepositoryMatcher, AggregateRootClassifier
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
