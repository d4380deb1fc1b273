pub mod cluster_builder;
pub mod context;
pub mod inverse;
pub mod relationship_classifier;
pub mod type_lookup;

pub use cluster_builder::build_clusters;
pub use context::RelationshipContext;
pub use inverse::resolve_inverse;
pub use relationship_classifier::RelationshipClassifier;
pub use type_lookup::TypeLookup;
