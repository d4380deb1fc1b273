pub mod aggregate_root_classifier;
pub mod repository_match;

pub use aggregate_root_classifier::AggregateRootClassifier;
pub use repository_match::RepositoryMatcher;
