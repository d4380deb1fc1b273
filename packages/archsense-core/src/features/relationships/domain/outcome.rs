//! Result of classifying one property

use crate::domain::RelationshipMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipOutcome<'p> {
    /// Metadata was already attached; it is kept as is
    Existing(&'p RelationshipMetadata),
    /// Newly detected relationship (inverse not yet resolved)
    Detected(RelationshipMetadata),
    /// Plain value
    Plain,
}

impl RelationshipOutcome<'_> {
    /// Qualified name of the referenced type, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Existing(metadata) => Some(metadata.target.as_str()),
            Self::Detected(metadata) => Some(metadata.target.as_str()),
            Self::Plain => None,
        }
    }
}
