//! Closed classification vocabularies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural kind of a business type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessTypeKind {
    /// Has identity, mutable lifecycle
    Entity,
    /// Compared by value, no identity
    ValueObject,
    /// Entity that is the entry point of a consistency boundary
    AggregateRoot,
    /// Wrapper around an identity value (`OrderId`)
    Identifier,
    /// Closed set of constants
    Enumeration,
    /// Immutable record without domain meaning
    ImmutableData,
    Unknown,
}

impl BusinessTypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "ENTITY",
            Self::ValueObject => "VALUE_OBJECT",
            Self::AggregateRoot => "AGGREGATE_ROOT",
            Self::Identifier => "IDENTIFIER",
            Self::Enumeration => "ENUMERATION",
            Self::ImmutableData => "IMMUTABLE_DATA",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Kinds a property can hold a relationship to (object references)
    pub fn is_relationship_target(&self) -> bool {
        matches!(
            self,
            Self::Entity | Self::AggregateRoot | Self::ValueObject
        )
    }
}

impl fmt::Display for BusinessTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship cardinality / mapping style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    /// Value object stored inline with its owner
    Embedded,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "ONE_TO_ONE",
            Self::OneToMany => "ONE_TO_MANY",
            Self::ManyToOne => "MANY_TO_ONE",
            Self::ManyToMany => "MANY_TO_MANY",
            Self::Embedded => "EMBEDDED",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a boundary interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortDirection {
    /// Exposed to callers (driving)
    Inbound,
    /// Required from infrastructure (driven)
    Outbound,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "INBOUND",
            Self::Outbound => "OUTBOUND",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
