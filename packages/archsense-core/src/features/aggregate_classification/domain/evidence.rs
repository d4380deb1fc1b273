/// Classification evidence models
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of signal behind a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    /// Pre-classified or strong marker attribute
    ExplicitMarker,
    /// Weak persistence marker confirmed by an outbound repository
    RepositoryMatch,
    /// Aggregate package convention
    NamespaceConvention,
    /// Aggregate naming convention
    NameConvention,
    /// Kind cannot be promoted
    NotEligible,
    /// Nothing pointed at a root
    NoSignal,
}

impl EvidenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExplicitMarker => "EXPLICIT_MARKER",
            Self::RepositoryMatch => "REPOSITORY_MATCH",
            Self::NamespaceConvention => "NAMESPACE_CONVENTION",
            Self::NameConvention => "NAME_CONVENTION",
            Self::NotEligible => "NOT_ELIGIBLE",
            Self::NoSignal => "NO_SIGNAL",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal kind plus human-readable rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub kind: EvidenceKind,
    pub rationale: String,
}

impl Evidence {
    pub fn new(kind: EvidenceKind, rationale: impl Into<String>) -> Self {
        Self {
            kind,
            rationale: rationale.into(),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.rationale)
    }
}

/// Outcome of the aggregate-root chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateDecision {
    pub is_root: bool,
    pub evidence: Evidence,
}

impl AggregateDecision {
    pub fn root(kind: EvidenceKind, rationale: impl Into<String>) -> Self {
        Self {
            is_root: true,
            evidence: Evidence::new(kind, rationale),
        }
    }

    pub fn not_root(kind: EvidenceKind, rationale: impl Into<String>) -> Self {
        Self {
            is_root: false,
            evidence: Evidence::new(kind, rationale),
        }
    }

    pub fn kind(&self) -> EvidenceKind {
        self.evidence.kind
    }
}
