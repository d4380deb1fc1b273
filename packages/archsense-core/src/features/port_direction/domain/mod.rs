/// Direction decision models
use crate::domain::PortDirection;
use serde::{Deserialize, Serialize};

/// Which rule decided a port's direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionRule {
    /// Stated explicitly during extraction
    Declared,
    InboundNamespace,
    OutboundNamespace,
    InboundSuffix,
    OutboundSuffix,
    /// No token matched
    Default,
}

/// Direction plus the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionDecision {
    pub direction: PortDirection,
    pub rule: DirectionRule,
}

impl DirectionDecision {
    pub fn new(direction: PortDirection, rule: DirectionRule) -> Self {
        Self { direction, rule }
    }
}
