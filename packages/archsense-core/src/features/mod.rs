//! Feature modules
//!
//! Leaf-first: diagnostics → port_direction → aggregate_classification →
//! relationships → enrichment. Only `enrichment` sees both models.

pub mod aggregate_classification;
pub mod diagnostics;
pub mod enrichment;
pub mod port_direction;
pub mod relationships;
