//! Shared models

mod attribute;
pub mod names;
mod provenance;
mod type_ref;

pub use attribute::{Attribute, AttributeIndex};
pub use provenance::Provenance;
pub use type_ref::{TypeRef, TypeShape};

// Attribute arguments are plain JSON values, as produced by extraction
pub use serde_json::Value;
