//! Indexed, immutable models handed between pipeline phases

use super::business_type::BusinessType;
use super::kinds::PortDirection;
use super::port::Port;
use crate::errors::{ModelError, Result};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;

/// Lifecycle stage of a `TypeModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStage {
    /// Straight from extraction, not yet classified
    Extracted,
    /// Produced (or left unchanged) by the semantic enricher; never classified again
    Enriched,
}

/// Business-type model of one compilation
#[derive(Debug, Clone, PartialEq)]
pub struct TypeModel {
    types: Vec<BusinessType>,
    index: FxHashMap<String, usize>,
    stage: ModelStage,
    /// Set once the enricher has seen this model, even if it changed nothing
    sealed: OnceCell<()>,
}

impl TypeModel {
    /// Build an extracted model.
    ///
    /// Fails on duplicate qualified names and on properties whose
    /// `declaring_type` does not name their owner.
    pub fn new(types: Vec<BusinessType>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, ty) in types.iter().enumerate() {
            if index.insert(ty.qualified_name.clone(), position).is_some() {
                return Err(ModelError::DuplicateType {
                    qualified_name: ty.qualified_name.clone(),
                });
            }
            if let Some(property) = ty
                .properties
                .iter()
                .find(|p| p.declaring_type != ty.qualified_name)
            {
                return Err(ModelError::UnknownDeclaringType {
                    property: property.name.clone(),
                    declaring_type: property.declaring_type.clone(),
                    owner: ty.qualified_name.clone(),
                });
            }
        }
        Ok(Self {
            types,
            index,
            stage: ModelStage::Extracted,
            sealed: OnceCell::new(),
        })
    }

    /// Successor model with the same type order (and therefore the same index).
    ///
    /// # Panics
    /// If `types` does not line up with this model's index.
    pub(crate) fn successor(&self, types: Vec<BusinessType>, stage: ModelStage) -> Self {
        assert_eq!(types.len(), self.types.len(), "successor model changed type count");
        debug_assert!(types
            .iter()
            .zip(&self.types)
            .all(|(new, old)| new.qualified_name == old.qualified_name));
        Self {
            types,
            index: self.index.clone(),
            stage,
            sealed: OnceCell::new(),
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&BusinessType> {
        self.index.get(qualified_name).map(|&i| &self.types[i])
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.index.contains_key(qualified_name)
    }

    /// Position of a type in model order
    pub fn position(&self, qualified_name: &str) -> Option<usize> {
        self.index.get(qualified_name).copied()
    }

    pub fn types(&self) -> &[BusinessType] {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = &BusinessType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn stage(&self) -> ModelStage {
        if self.sealed.get().is_some() {
            ModelStage::Enriched
        } else {
            self.stage
        }
    }

    pub fn is_enriched(&self) -> bool {
        self.stage() == ModelStage::Enriched
    }

    /// Record that enrichment ran over this exact instance
    pub(crate) fn seal(&self) {
        let _ = self.sealed.set(());
    }

    pub fn aggregate_roots(&self) -> impl Iterator<Item = &BusinessType> {
        self.types.iter().filter(|t| t.is_aggregate_root())
    }
}

/// Boundary-interface model with decided directions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortModel {
    ports: Vec<Port>,
    index: FxHashMap<String, usize>,
}

impl PortModel {
    pub fn new(ports: Vec<Port>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, port) in ports.iter().enumerate() {
            if index.insert(port.qualified_name.clone(), position).is_some() {
                return Err(ModelError::DuplicatePort {
                    qualified_name: port.qualified_name.clone(),
                });
            }
        }
        Ok(Self { ports, index })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, qualified_name: &str) -> Option<&Port> {
        self.index.get(qualified_name).map(|&i| &self.ports[i])
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn with_direction(&self, direction: PortDirection) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(move |p| p.direction == direction)
    }

    pub fn outbound(&self) -> impl Iterator<Item = &Port> {
        self.with_direction(PortDirection::Outbound)
    }

    pub fn inbound(&self) -> impl Iterator<Item = &Port> {
        self.with_direction(PortDirection::Inbound)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}
