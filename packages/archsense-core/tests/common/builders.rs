//! Test data builders

use archsense_core::{
    ApplicationService, Attribute, BusinessType, BusinessTypeKind, ExtractedFacts, PortFact,
    TypeRef,
};

pub const STRONG_MARKER: &str = "org.jmolecules.ddd.annotation.AggregateRoot";
pub const WEAK_MARKER: &str = "jakarta.persistence.Entity";

/// Builder for ExtractedFacts
#[derive(Debug, Default)]
pub struct FactsBuilder {
    types: Vec<BusinessType>,
    ports: Vec<PortFact>,
    services: Vec<ApplicationService>,
}

impl FactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, ty: BusinessType) -> Self {
        self.types.push(ty);
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = BusinessType>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn with_port(mut self, qualified_name: &str) -> Self {
        self.ports.push(PortFact::new(qualified_name));
        self
    }

    pub fn with_port_fact(mut self, port: PortFact) -> Self {
        self.ports.push(port);
        self
    }

    pub fn with_service(mut self, service: ApplicationService) -> Self {
        self.services.push(service);
        self
    }

    pub fn build(self) -> ExtractedFacts {
        ExtractedFacts::new(self.types, self.ports, self.services)
    }
}

pub fn entity(qualified_name: &str) -> BusinessType {
    BusinessType::new(qualified_name, BusinessTypeKind::Entity)
}

pub fn root(qualified_name: &str) -> BusinessType {
    BusinessType::new(qualified_name, BusinessTypeKind::AggregateRoot)
}

pub fn value_object(qualified_name: &str) -> BusinessType {
    BusinessType::new(qualified_name, BusinessTypeKind::ValueObject).immutable()
}

pub fn identifier(qualified_name: &str) -> BusinessType {
    BusinessType::new(qualified_name, BusinessTypeKind::Identifier).immutable()
}

pub fn marked(ty: BusinessType, marker: &str) -> BusinessType {
    ty.with_attribute(Attribute::new(marker))
}

pub fn named(qualified_name: &str) -> TypeRef {
    TypeRef::named(qualified_name)
}

pub fn list_of(qualified_name: &str) -> TypeRef {
    TypeRef::generic("java.util.List", vec![TypeRef::named(qualified_name)])
}

pub fn set_of(qualified_name: &str) -> TypeRef {
    TypeRef::generic("java.util.Set", vec![TypeRef::named(qualified_name)])
}
