//! Boundary interfaces (ports) and application services

use super::kinds::PortDirection;
use crate::shared::models::{names, AttributeIndex, Provenance, TypeRef};
use serde::{Deserialize, Serialize};

/// Operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

/// Operation signature declared on a port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSignature {
    pub name: String,
    /// `None` for void operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl OperationSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
        }
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, type_ref));
        self
    }

    /// Return type followed by parameter types
    pub fn type_refs(&self) -> impl Iterator<Item = &TypeRef> {
        self.return_type
            .iter()
            .chain(self.parameters.iter().map(|p| &p.type_ref))
    }
}

/// Boundary interface as extracted, before its direction is decided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortFact {
    pub qualified_name: String,
    #[serde(default)]
    pub operations: Vec<OperationSignature>,
    /// Super-interfaces (`CrudRepository<Order, OrderId>`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "AttributeIndex::is_empty")]
    pub attributes: AttributeIndex,
    /// Direction stated explicitly by a marker during extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_direction: Option<PortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl PortFact {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            operations: Vec::new(),
            extends: Vec::new(),
            attributes: AttributeIndex::new(),
            declared_direction: None,
            provenance: None,
        }
    }

    pub fn with_operation(mut self, operation: OperationSignature) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn extending(mut self, supertype: TypeRef) -> Self {
        self.extends.push(supertype);
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeIndex) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn declared(mut self, direction: PortDirection) -> Self {
        self.declared_direction = Some(direction);
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.qualified_name)
    }

    pub fn namespace(&self) -> &str {
        names::namespace_of(&self.qualified_name)
    }

    /// Fix the direction; it is never revisited afterwards
    pub fn into_port(self, direction: PortDirection) -> Port {
        Port {
            qualified_name: self.qualified_name,
            direction,
            operations: self.operations,
            extends: self.extends,
            attributes: self.attributes,
            provenance: self.provenance,
        }
    }
}

/// Boundary interface with its decided direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub qualified_name: String,
    pub direction: PortDirection,
    #[serde(default)]
    pub operations: Vec<OperationSignature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "AttributeIndex::is_empty")]
    pub attributes: AttributeIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl Port {
    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.qualified_name)
    }

    pub fn namespace(&self) -> &str {
        names::namespace_of(&self.qualified_name)
    }

    pub fn is_outbound(&self) -> bool {
        self.direction == PortDirection::Outbound
    }

    pub fn is_inbound(&self) -> bool {
        self.direction == PortDirection::Inbound
    }

    /// Whether `qualified_name` appears in an operation signature or as a
    /// super-interface type argument, at any nesting depth.
    pub fn manages(&self, qualified_name: &str) -> bool {
        let in_operations = self
            .operations
            .iter()
            .flat_map(|op| op.type_refs())
            .flat_map(|t| t.walk())
            .any(|t| t.qualified_name == qualified_name);
        in_operations
            || self
                .extends
                .iter()
                .flat_map(|t| t.type_arguments.iter())
                .flat_map(|t| t.walk())
                .any(|t| t.qualified_name == qualified_name)
    }
}

/// Application service (use-case implementation) wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationService {
    pub qualified_name: String,
    /// Inbound ports this service implements
    #[serde(default)]
    pub implemented_ports: Vec<String>,
    /// Outbound ports this service depends on
    #[serde(default)]
    pub required_ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl ApplicationService {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            implemented_ports: Vec::new(),
            required_ports: Vec::new(),
            provenance: None,
        }
    }

    pub fn implementing(mut self, port: impl Into<String>) -> Self {
        self.implemented_ports.push(port.into());
        self
    }

    pub fn requiring(mut self, port: impl Into<String>) -> Self {
        self.required_ports.push(port.into());
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.qualified_name)
    }
}
