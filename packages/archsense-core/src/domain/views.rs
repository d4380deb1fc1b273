//! Read-only accessor views over a frozen snapshot
//!
//! Views only project fields that enrichment already decided. Nothing here
//! runs a heuristic, so downstream generators cannot trigger re-classification.

use super::business_type::{BusinessType, Identity, Property, RelationshipMetadata};
use super::kinds::{BusinessTypeKind, PortDirection};
use super::model::PortModel;
use super::port::{ApplicationService, OperationSignature, Port};
use crate::shared::models::{AttributeIndex, Provenance, TypeRef};

/// View of one business type
#[derive(Debug, Clone, Copy)]
pub struct TypeView<'a> {
    ty: &'a BusinessType,
}

impl<'a> TypeView<'a> {
    pub(crate) fn new(ty: &'a BusinessType) -> Self {
        Self { ty }
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.ty.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        self.ty.simple_name()
    }

    pub fn namespace(&self) -> &'a str {
        self.ty.namespace()
    }

    pub fn kind(&self) -> BusinessTypeKind {
        self.ty.kind
    }

    pub fn is_aggregate_root(&self) -> bool {
        self.ty.is_aggregate_root()
    }

    /// Root of the aggregate cluster containing this type, if any
    pub fn aggregate_root(&self) -> Option<&'a str> {
        self.ty.cluster_root.as_deref()
    }

    pub fn identity(&self) -> Option<&'a Identity> {
        self.ty.identity.as_ref()
    }

    pub fn is_immutable(&self) -> bool {
        self.ty.immutable
    }

    pub fn supertype(&self) -> Option<&'a TypeRef> {
        self.ty.supertype.as_ref()
    }

    pub fn interfaces(&self) -> &'a [TypeRef] {
        &self.ty.interfaces
    }

    pub fn permitted_subtypes(&self) -> &'a [String] {
        &self.ty.permitted_subtypes
    }

    pub fn enum_constants(&self) -> &'a [String] {
        &self.ty.enum_constants
    }

    pub fn attributes(&self) -> &'a AttributeIndex {
        &self.ty.attributes
    }

    pub fn provenance(&self) -> Option<&'a Provenance> {
        self.ty.provenance.as_ref()
    }

    pub fn properties(&self) -> impl Iterator<Item = PropertyView<'a>> + 'a {
        self.ty.properties.iter().map(PropertyView::new)
    }

    pub fn property(&self, name: &str) -> Option<PropertyView<'a>> {
        self.ty.property(name).map(PropertyView::new)
    }

    /// Properties carrying relationship metadata, in declaration order
    pub fn relationships(&self) -> impl Iterator<Item = PropertyView<'a>> + 'a {
        self.properties().filter(|p| p.relationship().is_some())
    }
}

/// View of one property
#[derive(Debug, Clone, Copy)]
pub struct PropertyView<'a> {
    property: &'a Property,
}

impl<'a> PropertyView<'a> {
    fn new(property: &'a Property) -> Self {
        Self { property }
    }

    pub fn name(&self) -> &'a str {
        &self.property.name
    }

    pub fn type_ref(&self) -> &'a TypeRef {
        &self.property.type_ref
    }

    pub fn declaring_type(&self) -> &'a str {
        &self.property.declaring_type
    }

    pub fn is_identity(&self) -> bool {
        self.property.identity
    }

    pub fn is_immutable(&self) -> bool {
        self.property.immutable
    }

    pub fn attributes(&self) -> &'a AttributeIndex {
        &self.property.attributes
    }

    pub fn relationship(&self) -> Option<&'a RelationshipMetadata> {
        self.property.relationship.as_ref()
    }

    pub fn is_inter_aggregate(&self) -> bool {
        self.relationship().is_some_and(|r| r.inter_aggregate)
    }
}

/// View of one boundary interface
#[derive(Debug, Clone, Copy)]
pub struct PortView<'a> {
    port: &'a Port,
}

impl<'a> PortView<'a> {
    pub(crate) fn new(port: &'a Port) -> Self {
        Self { port }
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.port.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        self.port.simple_name()
    }

    pub fn namespace(&self) -> &'a str {
        self.port.namespace()
    }

    pub fn direction(&self) -> PortDirection {
        self.port.direction
    }

    pub fn operations(&self) -> &'a [OperationSignature] {
        &self.port.operations
    }

    pub fn extends(&self) -> &'a [TypeRef] {
        &self.port.extends
    }

    pub fn attributes(&self) -> &'a AttributeIndex {
        &self.port.attributes
    }
}

/// View of one application service, with port names resolved
#[derive(Debug, Clone, Copy)]
pub struct ServiceView<'a> {
    service: &'a ApplicationService,
    ports: &'a PortModel,
}

impl<'a> ServiceView<'a> {
    pub(crate) fn new(service: &'a ApplicationService, ports: &'a PortModel) -> Self {
        Self { service, ports }
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.service.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        self.service.simple_name()
    }

    /// Implemented ports known to the model (unknown names are skipped)
    pub fn implemented_ports(&self) -> impl Iterator<Item = PortView<'a>> + 'a {
        let ports = self.ports;
        self.service
            .implemented_ports
            .iter()
            .filter_map(move |name| ports.get(name).map(PortView::new))
    }

    /// Required ports known to the model (unknown names are skipped)
    pub fn required_ports(&self) -> impl Iterator<Item = PortView<'a>> + 'a {
        let ports = self.ports;
        self.service
            .required_ports
            .iter()
            .filter_map(move |name| ports.get(name).map(PortView::new))
    }

    pub fn implements(&self, port: &str) -> bool {
        self.service.implemented_ports.iter().any(|p| p == port)
    }
}
