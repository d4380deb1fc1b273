//! Business types and their properties

use super::kinds::{BusinessTypeKind, RelationKind};
use crate::shared::models::{names, Attribute, AttributeIndex, Provenance, TypeRef};
use serde::{Deserialize, Serialize};

/// Relationship attached to a property.
///
/// `inter_aggregate == true` signals that the property crosses aggregate
/// boundaries and must be generated as an identifier reference, never as an
/// object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipMetadata {
    pub kind: RelationKind,
    /// Qualified name of the related business type
    pub target: String,
    #[serde(default)]
    pub inter_aggregate: bool,
    /// Property on `target` mapping back to the owner (bidirectional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_property: Option<String>,
}

impl RelationshipMetadata {
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            inter_aggregate: false,
            inverse_property: None,
        }
    }

    pub fn inter_aggregate(mut self, value: bool) -> Self {
        self.inter_aggregate = value;
        self
    }

    pub fn with_inverse(mut self, property: impl Into<String>) -> Self {
        self.inverse_property = Some(property.into());
        self
    }

    pub fn is_inter_aggregate(&self) -> bool {
        self.inter_aggregate
    }

    pub fn is_bidirectional(&self) -> bool {
        self.inverse_property.is_some()
    }
}

/// Identity definition of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Field carrying the identity (`id`)
    pub field_name: String,
    /// Declared identity type (`com.example.OrderId`)
    pub type_ref: TypeRef,
    /// Underlying primitive when `type_ref` is a wrapper (`java.util.UUID`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unwrapped_type: Option<TypeRef>,
}

impl Identity {
    pub fn new(field_name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            field_name: field_name.into(),
            type_ref,
            unwrapped_type: None,
        }
    }
}

/// Property (field / record component) of a business type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_ref: TypeRef,
    #[serde(default)]
    pub identity: bool,
    #[serde(default)]
    pub immutable: bool,
    /// Qualified name of the owning type
    pub declaring_type: String,
    #[serde(default, skip_serializing_if = "AttributeIndex::is_empty")]
    pub attributes: AttributeIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipMetadata>,
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        type_ref: TypeRef,
        declaring_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref,
            identity: false,
            immutable: false,
            declaring_type: declaring_type.into(),
            attributes: AttributeIndex::new(),
            relationship: None,
        }
    }

    pub fn as_identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes = AttributeIndex::from_attributes(attributes);
        self
    }

    pub fn with_relationship(mut self, relationship: RelationshipMetadata) -> Self {
        self.relationship = Some(relationship);
        self
    }

    pub fn has_relationship(&self) -> bool {
        self.relationship.is_some()
    }

    /// Copy of this property carrying `relationship`.
    ///
    /// # Panics
    /// If the property already has relationship metadata: it is never re-derived.
    pub(crate) fn attach_relationship(&self, relationship: RelationshipMetadata) -> Self {
        assert!(
            self.relationship.is_none(),
            "relationship of {}.{} is already decided",
            self.declaring_type,
            self.name
        );
        Self {
            relationship: Some(relationship),
            ..self.clone()
        }
    }
}

/// Business type (class, record, enum) with its decided kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessType {
    pub qualified_name: String,
    pub kind: BusinessTypeKind,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(default)]
    pub immutable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    /// Closed hierarchy (sealed types)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permitted_subtypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_constants: Vec<String>,
    #[serde(default, skip_serializing_if = "AttributeIndex::is_empty")]
    pub attributes: AttributeIndex,
    /// Root of the aggregate cluster this type belongs to (set by enrichment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl BusinessType {
    pub fn new(qualified_name: impl Into<String>, kind: BusinessTypeKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            properties: Vec::new(),
            identity: None,
            immutable: false,
            supertype: None,
            interfaces: Vec::new(),
            permitted_subtypes: Vec::new(),
            enum_constants: Vec::new(),
            attributes: AttributeIndex::new(),
            cluster_root: None,
            provenance: None,
        }
    }

    /// Add a property declared on this type
    pub fn with_property(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        let property = Property::new(name, type_ref, self.qualified_name.clone());
        self.properties.push(property);
        self
    }

    /// Add a pre-built property (its `declaring_type` must name this type)
    pub fn with_property_decl(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Set the identity and add its identity property
    pub fn with_identity(mut self, field_name: impl Into<String>, type_ref: TypeRef) -> Self {
        let field_name = field_name.into();
        let property = Property::new(field_name.clone(), type_ref.clone(), self.qualified_name.clone())
            .as_identity();
        self.properties.push(property);
        self.identity = Some(Identity::new(field_name, type_ref));
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        let mut attributes: Vec<Attribute> = std::mem::take(&mut self.attributes).into();
        attributes.push(attribute);
        self.attributes = AttributeIndex::from_attributes(attributes);
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_permitted_subtypes(mut self, subtypes: Vec<String>) -> Self {
        self.permitted_subtypes = subtypes;
        self
    }

    pub fn with_enum_constants(mut self, constants: Vec<String>) -> Self {
        self.enum_constants = constants;
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.qualified_name)
    }

    pub fn namespace(&self) -> &str {
        names::namespace_of(&self.qualified_name)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_aggregate_root(&self) -> bool {
        self.kind == BusinessTypeKind::AggregateRoot
    }

    /// Whether `property` is this type's identity (flagged, or named by `identity`)
    pub fn is_identity_property(&self, property: &Property) -> bool {
        property.identity
            || self
                .identity
                .as_ref()
                .is_some_and(|identity| identity.field_name == property.name)
    }

    /// Copy of this type promoted to AGGREGATE_ROOT.
    ///
    /// # Panics
    /// If the type is not an ENTITY. Only entities are eligible for promotion;
    /// reaching this with any other kind means the classification chain is broken.
    pub(crate) fn promote_to_aggregate_root(&self) -> Self {
        assert!(
            self.kind == BusinessTypeKind::Entity,
            "cannot promote {} ({}) to AGGREGATE_ROOT: only ENTITY is eligible",
            self.qualified_name,
            self.kind
        );
        Self {
            kind: BusinessTypeKind::AggregateRoot,
            ..self.clone()
        }
    }
}
