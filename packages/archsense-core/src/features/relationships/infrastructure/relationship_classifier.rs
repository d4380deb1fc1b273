//! Relationship classifier

use super::context::RelationshipContext;
use crate::config::ClassificationConfig;
use crate::domain::{BusinessType, BusinessTypeKind, Property, RelationKind, RelationshipMetadata};
use crate::features::relationships::RelationshipOutcome;
use crate::shared::models::{names, TypeRef};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RelationshipClassifier {
    config: Arc<ClassificationConfig>,
}

impl RelationshipClassifier {
    pub fn new(config: Arc<ClassificationConfig>) -> Self {
        Self { config }
    }

    /// Decide the relationship held by `property` of `source`.
    ///
    /// The inverse property is left unset; it needs the outcomes of the
    /// target's own properties.
    pub fn classify<'p>(
        &self,
        property: &'p Property,
        source: &BusinessType,
        context: &RelationshipContext<'_>,
    ) -> RelationshipOutcome<'p> {
        if let Some(existing) = property.relationship.as_ref() {
            return RelationshipOutcome::Existing(existing);
        }
        if source.is_identity_property(property) {
            return RelationshipOutcome::Plain;
        }

        let shape = property.type_ref.shape(&self.config.collection_types);
        let metadata = self
            .object_reference(source, shape.element, shape.many, context)
            .or_else(|| self.identifier_reference(source, shape.element, shape.many, context));

        match metadata {
            Some(metadata) => {
                debug!(
                    "relationship {}.{} -> {} {} (inter_aggregate={})",
                    source.qualified_name,
                    property.name,
                    metadata.kind,
                    metadata.target,
                    metadata.inter_aggregate
                );
                RelationshipOutcome::Detected(metadata)
            }
            None => RelationshipOutcome::Plain,
        }
    }

    /// The element type is itself a relationship-eligible business type
    fn object_reference(
        &self,
        source: &BusinessType,
        element: &TypeRef,
        many: bool,
        context: &RelationshipContext<'_>,
    ) -> Option<RelationshipMetadata> {
        let target = context
            .lookup()
            .resolve(element)
            .filter(|target| target.kind.is_relationship_target())?;

        let clusters = context.clusters();
        let inter_aggregate = match (
            clusters.root_of(&source.qualified_name),
            clusters.root_of(&target.qualified_name),
        ) {
            (Some(from), Some(to)) => from != to,
            _ => false,
        };

        let kind = match (target.kind, inter_aggregate, many) {
            (BusinessTypeKind::ValueObject, _, _) => RelationKind::Embedded,
            (_, true, true) => RelationKind::ManyToMany,
            (_, true, false) => RelationKind::ManyToOne,
            (_, false, true) => RelationKind::OneToMany,
            (_, false, false) => RelationKind::OneToOne,
        };
        Some(RelationshipMetadata::new(kind, &target.qualified_name).inter_aggregate(inter_aggregate))
    }

    /// The element type is the identifier of an aggregate root
    fn identifier_reference(
        &self,
        source: &BusinessType,
        element: &TypeRef,
        many: bool,
        context: &RelationshipContext<'_>,
    ) -> Option<RelationshipMetadata> {
        let simple = element.simple_name();
        let base = self
            .config
            .identifier_suffixes
            .iter()
            .find_map(|suffix| simple.strip_suffix(suffix.as_str()).filter(|base| !base.is_empty()))?;

        let root = identified_root(element, base, context.roots())?;
        let inter_aggregate =
            context.clusters().root_of(&source.qualified_name) != Some(root.qualified_name.as_str());
        let kind = if many {
            RelationKind::ManyToMany
        } else {
            RelationKind::ManyToOne
        };
        Some(RelationshipMetadata::new(kind, &root.qualified_name).inter_aggregate(inter_aggregate))
    }
}

/// Root whose identity type is `element`.
///
/// Qualified identity matches come first. An unqualified reference may match
/// an identity by simple name. A root without a declared identity matches
/// when its simple name is `base` (`CustomerId` → `Customer`). Every step
/// requires a unique candidate.
fn identified_root<'m>(
    element: &TypeRef,
    base: &str,
    roots: &[&'m BusinessType],
) -> Option<&'m BusinessType> {
    let by_identity: Vec<&'m BusinessType> = roots
        .iter()
        .copied()
        .filter(|root| {
            root.identity
                .as_ref()
                .is_some_and(|identity| identity.type_ref.qualified_name == element.qualified_name)
        })
        .collect();
    match by_identity.as_slice() {
        [root] => return Some(*root),
        [] => {}
        _ => return None,
    }

    if names::namespace_of(&element.qualified_name).is_empty() {
        let by_simple_identity = roots.iter().copied().filter(|root| {
            root.identity
                .as_ref()
                .is_some_and(|identity| identity.type_ref.simple_name() == element.qualified_name)
        });
        if let Some(root) = single(by_simple_identity) {
            return Some(root);
        }
    }

    single(
        roots
            .iter()
            .copied()
            .filter(|root| root.identity.is_none() && root.simple_name() == base),
    )
}

fn single<T>(mut candidates: impl Iterator<Item = T>) -> Option<T> {
    let first = candidates.next()?;
    candidates.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TypeModel;
    use pretty_assertions::assert_eq;

    fn list_of(element: &str) -> TypeRef {
        TypeRef::generic("java.util.List", vec![TypeRef::named(element)])
    }

    fn shop() -> TypeModel {
        TypeModel::new(vec![
            BusinessType::new("com.shop.order.Order", BusinessTypeKind::AggregateRoot)
                .with_identity("id", TypeRef::named("com.shop.order.OrderId"))
                .with_property("items", list_of("com.shop.order.OrderItem"))
                .with_property("customerId", TypeRef::named("com.shop.customer.CustomerId"))
                .with_property("shippingAddress", TypeRef::named("com.shop.shared.Address"))
                .with_property("customer", TypeRef::named("com.shop.customer.Customer"))
                .with_property("note", TypeRef::named("java.lang.String")),
            BusinessType::new("com.shop.order.OrderItem", BusinessTypeKind::Entity)
                .with_property("order", TypeRef::named("com.shop.order.Order")),
            BusinessType::new("com.shop.customer.Customer", BusinessTypeKind::AggregateRoot)
                .with_identity("id", TypeRef::named("com.shop.customer.CustomerId"))
                .with_property(
                    "tags",
                    TypeRef::generic("java.util.Set", vec![TypeRef::named("com.shop.order.OrderId")]),
                ),
            BusinessType::new("com.shop.customer.CustomerId", BusinessTypeKind::Identifier),
            BusinessType::new("com.shop.shared.Address", BusinessTypeKind::ValueObject),
        ])
        .unwrap()
    }

    fn outcome<'m>(
        model: &'m TypeModel,
        context: &RelationshipContext<'_>,
        ty: &str,
        property: &str,
    ) -> RelationshipOutcome<'m> {
        let source = model.get(ty).unwrap();
        let property = source.property(property).unwrap();
        RelationshipClassifier::new(ClassificationConfig::shared_default())
            .classify(property, source, context)
    }

    fn detected(outcome: RelationshipOutcome<'_>) -> RelationshipMetadata {
        match outcome {
            RelationshipOutcome::Detected(metadata) => metadata,
            other => panic!("expected a detected relationship, got {:?}", other),
        }
    }

    #[test]
    fn test_collection_of_member_entity_is_one_to_many() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.order.Order", "items"));
        assert_eq!(metadata.kind, RelationKind::OneToMany);
        assert_eq!(metadata.target, "com.shop.order.OrderItem");
        assert!(!metadata.is_inter_aggregate());
    }

    #[test]
    fn test_identifier_reference_targets_the_aggregate() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.order.Order", "customerId"));
        assert_eq!(metadata.kind, RelationKind::ManyToOne);
        assert_eq!(metadata.target, "com.shop.customer.Customer");
        assert!(metadata.is_inter_aggregate());
    }

    #[test]
    fn test_collection_of_identifiers_is_many_to_many() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.customer.Customer", "tags"));
        assert_eq!(metadata.kind, RelationKind::ManyToMany);
        assert_eq!(metadata.target, "com.shop.order.Order");
        assert!(metadata.is_inter_aggregate());
    }

    #[test]
    fn test_value_object_is_embedded() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.order.Order", "shippingAddress"));
        assert_eq!(metadata.kind, RelationKind::Embedded);
    }

    #[test]
    fn test_object_reference_to_other_root_is_inter_aggregate() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.order.Order", "customer"));
        assert_eq!(metadata.kind, RelationKind::ManyToOne);
        assert!(metadata.is_inter_aggregate());
    }

    #[test]
    fn test_back_reference_within_cluster() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "com.shop.order.OrderItem", "order"));
        assert_eq!(metadata.kind, RelationKind::OneToOne);
        assert!(!metadata.is_inter_aggregate());
    }

    #[test]
    fn test_plain_values_and_identity() {
        let model = shop();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        assert_eq!(
            outcome(&model, &context, "com.shop.order.Order", "note"),
            RelationshipOutcome::Plain
        );
        assert_eq!(
            outcome(&model, &context, "com.shop.order.Order", "id"),
            RelationshipOutcome::Plain
        );
    }

    #[test]
    fn test_existing_metadata_is_kept() {
        let existing = RelationshipMetadata::new(RelationKind::ManyToMany, "com.shop.x.Elsewhere");
        let model = TypeModel::new(vec![BusinessType::new("com.shop.a.A", BusinessTypeKind::Entity)
            .with_property_decl(
                Property::new("items", list_of("com.shop.a.A"), "com.shop.a.A")
                    .with_relationship(existing.clone()),
            )])
        .unwrap();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        assert_eq!(
            outcome(&model, &context, "com.shop.a.A", "items"),
            RelationshipOutcome::Existing(&existing)
        );
    }

    #[test]
    fn test_root_without_identity_matches_by_name() {
        let model = TypeModel::new(vec![
            BusinessType::new("a.Customer", BusinessTypeKind::AggregateRoot),
            BusinessType::new("a.Invoice", BusinessTypeKind::Entity)
                .with_property("customerId", TypeRef::named("a.CustomerId")),
        ])
        .unwrap();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        let metadata = detected(outcome(&model, &context, "a.Invoice", "customerId"));
        assert_eq!(metadata.target, "a.Customer");
        assert!(metadata.is_inter_aggregate());
    }

    #[test]
    fn test_identifier_suffix_is_case_sensitive() {
        let model = TypeModel::new(vec![
            BusinessType::new("a.Customer", BusinessTypeKind::AggregateRoot),
            BusinessType::new("a.Invoice", BusinessTypeKind::Entity)
                .with_property("customerid", TypeRef::named("a.Customerid")),
        ])
        .unwrap();
        let context = RelationshipContext::new(&model, &ClassificationConfig::default().collection_types);
        assert_eq!(
            outcome(&model, &context, "a.Invoice", "customerid"),
            RelationshipOutcome::Plain
        );
    }
}
