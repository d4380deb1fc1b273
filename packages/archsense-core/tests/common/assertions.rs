//! Domain-specific assertions

use archsense_core::{BusinessTypeKind, ModelSnapshot, RelationKind, RelationshipMetadata};

pub fn assert_kind(snapshot: &ModelSnapshot, qualified_name: &str, expected: BusinessTypeKind) {
    let ty = snapshot
        .type_named(qualified_name)
        .unwrap_or_else(|| panic!("type {qualified_name} not in snapshot"));
    assert_eq!(ty.kind(), expected, "kind of {qualified_name}");
}

/// Relationship of `owner.property`, panicking when absent
pub fn relationship<'a>(
    snapshot: &'a ModelSnapshot,
    owner: &str,
    property: &str,
) -> &'a RelationshipMetadata {
    snapshot
        .type_named(owner)
        .and_then(|ty| ty.property(property))
        .and_then(|p| p.relationship())
        .unwrap_or_else(|| panic!("{owner}.{property} has no relationship"))
}

pub fn assert_relationship(
    snapshot: &ModelSnapshot,
    owner: &str,
    property: &str,
    kind: RelationKind,
    target: &str,
    inter_aggregate: bool,
) {
    let metadata = relationship(snapshot, owner, property);
    assert_eq!(metadata.kind, kind, "kind of {owner}.{property}");
    assert_eq!(metadata.target, target, "target of {owner}.{property}");
    assert_eq!(
        metadata.inter_aggregate, inter_aggregate,
        "inter-aggregate flag of {owner}.{property}"
    );
}

pub fn assert_plain(snapshot: &ModelSnapshot, owner: &str, property: &str) {
    let relationship = snapshot
        .type_named(owner)
        .and_then(|ty| ty.property(property))
        .and_then(|p| p.relationship());
    assert!(
        relationship.is_none(),
        "{owner}.{property} should be a plain value, got {relationship:?}"
    );
}
