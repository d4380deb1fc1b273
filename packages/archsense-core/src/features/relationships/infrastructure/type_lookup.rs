//! Resolution of type references to business types of a model

use crate::domain::{BusinessType, TypeModel};
use crate::shared::models::{names, TypeRef};
use rustc_hash::FxHashMap;

/// Resolves `TypeRef`s against one `TypeModel`.
///
/// Qualified references resolve by exact name. Unqualified references
/// resolve by simple name, but only when exactly one type carries it.
#[derive(Debug)]
pub struct TypeLookup<'m> {
    model: &'m TypeModel,
    /// `None` marks an ambiguous simple name
    by_simple_name: FxHashMap<&'m str, Option<usize>>,
}

impl<'m> TypeLookup<'m> {
    pub fn new(model: &'m TypeModel) -> Self {
        let mut by_simple_name: FxHashMap<&'m str, Option<usize>> = FxHashMap::default();
        for (position, ty) in model.iter().enumerate() {
            by_simple_name
                .entry(ty.simple_name())
                .and_modify(|slot| *slot = None)
                .or_insert(Some(position));
        }
        Self {
            model,
            by_simple_name,
        }
    }

    pub fn resolve(&self, type_ref: &TypeRef) -> Option<&'m BusinessType> {
        self.resolve_name(&type_ref.qualified_name)
    }

    pub fn resolve_name(&self, name: &str) -> Option<&'m BusinessType> {
        if let Some(ty) = self.model.get(name) {
            return Some(ty);
        }
        if !names::namespace_of(name).is_empty() {
            return None;
        }
        let position = (*self.by_simple_name.get(name)?)?;
        self.model.types().get(position)
    }

    pub fn model(&self) -> &'m TypeModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessTypeKind;

    fn model() -> TypeModel {
        TypeModel::new(vec![
            BusinessType::new("a.billing.Order", BusinessTypeKind::Entity),
            BusinessType::new("a.billing.Money", BusinessTypeKind::ValueObject),
            BusinessType::new("a.shipping.Money", BusinessTypeKind::ValueObject),
        ])
        .unwrap()
    }

    #[test]
    fn test_qualified_and_unqualified_resolution() {
        let model = model();
        let lookup = TypeLookup::new(&model);
        assert_eq!(
            lookup.resolve(&TypeRef::named("a.billing.Order")).map(|t| t.qualified_name.as_str()),
            Some("a.billing.Order")
        );
        assert_eq!(
            lookup.resolve(&TypeRef::named("Order")).map(|t| t.qualified_name.as_str()),
            Some("a.billing.Order")
        );
        assert!(lookup.resolve(&TypeRef::named("b.Order")).is_none());
    }

    #[test]
    fn test_ambiguous_simple_name_does_not_resolve() {
        let model = model();
        let lookup = TypeLookup::new(&model);
        assert!(lookup.resolve(&TypeRef::named("Money")).is_none());
        assert!(lookup.resolve(&TypeRef::named("a.shipping.Money")).is_some());
    }
}
