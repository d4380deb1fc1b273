//! Inverse-property (bidirectional mapping) resolution

use crate::domain::BusinessType;

/// Name of the single property of `target` pointing back at `source`.
///
/// `target_refs[i]` is the resolved relationship target of
/// `target.properties[i]`. `property` is the forward property on `source`
/// and is never its own inverse. Several candidates are ambiguous and
/// resolve to `None`.
pub fn resolve_inverse<'t>(
    source: &str,
    property: &str,
    target: &'t BusinessType,
    target_refs: &[Option<&str>],
) -> Option<&'t str> {
    let mut candidates = target
        .properties
        .iter()
        .zip(target_refs)
        .filter(|(candidate, _)| !(target.qualified_name == source && candidate.name == property))
        .filter(|(_, resolved)| **resolved == Some(source))
        .map(|(candidate, _)| candidate.name.as_str());

    let first = candidates.next()?;
    candidates.next().is_none().then_some(first)
}
