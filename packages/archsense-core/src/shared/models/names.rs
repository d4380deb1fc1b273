//! Qualified-name helpers
//!
//! Qualified names are dot-separated (`com.example.billing.Invoice`). Nested
//! types keep their dotted path; no `$` binary names reach this layer.

/// Last segment of a qualified name (`com.example.Order` → `Order`)
pub fn simple_name(qualified_name: &str) -> &str {
    match qualified_name.rsplit_once('.') {
        Some((_, simple)) => simple,
        None => qualified_name,
    }
}

/// Everything before the last segment, or `""` for the default namespace
pub fn namespace_of(qualified_name: &str) -> &str {
    match qualified_name.rsplit_once('.') {
        Some((namespace, _)) => namespace,
        None => "",
    }
}

/// Case-insensitive suffix test
pub fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    if suffix.len() > value.len() {
        return false;
    }
    let split = value.len() - suffix.len();
    value.is_char_boundary(split) && value[split..].eq_ignore_ascii_case(suffix)
}

/// Whether any namespace segment equals `token`, ignoring case.
///
/// A trailing plural `s` on the segment is tolerated, so `usecase` matches
/// both `...usecase...` and `...usecases...`. Substrings inside a segment
/// never match (`api` does not match `rapid`).
pub fn namespace_has_token(namespace: &str, token: &str) -> bool {
    matching_segment(namespace, token).is_some()
}

/// First namespace segment matched by `token`, as written in the namespace
pub fn matching_segment<'n>(namespace: &'n str, token: &str) -> Option<&'n str> {
    namespace.split('.').find(|segment| {
        segment.eq_ignore_ascii_case(token)
            || (segment.len() == token.len() + 1
                && ends_with_ignore_case(segment, "s")
                && segment[..token.len()].eq_ignore_ascii_case(token))
    })
}
