//! Filter string construction
//!
//! Filters follow the TUnit tree-node layout `/<assembly>/<namespace>/<class>/<method>`.
//! The assembly segment is always the wildcard: assembly detection is heuristic, so the
//! resolved assembly name is only reported alongside the filter.

/// Wildcard used for any segment that could not be resolved
pub const WILDCARD: &str = "*";

/// Build a tree-node filter from the resolved scope segments.
///
/// `assembly` is accepted so callers can pass the whole tuple, but it never appears in the
/// filter.
pub fn build(
    _assembly: &str,
    namespace: Option<&str>,
    class_name: &str,
    method_name: Option<&str>,
) -> String {
    let mut filter = format!(
        "/{WILDCARD}/{}/{}",
        namespace.filter(|ns| !ns.is_empty()).unwrap_or(WILDCARD),
        class_name
    );
    match method_name {
        Some(method) if !method.is_empty() => {
            filter.push('/');
            filter.push_str(method);
        }
        _ => {
            filter.push('/');
            filter.push_str(WILDCARD);
        }
    }
    filter
}

/// Segments recovered from a filter produced by [`build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSegments {
    pub namespace: Option<String>,
    pub class_name: String,
    pub method_name: Option<String>,
}

/// Split a filter back into its namespace, class and method segments.
///
/// Wildcard segments come back as `None`. Returns `None` for strings that do not have the
/// four-segment shape.
pub fn parse(filter: &str) -> Option<FilterSegments> {
    let rest = filter.strip_prefix('/')?;
    let segments: Vec<&str> = rest.split('/').collect();
    let [_assembly, namespace, class_name, method_name] = segments.as_slice() else {
        return None;
    };
    if class_name.is_empty() {
        return None;
    }

    let concrete = |segment: &str| (segment != WILDCARD && !segment.is_empty()).then(|| segment.to_string());
    Some(FilterSegments {
        namespace: concrete(namespace),
        class_name: class_name.to_string(),
        method_name: concrete(method_name),
    })
}
