//! Test assembly inference from a document path.
//!
//! Test projects conventionally live in a directory named after the assembly (`Foo.Tests`).

/// Placeholder used when no assembly can be inferred from the path
pub const UNKNOWN_ASSEMBLY: &str = "UnknownAssembly";

/// Fragments that mark a test project directory (`Foo.Tests`, `Foo.Test`)
pub const DEFAULT_TEST_PROJECT_MARKERS: &[&str] = &[".Tests", ".Test"];

/// Guess the test assembly a document belongs to from its path.
///
/// The rightmost path segment containing one of `markers` wins. Otherwise the document's parent
/// directory is used, and `fallback` when the path has no parent segment.
pub fn extract_assembly<S: AsRef<str>>(path: &str, markers: &[S], fallback: &str) -> String {
    let segments: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();

    let marked = segments.iter().rev().find(|segment| {
        markers
            .iter()
            .any(|marker| segment.contains(marker.as_ref()))
    });
    if let Some(segment) = marked {
        return segment.to_string();
    }

    segments
        .len()
        .checked_sub(2)
        .map(|index| segments[index].to_string())
        .unwrap_or_else(|| fallback.to_string())
}
