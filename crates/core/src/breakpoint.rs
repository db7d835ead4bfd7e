//! Automatic breakpoint placement for the resolved test method
//!
//! When a method-level filter is requested and the method has no breakpoint yet, one is
//! requested on the first line of the method that opens a brace.

use crate::{
    error::Result,
    interfaces::BreakpointHost,
    symbols,
    types::{Breakpoint, Document, Position, Range, ScopeInfo, SymbolNode},
};

/// What the heuristic did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointOutcome {
    Inserted(Position),
    AlreadyPresent,
    /// The scope is class-level
    NoMethod,
    /// The method could not be located in the symbol tree
    MethodNotFound,
    /// Placement is disabled or the host cannot provide breakpoints or symbols
    Skipped,
}

/// Position for a new breakpoint inside `method_range`, or `None` if one already exists there
pub fn plan_breakpoint(
    lines: &[&str],
    method_range: Range,
    existing: &[Breakpoint],
    document_uri: &str,
) -> Option<Position> {
    let covered = existing
        .iter()
        .any(|bp| bp.document_uri == document_uri && method_range.contains_line(bp.line));
    if covered {
        return None;
    }

    let start = method_range.start.line as usize;
    let end = method_range.end.line as usize;
    let brace_line = lines
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start) + 1)
        .find(|(_, line)| line.contains('{'))
        .map(|(index, _)| index as u32);

    Some(Position::new(
        brace_line.unwrap_or(method_range.start.line),
        0,
    ))
}

/// Locate the scope's method in `nodes` and insert a breakpoint if it has none
pub async fn ensure_method_breakpoint(
    document: &Document,
    scope: &ScopeInfo,
    nodes: &[SymbolNode],
    host: &dyn BreakpointHost,
) -> Result<BreakpointOutcome> {
    let Some(method_name) = scope.method_name.as_deref() else {
        return Ok(BreakpointOutcome::NoMethod);
    };
    let Some(method) = symbols::find_class_by_name(nodes, &scope.class_name)
        .and_then(|class_node| symbols::find_method_by_name(class_node, method_name))
    else {
        tracing::debug!(
            "Method {}::{} not found in symbol tree",
            scope.class_name,
            method_name
        );
        return Ok(BreakpointOutcome::MethodNotFound);
    };

    let document_uri = document.id();
    let existing = host.list_breakpoints().await?;
    let lines = document.lines();

    match plan_breakpoint(&lines, method.range, &existing, &document_uri) {
        Some(position) => {
            tracing::info!(
                "Adding breakpoint to {} at line {}",
                method_name,
                position.line + 1
            );
            host.add_breakpoint(&document_uri, position).await?;
            Ok(BreakpointOutcome::Inserted(position))
        }
        None => Ok(BreakpointOutcome::AlreadyPresent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolKind;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    const SOURCE: &str = "public class CalculatorTests\n{\n    [Test]\n    public void Add()\n    {\n        var result = 2 + 2;\n    }\n\n    public int Twice(int x) => x * 2;\n}\n";
    const URI: &str = "/repo/CalculatorTests.cs";

    #[derive(Default)]
    struct MemoryBreakpoints {
        breakpoints: Mutex<Vec<Breakpoint>>,
    }

    #[async_trait]
    impl BreakpointHost for MemoryBreakpoints {
        async fn list_breakpoints(&self) -> Result<Vec<Breakpoint>> {
            Ok(self.breakpoints.lock().clone())
        }

        async fn add_breakpoint(&self, document_uri: &str, position: Position) -> Result<()> {
            self.breakpoints
                .lock()
                .push(Breakpoint::new(document_uri, position.line));
            Ok(())
        }
    }

    fn span(start: u32, end: u32) -> Range {
        Range::new(Position::new(start, 4), Position::new(end, 5))
    }

    fn tree() -> Vec<SymbolNode> {
        vec![
            SymbolNode::new("CalculatorTests", SymbolKind::Class, span(0, 9)).with_children(vec![
                SymbolNode::new("Add", SymbolKind::Method, span(2, 6)),
                SymbolNode::new("Twice", SymbolKind::Method, span(8, 8)),
            ]),
        ]
    }

    fn scope(method: Option<&str>) -> ScopeInfo {
        ScopeInfo::new("", None, "CalculatorTests", method.map(str::to_string))
    }

    #[test]
    fn test_plan_uses_first_brace_line() {
        let lines: Vec<&str> = SOURCE.split('\n').collect();
        assert_eq!(
            plan_breakpoint(&lines, span(2, 6), &[], URI),
            Some(Position::new(4, 0))
        );
    }

    #[test]
    fn test_plan_without_brace_uses_start_line() {
        let lines: Vec<&str> = SOURCE.split('\n').collect();
        assert_eq!(
            plan_breakpoint(&lines, span(8, 8), &[], URI),
            Some(Position::new(8, 0))
        );
    }

    #[test]
    fn test_plan_respects_existing_breakpoints() {
        let lines: Vec<&str> = SOURCE.split('\n').collect();
        let existing = vec![Breakpoint::new(URI, 5)];
        assert_eq!(plan_breakpoint(&lines, span(2, 6), &existing, URI), None);

        // same line in another document does not count
        let elsewhere = vec![Breakpoint::new("/repo/Other.cs", 5)];
        assert!(plan_breakpoint(&lines, span(2, 6), &elsewhere, URI).is_some());
    }

    #[tokio::test]
    async fn test_ensure_inserts_once() {
        let host = MemoryBreakpoints::default();
        let document = Document::new(SOURCE, URI, "csharp");
        let nodes = tree();

        let outcome = ensure_method_breakpoint(&document, &scope(Some("Add")), &nodes, &host)
            .await
            .unwrap();
        assert_eq!(outcome, BreakpointOutcome::Inserted(Position::new(4, 0)));

        let outcome = ensure_method_breakpoint(&document, &scope(Some("Add")), &nodes, &host)
            .await
            .unwrap();
        assert_eq!(outcome, BreakpointOutcome::AlreadyPresent);
        assert_eq!(host.breakpoints.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_skips_class_scope_and_unknown_methods() {
        let host = MemoryBreakpoints::default();
        let document = Document::new(SOURCE, URI, "csharp");
        let nodes = tree();

        let outcome = ensure_method_breakpoint(&document, &scope(None), &nodes, &host)
            .await
            .unwrap();
        assert_eq!(outcome, BreakpointOutcome::NoMethod);

        let outcome = ensure_method_breakpoint(&document, &scope(Some("Missing")), &nodes, &host)
            .await
            .unwrap();
        assert_eq!(outcome, BreakpointOutcome::MethodNotFound);
        assert!(host.breakpoints.lock().is_empty());
    }
}
