use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use csharp_test_filter_core::{
    Config, Document, Error, MessageLevel, Position, Result, ScopeEngine, SymbolCache, SymbolNode,
    SymbolProvider, TestFilterService, TreeSitterSymbolProvider,
    resolver::{PatternScopeResolver, ScopeResolver, SymbolScopeResolver},
};
use csharp_test_filter_workspace::{
    CountingProvider, RecordingBreakpoints, RecordingNotifier, ScriptedEditor, load_fixture,
};

const CALCULATOR: &str = "SampleTests.Tests/CalculatorTests.cs";
const STRINGS: &str = "SampleTests.Tests/StringTests.cs";
const TERMINAL: &str = "Terminal.Tests/TestExample.cs";

const ADD_FILTER: &str = "/*/SampleTests/CalculatorTests/Add_ShouldReturnCorrectSum";

fn engine() -> ScopeEngine {
    ScopeEngine::new(Config::default()).with_provider(Arc::new(TreeSitterSymbolProvider))
}

struct UnavailableProvider;

#[async_trait]
impl SymbolProvider for UnavailableProvider {
    async fn document_symbols(&self, _document: &Document) -> Result<Vec<SymbolNode>> {
        Err(Error::ProviderUnavailable("language server not started".to_string()))
    }
}

#[tokio::test]
async fn test_strategies_agree_from_opening_to_closing_brace() {
    let bodies: &[(&str, &[(u32, u32)])] = &[
        (CALCULATOR, &[(6, 15), (19, 28), (32, 39)]),
        (STRINGS, &[(6, 9), (13, 16)]),
        (TERMINAL, &[(8, 11), (15, 18)]),
    ];
    let symbols = SymbolScopeResolver::new(
        Arc::new(SymbolCache::default()),
        Arc::new(TreeSitterSymbolProvider),
    );
    let patterns = PatternScopeResolver;

    for (fixture, ranges) in bodies {
        let document = load_fixture(fixture).unwrap();
        for &(first, last) in *ranges {
            for line in first..=last {
                let position = Position::new(line, 0);
                let from_symbols = symbols.resolve(&document, position).await.unwrap().unwrap();
                let from_patterns = patterns.resolve(&document, position).await.unwrap().unwrap();

                assert!(
                    from_symbols.method_name.is_some(),
                    "{fixture}:{line} should be inside a method"
                );
                assert_eq!(from_symbols.class_name, from_patterns.class_name, "{fixture}:{line}");
                assert_eq!(from_symbols.method_name, from_patterns.method_name, "{fixture}:{line}");
                assert_eq!(from_symbols.namespace, from_patterns.namespace, "{fixture}:{line}");
            }
        }
    }
}

#[tokio::test]
async fn test_method_scope_without_namespace() {
    let source = "class CalculatorTests\n{\n    [Test]\n    async Task Add_ShouldReturnSum()\n    {\n        var result = 2+2;\n        await Assert.That(result).IsEqualTo(4);\n    }\n}\n";
    let document = Document::new(source, "/repo/BITS.Terminal.Tests/CalculatorTests.cs", "csharp");

    let scope = engine()
        .resolve(Some(&document), Some(Position::new(5, 8)))
        .await
        .unwrap();
    assert_eq!(scope.assembly, "BITS.Terminal.Tests");
    assert_eq!(scope.class_name, "CalculatorTests");
    assert_eq!(scope.method_name.as_deref(), Some("Add_ShouldReturnSum"));
    assert_eq!(scope.filter, "/*/*/CalculatorTests/Add_ShouldReturnSum");

    let scope = engine()
        .resolve(Some(&document), Some(Position::new(0, 0)))
        .await
        .unwrap();
    assert_eq!(scope.method_name, None);
    assert_eq!(scope.filter, "/*/*/CalculatorTests/*");
}

#[tokio::test]
async fn test_file_scoped_namespace_prefix() {
    let document = load_fixture(STRINGS).unwrap();
    let scope = engine()
        .resolve(Some(&document), Some(Position::new(8, 8)))
        .await
        .unwrap();
    assert!(scope.filter.starts_with("/*/SampleTests/"));
    assert_eq!(scope.assembly, "SampleTests.Tests");
}

#[tokio::test]
async fn test_class_line_returns_sticky_filter() {
    let document = load_fixture(CALCULATOR).unwrap();
    let engine = engine();

    let fresh = engine
        .resolve(Some(&document), Some(Position::new(42, 0)))
        .await
        .unwrap();
    assert_eq!(fresh.class_name, "Calculator");
    assert_eq!(fresh.filter, "/*/SampleTests/Calculator/*");

    let inside = engine
        .resolve(Some(&document), Some(Position::new(11, 8)))
        .await
        .unwrap();
    assert_eq!(inside.filter, ADD_FILTER);

    let parked = engine
        .resolve(Some(&document), Some(Position::new(42, 0)))
        .await
        .unwrap();
    assert_eq!(parked.class_name, "Calculator");
    assert_eq!(parked.method_name, None);
    assert_eq!(parked.filter, ADD_FILTER);
}

#[tokio::test]
async fn test_sticky_state_is_per_engine() {
    let document = load_fixture(CALCULATOR).unwrap();
    let first = engine();
    first
        .resolve(Some(&document), Some(Position::new(11, 8)))
        .await
        .unwrap();

    let scope = engine()
        .resolve(Some(&document), Some(Position::new(2, 0)))
        .await
        .unwrap();
    assert_eq!(scope.filter, "/*/SampleTests/CalculatorTests/*");
}

#[tokio::test]
async fn test_sticky_filter_crosses_documents() {
    let calculator = load_fixture(CALCULATOR).unwrap();
    let strings = load_fixture(STRINGS).unwrap();
    let engine = engine();

    engine
        .resolve(Some(&calculator), Some(Position::new(11, 8)))
        .await
        .unwrap();
    let scope = engine
        .resolve(Some(&strings), Some(Position::new(2, 0)))
        .await
        .unwrap();
    assert_eq!(scope.class_name, "StringTests");
    assert_eq!(scope.filter, ADD_FILTER);

    let no_editor = engine.resolve(None, None).await.unwrap();
    assert_eq!(no_editor.filter, ADD_FILTER);
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let document = load_fixture(TERMINAL).unwrap();
    let engine = engine();
    for position in [Position::new(10, 12), Position::new(5, 4), Position::new(20, 0)] {
        let first = engine.resolve(Some(&document), Some(position)).await;
        let second = engine.resolve(Some(&document), Some(position)).await;
        assert_eq!(first, second, "{position:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_cache_limits_provider_requests() {
    let document = load_fixture(CALCULATOR).unwrap();
    let provider = CountingProvider::new(TreeSitterSymbolProvider);
    let engine = ScopeEngine::new(Config::default()).with_provider(provider.clone());

    engine.resolve(Some(&document), Some(Position::new(11, 8))).await;
    engine.resolve(Some(&document), Some(Position::new(21, 8))).await;
    assert_eq!(provider.calls(), 1);

    tokio::time::advance(Duration::from_millis(5_001)).await;
    engine.resolve(Some(&document), Some(Position::new(11, 8))).await;
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_unavailable_provider_falls_back_to_patterns() {
    let document = load_fixture(CALCULATOR).unwrap();
    let engine = ScopeEngine::new(Config::default()).with_provider(Arc::new(UnavailableProvider));

    let scope = engine
        .resolve(Some(&document), Some(Position::new(36, 12)))
        .await
        .unwrap();
    assert_eq!(
        scope.filter,
        "/*/SampleTests/CalculatorTests/Multiply_ShouldReturnCorrectProduct"
    );
}

#[tokio::test]
async fn test_service_places_breakpoint_once() {
    let editor = Arc::new(ScriptedEditor::new());
    let breakpoints = RecordingBreakpoints::new();
    let service = TestFilterService::new(editor.clone(), engine()).with_breakpoints(breakpoints.clone());

    let document = load_fixture(CALCULATOR).unwrap();
    let uri = document.id();
    editor.show(document, Position::new(11, 8));

    assert_eq!(service.get_filter().await, ADD_FILTER);
    editor.move_cursor(Position::new(13, 8));
    assert_eq!(service.get_filter().await, ADD_FILTER);

    let placed = breakpoints.snapshot();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].document_uri, uri);
    assert_eq!(placed[0].line, 6);

    // Inspecting the scope never touches breakpoints
    editor.move_cursor(Position::new(21, 8));
    service.get_scope().await.unwrap();
    assert_eq!(breakpoints.snapshot().len(), 1);
}

#[tokio::test]
async fn test_service_messages_and_projections() {
    let editor = Arc::new(ScriptedEditor::new());
    let notifier = RecordingNotifier::new();
    let service = TestFilterService::new(editor.clone(), engine()).with_notifier(notifier.clone());

    assert!(service.get_scope().await.is_none());
    assert_eq!(service.get_class_name().await, "");
    assert_eq!(service.get_filter().await, "");

    editor.show(load_fixture(STRINGS).unwrap(), Position::new(2, 0));
    let scope = service.get_scope().await.unwrap();
    assert_eq!(scope.filter, "/*/SampleTests/StringTests/*");
    assert_eq!(service.get_method_name().await, "");

    editor.close();
    assert_eq!(
        notifier.messages(),
        vec![
            (MessageLevel::Warning, "No active editor".to_string()),
            (
                MessageLevel::Info,
                "No method in scope - using class filter".to_string()
            ),
        ]
    );
}
