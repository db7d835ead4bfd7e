//! Shared fixtures and in-memory hosts for the workspace integration tests

use std::{
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use csharp_test_filter_core::{
    Breakpoint, BreakpointHost, Document, EditorHost, MessageLevel, Notifier, Position, Result,
    SymbolNode, SymbolProvider, utils::language_id_for_path,
};
use parking_lot::Mutex;

/// Directory holding the C# sample projects
pub fn test_workspace() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-workspace")
}

pub fn fixture_path(relative: &str) -> PathBuf {
    test_workspace().join(relative)
}

/// Load a sample file as an editor document
pub fn load_fixture(relative: &str) -> std::io::Result<Document> {
    let path = fixture_path(relative);
    let text = std::fs::read_to_string(&path)?;
    let language_id = language_id_for_path(&path);
    Ok(Document::new(text, path, language_id))
}

/// Editor whose active document and cursor are set by the test
#[derive(Default)]
pub struct ScriptedEditor {
    state: Mutex<Option<(Document, Position)>>,
}

impl ScriptedEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, document: Document, position: Position) {
        *self.state.lock() = Some((document, position));
    }

    pub fn move_cursor(&self, position: Position) {
        if let Some((_, cursor)) = self.state.lock().as_mut() {
            *cursor = position;
        }
    }

    pub fn close(&self) {
        *self.state.lock() = None;
    }
}

impl EditorHost for ScriptedEditor {
    fn active_document(&self) -> Option<Document> {
        self.state.lock().as_ref().map(|(document, _)| document.clone())
    }

    fn cursor_position(&self) -> Option<Position> {
        self.state.lock().as_ref().map(|(_, position)| *position)
    }
}

/// Wraps a provider and counts the requests that reach it
pub struct CountingProvider<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P: SymbolProvider> CountingProvider<P> {
    pub fn new(inner: P) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<P: SymbolProvider> SymbolProvider for CountingProvider<P> {
    async fn document_symbols(&self, document: &Document) -> Result<Vec<SymbolNode>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.document_symbols(document).await
    }
}

/// Breakpoint host keeping breakpoints in memory
#[derive(Default)]
pub struct RecordingBreakpoints {
    breakpoints: Mutex<Vec<Breakpoint>>,
}

impl RecordingBreakpoints {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self) -> Vec<Breakpoint> {
        self.breakpoints.lock().clone()
    }
}

#[async_trait]
impl BreakpointHost for RecordingBreakpoints {
    async fn list_breakpoints(&self) -> Result<Vec<Breakpoint>> {
        Ok(self.snapshot())
    }

    async fn add_breakpoint(&self, document_uri: &str, position: Position) -> Result<()> {
        self.breakpoints
            .lock()
            .push(Breakpoint::new(document_uri, position.line));
        Ok(())
    }
}

/// Notifier remembering every message shown
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_message(&self, level: MessageLevel, message: &str) {
        self.messages.lock().push((level, message.to_string()));
    }
}
