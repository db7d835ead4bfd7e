//! Host-facing operations: scope, filter and name projections

use std::sync::Arc;

use crate::{
    breakpoint::{self, BreakpointOutcome},
    engine::ScopeEngine,
    error::{Error, Result},
    interfaces::{BreakpointHost, EditorHost, MessageLevel, Notifier, TracingNotifier},
    types::{Document, ScopeInfo},
};

pub struct TestFilterService {
    editor: Arc<dyn EditorHost>,
    engine: ScopeEngine,
    breakpoints: Option<Arc<dyn BreakpointHost>>,
    notifier: Arc<dyn Notifier>,
}

impl TestFilterService {
    pub fn new(editor: Arc<dyn EditorHost>, engine: ScopeEngine) -> Self {
        Self {
            editor,
            engine,
            breakpoints: None,
            notifier: Arc::new(TracingNotifier),
        }
    }

    pub fn with_breakpoints(mut self, breakpoints: Arc<dyn BreakpointHost>) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn engine(&self) -> &ScopeEngine {
        &self.engine
    }

    /// Full scope at the cursor, notifying the user about anything unexpected
    pub async fn get_scope(&self) -> Option<ScopeInfo> {
        match self.resolve_active().await.1 {
            Ok(scope) => {
                if !scope.is_method_level() {
                    self.notifier.show_message(
                        MessageLevel::Info,
                        "No method in scope - using class filter",
                    );
                }
                Some(scope)
            }
            Err(e) => {
                self.notifier
                    .show_message(MessageLevel::Warning, &user_message(&e));
                None
            }
        }
    }

    /// Filter at the cursor, or an empty string.
    ///
    /// Silent, and the only operation that runs the breakpoint heuristic.
    pub async fn get_filter(&self) -> String {
        let (document, result) = self.resolve_active().await;
        let Ok(scope) = result else {
            return String::new();
        };

        if let Some(document) = document.as_ref() {
            if let Err(e) = self.ensure_breakpoint(document, &scope).await {
                tracing::warn!("Breakpoint placement failed: {}", e);
            }
        }
        scope.filter
    }

    pub async fn get_class_name(&self) -> String {
        self.resolve_active()
            .await
            .1
            .map(|scope| scope.class_name)
            .unwrap_or_default()
    }

    pub async fn get_method_name(&self) -> String {
        self.resolve_active()
            .await
            .1
            .ok()
            .and_then(|scope| scope.method_name)
            .unwrap_or_default()
    }

    async fn resolve_active(&self) -> (Option<Document>, Result<ScopeInfo>) {
        let document = self.editor.active_document();
        let position = self.editor.cursor_position();
        let result = self.engine.try_resolve(document.as_ref(), position).await;
        (document, result)
    }

    async fn ensure_breakpoint(
        &self,
        document: &Document,
        scope: &ScopeInfo,
    ) -> Result<BreakpointOutcome> {
        if !self.engine.config().auto_breakpoint {
            return Ok(BreakpointOutcome::Skipped);
        }
        if scope.method_name.is_none() {
            return Ok(BreakpointOutcome::NoMethod);
        }
        let (Some(host), Some(provider)) = (self.breakpoints.as_ref(), self.engine.provider()) else {
            return Ok(BreakpointOutcome::Skipped);
        };

        let nodes = self.engine.cache().get(document, provider.as_ref()).await?;
        breakpoint::ensure_method_breakpoint(document, scope, &nodes, host.as_ref()).await
    }
}

/// Human-readable summary of a scope
pub fn describe(scope: &ScopeInfo) -> String {
    format!(
        "Assembly: {}\nNamespace: {}\nClass: {}\nMethod: {}\nFilter: {}",
        if scope.assembly.is_empty() {
            "(unknown)"
        } else {
            scope.assembly.as_str()
        },
        scope.namespace.as_deref().unwrap_or("(none)"),
        scope.class_name,
        scope.method_name.as_deref().unwrap_or("(none - class scope)"),
        scope.filter
    )
}

fn user_message(error: &Error) -> String {
    match error {
        Error::NoActiveContext => "No active editor".to_string(),
        Error::UnrecognizedDocumentKind(_) => "Current file is not a C# file".to_string(),
        Error::NoEnclosingClass => "Could not detect class name".to_string(),
        other => other.to_string(),
    }
}
