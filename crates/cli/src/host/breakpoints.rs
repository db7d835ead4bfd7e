use std::path::PathBuf;

use async_trait::async_trait;
use csharp_test_filter_core::{Breakpoint, BreakpointHost, Position, Result};
use tracing::debug;

/// Breakpoint list persisted as a JSON array of `{ "document_uri", "line" }` objects
pub struct JsonBreakpointStore {
    path: PathBuf,
}

impl JsonBreakpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BreakpointHost for JsonBreakpointStore {
    async fn list_breakpoints(&self) -> Result<Vec<Breakpoint>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn add_breakpoint(&self, document_uri: &str, position: Position) -> Result<()> {
        let mut breakpoints = self.list_breakpoints().await?;
        breakpoints.push(Breakpoint::new(document_uri, position.line));
        let content = serde_json::to_string_pretty(&breakpoints)?;
        tokio::fs::write(&self.path, content).await?;
        debug!(
            "Stored breakpoint {}:{} in {}",
            document_uri,
            position.line,
            self.path.display()
        );
        Ok(())
    }
}
