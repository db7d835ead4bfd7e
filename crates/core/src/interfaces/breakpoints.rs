//! Debugger breakpoint interface

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Breakpoint, Position},
};

/// Breakpoint storage of the host debugger
#[async_trait]
pub trait BreakpointHost: Send + Sync {
    async fn list_breakpoints(&self) -> Result<Vec<Breakpoint>>;

    async fn add_breakpoint(&self, document_uri: &str, position: Position) -> Result<()>;
}
