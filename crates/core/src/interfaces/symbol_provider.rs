//! Structural-information provider interface

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Document, SymbolNode},
};

/// Source of hierarchical symbol trees, typically a language server.
///
/// Requests may suspend and may fail; callers treat failure as "no symbol data".
#[async_trait]
pub trait SymbolProvider: Send + Sync {
    async fn document_symbols(&self, document: &Document) -> Result<Vec<SymbolNode>>;
}
