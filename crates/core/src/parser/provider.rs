use async_trait::async_trait;

use crate::{
    error::Result,
    interfaces::SymbolProvider,
    parser::CSharpParser,
    types::{Document, SymbolNode},
};

/// Symbol provider backed by the tree-sitter C# grammar
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterSymbolProvider;

#[async_trait]
impl SymbolProvider for TreeSitterSymbolProvider {
    async fn document_symbols(&self, document: &Document) -> Result<Vec<SymbolNode>> {
        let mut parser = CSharpParser::new()?;
        let symbols = parser.document_symbols(&document.text)?;
        tracing::debug!("Parsed {} top-level symbols from {}", symbols.len(), document.id());
        Ok(symbols)
    }
}
