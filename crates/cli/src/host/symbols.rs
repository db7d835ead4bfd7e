use std::path::PathBuf;

use async_trait::async_trait;
use csharp_test_filter_core::{
    Document, Result, SymbolNode, SymbolProvider, symbols::parse_document_symbols,
};

/// Symbol provider replaying a saved LSP `textDocument/documentSymbol` response.
///
/// The same response is served for every document.
pub struct LspFileSymbolProvider {
    path: PathBuf,
}

impl LspFileSymbolProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SymbolProvider for LspFileSymbolProvider {
    async fn document_symbols(&self, _document: &Document) -> Result<Vec<SymbolNode>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_document_symbols(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csharp_test_filter_core::SymbolKind;

    #[tokio::test]
    async fn test_reads_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbols.json");
        std::fs::write(
            &path,
            r#"[{
                "name": "CalculatorTests",
                "kind": 5,
                "range": { "start": { "line": 2, "character": 0 }, "end": { "line": 10, "character": 1 } },
                "children": []
            }]"#,
        )
        .unwrap();

        let provider = LspFileSymbolProvider::new(&path);
        let document = Document::new("", "/src/CalculatorTests.cs", "csharp");
        let symbols = provider.document_symbols(&document).await.unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, SymbolKind::Class);
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let provider = LspFileSymbolProvider::new("/nonexistent/symbols.json");
        let document = Document::new("", "/src/A.cs", "csharp");
        assert!(provider.document_symbols(&document).await.is_err());
    }
}
