use crate::{
    error::{Error, Result},
    parser::symbol_extractor::SymbolExtractor,
    types::SymbolNode,
};
use tree_sitter::Parser;

pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<tree_sitter::Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Declarations of `source` as a symbol tree
    pub fn document_symbols(&mut self, source: &str) -> Result<Vec<SymbolNode>> {
        let tree = self.parse(source)?;
        SymbolExtractor::new(source).extract(&tree)
    }
}
