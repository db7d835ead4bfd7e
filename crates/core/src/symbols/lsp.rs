//! Conversion of LSP `DocumentSymbol` payloads into [`SymbolNode`] trees

use serde::Deserialize;

use crate::{
    error::Result,
    types::{Range, SymbolKind, SymbolNode},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentSymbol {
    name: String,
    kind: u32,
    range: Range,
    #[serde(default)]
    children: Vec<DocumentSymbol>,
}

/// Map an LSP `SymbolKind` number onto the kinds the engine distinguishes
pub fn symbol_kind(kind: u32) -> SymbolKind {
    match kind {
        2 | 3 => SymbolKind::Namespace,
        5 | 11 | 23 => SymbolKind::Class,
        6 | 9 => SymbolKind::Method,
        _ => SymbolKind::Other,
    }
}

/// Parse a JSON array of LSP document symbols
pub fn parse_document_symbols(json: &str) -> Result<Vec<SymbolNode>> {
    let symbols: Vec<DocumentSymbol> = serde_json::from_str(json)?;
    Ok(symbols.into_iter().map(convert).collect())
}

fn convert(symbol: DocumentSymbol) -> SymbolNode {
    SymbolNode {
        name: symbol.name,
        kind: symbol_kind(symbol.kind),
        range: symbol.range,
        children: symbol.children.into_iter().map(convert).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_parse_document_symbols() {
        let json = r#"[
            {
                "name": "SampleTests",
                "kind": 3,
                "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 20, "character": 1 } },
                "selectionRange": { "start": { "line": 0, "character": 10 }, "end": { "line": 0, "character": 21 } },
                "children": [
                    {
                        "name": "CalculatorTests",
                        "detail": "SampleTests.CalculatorTests",
                        "kind": 5,
                        "range": { "start": { "line": 2, "character": 0 }, "end": { "line": 19, "character": 1 } },
                        "selectionRange": { "start": { "line": 2, "character": 13 }, "end": { "line": 2, "character": 28 } },
                        "children": [
                            {
                                "name": "Add_ShouldReturnCorrectSum",
                                "kind": 6,
                                "range": { "start": { "line": 4, "character": 4 }, "end": { "line": 9, "character": 5 } },
                                "selectionRange": { "start": { "line": 5, "character": 22 }, "end": { "line": 5, "character": 48 } }
                            },
                            {
                                "name": "_calculator",
                                "kind": 8,
                                "range": { "start": { "line": 3, "character": 4 }, "end": { "line": 3, "character": 40 } },
                                "selectionRange": { "start": { "line": 3, "character": 20 }, "end": { "line": 3, "character": 31 } }
                            }
                        ]
                    }
                ]
            }
        ]"#;

        let nodes = parse_document_symbols(json).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, SymbolKind::Namespace);

        let class = &nodes[0].children[0];
        assert_eq!(class.kind, SymbolKind::Class);
        assert_eq!(class.children[0].kind, SymbolKind::Method);
        assert_eq!(class.children[0].range.start, Position::new(4, 4));
        assert_eq!(class.children[1].kind, SymbolKind::Other);
    }

    #[test]
    fn test_symbol_kind_mapping() {
        assert_eq!(symbol_kind(2), SymbolKind::Namespace);
        assert_eq!(symbol_kind(23), SymbolKind::Class);
        assert_eq!(symbol_kind(9), SymbolKind::Method);
        assert_eq!(symbol_kind(12), SymbolKind::Other);
    }

    #[test]
    fn test_invalid_payload_is_an_error() {
        assert!(parse_document_symbols(r#"{"not": "an array"}"#).is_err());
    }
}
