use serde::Serialize;

use super::position::{Position, Range};
use crate::impl_case_insensitive_deserialize;

/// The declaration kinds the engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolKind {
    Namespace,
    Class,
    Method,
    Other,
}

impl_case_insensitive_deserialize!(
    SymbolKind,
    Namespace => "namespace",
    Class => "class",
    Method => "method",
    Other => "other"
);

/// A node of the hierarchical symbol tree returned by a structural-information provider.
///
/// `range` covers the whole declaration including its body; `children` are in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct SymbolNode {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    #[serde(default)]
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SymbolNode>) -> Self {
        self.children = children;
        self
    }

    pub fn contains(&self, position: Position) -> bool {
        self.range.contains(position)
    }
}
