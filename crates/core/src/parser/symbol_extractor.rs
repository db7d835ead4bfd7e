//! Builds a [`SymbolNode`] tree from a C# syntax tree

use super::utils::{node_to_position, node_to_range};
use crate::{
    error::{Error, Result},
    types::{Range, SymbolKind, SymbolNode},
};
use tree_sitter::{Node, Tree};

pub struct SymbolExtractor<'a> {
    source: &'a str,
}

impl<'a> SymbolExtractor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn extract(&self, tree: &Tree) -> Result<Vec<SymbolNode>> {
        let mut symbols = Vec::new();
        self.visit_children(&tree.root_node(), &mut symbols)?;
        Ok(symbols)
    }

    fn visit_children(&self, node: &Node, symbols: &mut Vec<SymbolNode>) -> Result<()> {
        let children: Vec<Node> = node.named_children(&mut node.walk()).collect();

        for (index, child) in children.iter().enumerate() {
            match child.kind() {
                "namespace_declaration" => {
                    let mut members = Vec::new();
                    self.visit_children(child, &mut members)?;
                    let namespace = self.symbol(child, SymbolKind::Namespace, node_to_range(child))?;
                    symbols.push(namespace.with_children(members));
                }
                "file_scoped_namespace_declaration" => {
                    // Members may be nested in the declaration or follow it as siblings
                    let mut members = Vec::new();
                    self.visit_children(child, &mut members)?;
                    for sibling in &children[index + 1..] {
                        self.visit_node(sibling, &mut members)?;
                    }
                    let range =
                        Range::new(node_to_position(child, true), node_to_position(node, false));
                    let namespace = self.symbol(child, SymbolKind::Namespace, range)?;
                    symbols.push(namespace.with_children(members));
                    return Ok(());
                }
                _ => self.visit_node(child, symbols)?,
            }
        }

        Ok(())
    }

    fn visit_node(&self, node: &Node, symbols: &mut Vec<SymbolNode>) -> Result<()> {
        match node.kind() {
            "class_declaration" | "record_declaration" | "struct_declaration"
            | "interface_declaration" => {
                let mut members = Vec::new();
                self.visit_children(node, &mut members)?;
                let class = self.symbol(node, SymbolKind::Class, node_to_range(node))?;
                symbols.push(class.with_children(members));
            }
            "method_declaration" | "constructor_declaration" => {
                symbols.push(self.symbol(node, SymbolKind::Method, node_to_range(node))?);
            }
            // Local functions belong to the body of their method
            "local_function_statement" => {}
            _ => self.visit_children(node, symbols)?,
        }
        Ok(())
    }

    fn symbol(&self, node: &Node, kind: SymbolKind, range: Range) -> Result<SymbolNode> {
        let name_node = node
            .child_by_field_name("name")
            .ok_or_else(|| Error::ParseError(format!("{} without name", node.kind())))?;

        let name = name_node
            .utf8_text(self.source.as_bytes())
            .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in declaration name: {e}")))?
            .to_string();

        Ok(SymbolNode::new(name, kind, range))
    }
}
