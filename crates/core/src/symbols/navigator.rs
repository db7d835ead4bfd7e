//! Searches over a provider-supplied symbol tree.
//!
//! Traversal is depth-first and visits a node before its children, matching source order.

use crate::types::{Position, SymbolKind, SymbolNode};

/// Name of the first namespace in pre-order
pub fn find_namespace(nodes: &[SymbolNode]) -> Option<&str> {
    nodes.iter().find_map(|node| {
        if node.kind == SymbolKind::Namespace {
            Some(node.name.as_str())
        } else {
            find_namespace(&node.children)
        }
    })
}

/// Innermost class whose range contains `position`.
///
/// Children are searched before the node itself so a nested class wins over its outer class.
pub fn find_class_at_position(nodes: &[SymbolNode], position: Position) -> Option<&SymbolNode> {
    for node in nodes {
        if let Some(inner) = find_class_at_position(&node.children, position) {
            return Some(inner);
        }
        if node.kind == SymbolKind::Class && node.contains(position) {
            return Some(node);
        }
    }
    None
}

/// Method declared directly in `class_node` whose range contains `position`.
///
/// Methods of nested classes are not considered.
pub fn find_method_at_position(class_node: &SymbolNode, position: Position) -> Option<&SymbolNode> {
    class_node
        .children
        .iter()
        .find(|child| child.kind == SymbolKind::Method && child.contains(position))
}

/// First class named `name` in pre-order
pub fn find_class_by_name<'a>(nodes: &'a [SymbolNode], name: &str) -> Option<&'a SymbolNode> {
    nodes.iter().find_map(|node| {
        if node.kind == SymbolKind::Class && node.name == name {
            Some(node)
        } else {
            find_class_by_name(&node.children, name)
        }
    })
}

/// Method named `name` declared directly in `class_node`
pub fn find_method_by_name<'a>(class_node: &'a SymbolNode, name: &str) -> Option<&'a SymbolNode> {
    class_node
        .children
        .iter()
        .find(|child| child.kind == SymbolKind::Method && child.name == name)
}
