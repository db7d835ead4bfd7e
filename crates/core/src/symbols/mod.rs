//! Symbol-tree scope detection

pub mod lsp;
pub mod navigator;

pub use lsp::parse_document_symbols;
pub use navigator::{
    find_class_at_position, find_class_by_name, find_method_at_position, find_method_by_name,
    find_namespace,
};
