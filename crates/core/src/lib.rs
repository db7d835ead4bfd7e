//! csharp-test-filter - Resolve the C# test scope under the cursor into a test filter
//!
//! This crate provides functionality to:
//! - Locate the class and method enclosing a cursor position, from a symbol tree or raw text
//! - Build TUnit tree-node filters (`/*/{namespace}/{class}/{method}`) for that scope
//! - Keep the last method-level filter sticky and place a breakpoint in the resolved test
pub mod breakpoint;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod interfaces;
pub mod parser;
pub mod patterns;
pub mod resolver;
pub mod service;
pub mod sticky;
pub mod symbols;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use cache::SymbolCache;
pub use config::Config;
pub use engine::ScopeEngine;
pub use interfaces::{BreakpointHost, EditorHost, MessageLevel, Notifier, SymbolProvider};
pub use parser::TreeSitterSymbolProvider;
pub use service::TestFilterService;
pub use sticky::StickyFilter;
