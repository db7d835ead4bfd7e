//! Scope resolution strategies
//!
//! Both strategies answer "which class and method contain this position". The engine tries
//! them in order and falls back when a strategy reports itself unavailable.

pub mod pattern_resolver;
pub mod symbol_resolver;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    error::Result,
    types::{Document, Position},
};

pub use pattern_resolver::PatternScopeResolver;
pub use symbol_resolver::SymbolScopeResolver;

/// Which strategy produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    Symbols,
    Patterns,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Symbols => write!(f, "symbols"),
            Strategy::Patterns => write!(f, "patterns"),
        }
    }
}

/// Scope segments found by a strategy, before the assembly and filter are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
    pub namespace: Option<String>,
    pub class_name: String,
    pub method_name: Option<String>,
    pub strategy: Strategy,
}

/// A way of locating the class and method enclosing a position.
///
/// `Err` means the strategy could not run and the caller should try the next one.
/// `Ok(None)` means it ran and found no enclosing class.
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    fn strategy(&self) -> Strategy;

    async fn resolve(&self, document: &Document, position: Position)
    -> Result<Option<ResolvedScope>>;
}
