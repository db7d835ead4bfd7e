use async_trait::async_trait;

use super::{ResolvedScope, ScopeResolver, Strategy};
use crate::{
    error::Result,
    patterns,
    types::{Document, Position},
};

/// Resolves scopes by scanning the raw document text
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternScopeResolver;

impl PatternScopeResolver {
    pub fn resolve_lines(&self, lines: &[&str], line: usize) -> Option<ResolvedScope> {
        let class_name = patterns::find_class(lines, line)?;
        Some(ResolvedScope {
            namespace: patterns::find_namespace(lines),
            class_name,
            method_name: patterns::find_method(lines, line),
            strategy: Strategy::Patterns,
        })
    }
}

#[async_trait]
impl ScopeResolver for PatternScopeResolver {
    fn strategy(&self) -> Strategy {
        Strategy::Patterns
    }

    async fn resolve(
        &self,
        document: &Document,
        position: Position,
    ) -> Result<Option<ResolvedScope>> {
        let lines = document.lines();
        Ok(self.resolve_lines(&lines, position.line as usize))
    }
}
