use async_trait::async_trait;
use std::sync::Arc;

use super::{ResolvedScope, ScopeResolver, Strategy};
use crate::{
    cache::SymbolCache,
    error::Result,
    interfaces::SymbolProvider,
    symbols,
    types::{Document, Position},
};

/// Resolves scopes from the provider's symbol tree, going through the cache
pub struct SymbolScopeResolver {
    cache: Arc<SymbolCache>,
    provider: Arc<dyn SymbolProvider>,
}

impl SymbolScopeResolver {
    pub fn new(cache: Arc<SymbolCache>, provider: Arc<dyn SymbolProvider>) -> Self {
        Self { cache, provider }
    }
}

#[async_trait]
impl ScopeResolver for SymbolScopeResolver {
    fn strategy(&self) -> Strategy {
        Strategy::Symbols
    }

    async fn resolve(
        &self,
        document: &Document,
        position: Position,
    ) -> Result<Option<ResolvedScope>> {
        let nodes = self.cache.get(document, self.provider.as_ref()).await?;

        let Some(class_node) = symbols::find_class_at_position(&nodes, position) else {
            return Ok(None);
        };
        let method_name = symbols::find_method_at_position(class_node, position)
            .map(|method| method.name.clone());

        Ok(Some(ResolvedScope {
            namespace: symbols::find_namespace(&nodes).map(str::to_string),
            class_name: class_node.name.clone(),
            method_name,
            strategy: Strategy::Symbols,
        }))
    }
}
