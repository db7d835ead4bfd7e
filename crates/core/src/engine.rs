//! Scope resolution entry point
//!
//! The engine prefers the symbol tree (through the cache) and falls back to text patterns when
//! the provider is missing or fails. It also owns the sticky filter.

use std::sync::Arc;

use crate::{
    cache::SymbolCache,
    config::Config,
    error::{Error, Result},
    interfaces::SymbolProvider,
    patterns,
    resolver::{PatternScopeResolver, ResolvedScope, ScopeResolver, SymbolScopeResolver},
    sticky::StickyFilter,
    types::{Document, Position, ScopeInfo},
};

pub struct ScopeEngine {
    config: Config,
    cache: Arc<SymbolCache>,
    sticky: Arc<StickyFilter>,
    provider: Option<Arc<dyn SymbolProvider>>,
}

impl ScopeEngine {
    /// Engine with fresh cache and sticky state and no symbol provider
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(SymbolCache::from_config(&config));
        Self {
            config,
            cache,
            sticky: Arc::new(StickyFilter::new()),
            provider: None,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn SymbolProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Share a cache between engines
    pub fn with_cache(mut self, cache: Arc<SymbolCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Share sticky state between engines
    pub fn with_sticky(mut self, sticky: Arc<StickyFilter>) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &Arc<SymbolCache> {
        &self.cache
    }

    pub fn sticky(&self) -> &Arc<StickyFilter> {
        &self.sticky
    }

    pub fn provider(&self) -> Option<&Arc<dyn SymbolProvider>> {
        self.provider.as_ref()
    }

    /// Resolve the scope at `position`, never failing.
    pub async fn resolve(
        &self,
        document: Option<&Document>,
        position: Option<Position>,
    ) -> Option<ScopeInfo> {
        match self.try_resolve(document, position).await {
            Ok(scope) => Some(scope),
            Err(e) => {
                tracing::debug!("No scope resolved: {}", e);
                None
            }
        }
    }

    /// Resolve the scope at `position`, reporting why nothing was found.
    ///
    /// Only [`Error::NoActiveContext`], [`Error::UnrecognizedDocumentKind`] and
    /// [`Error::NoEnclosingClass`] are returned; provider failures are absorbed by the fallback.
    pub async fn try_resolve(
        &self,
        document: Option<&Document>,
        position: Option<Position>,
    ) -> Result<ScopeInfo> {
        let (Some(document), Some(position)) = (document, position) else {
            return self.sticky_or(Error::NoActiveContext);
        };
        if !self.config.is_recognized_language(&document.language_id) {
            return self.sticky_or(Error::UnrecognizedDocumentKind(document.language_id.clone()));
        }

        let resolved = self.resolve_segments(document, position).await?;
        tracing::debug!(
            "Resolved {}::{:?} at {}:{} using {}",
            resolved.class_name,
            resolved.method_name,
            position.line,
            position.character,
            resolved.strategy
        );

        let assembly = patterns::extract_assembly(
            &document.id(),
            &self.config.test_project_markers,
            &self.config.fallback_assembly,
        );
        let scope = ScopeInfo::new(
            assembly,
            resolved.namespace,
            resolved.class_name,
            resolved.method_name,
        );
        Ok(self.apply_sticky(scope))
    }

    /// Run the strategies in order until one of them is able to answer
    async fn resolve_segments(
        &self,
        document: &Document,
        position: Position,
    ) -> Result<ResolvedScope> {
        let symbol_resolver = self
            .provider
            .as_ref()
            .map(|provider| SymbolScopeResolver::new(Arc::clone(&self.cache), Arc::clone(provider)));

        let mut chain: Vec<&dyn ScopeResolver> = Vec::with_capacity(2);
        if let Some(resolver) = symbol_resolver.as_ref() {
            chain.push(resolver);
        }
        chain.push(&PatternScopeResolver);

        for resolver in chain {
            match resolver.resolve(document, position).await {
                Ok(Some(resolved)) => return Ok(resolved),
                Ok(None) => return Err(Error::NoEnclosingClass),
                Err(e) => {
                    tracing::warn!(
                        "Scope resolution via {} failed, falling back: {}",
                        resolver.strategy(),
                        e
                    );
                }
            }
        }

        Err(Error::NoEnclosingClass)
    }

    fn sticky_or(&self, error: Error) -> Result<ScopeInfo> {
        match self.config.sticky_filter.then(|| self.sticky.get()).flatten() {
            Some(filter) => {
                tracing::debug!("{}; reusing sticky filter {}", error, filter);
                Ok(ScopeInfo::from_filter(filter))
            }
            None => Err(error),
        }
    }

    fn apply_sticky(&self, scope: ScopeInfo) -> ScopeInfo {
        if !self.config.sticky_filter {
            return scope;
        }
        if scope.is_method_level() {
            self.sticky.set(scope.filter.clone());
            return scope;
        }
        match self.sticky.get() {
            Some(filter) => {
                tracing::debug!(
                    "Class-level scope in {}, keeping sticky filter {}",
                    scope.class_name,
                    filter
                );
                scope.with_filter(filter)
            }
            None => scope,
        }
    }
}
