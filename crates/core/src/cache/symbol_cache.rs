use crate::{
    config::Config,
    error::{Error, Result},
    interfaces::SymbolProvider,
    types::{Document, SymbolNode},
};
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Default time a symbol tree stays fresh
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// Time-bounded cache of symbol trees keyed by document identity.
///
/// The lock is never held across a provider request, so two concurrent misses for the same
/// document both fetch and the last write wins.
#[derive(Debug)]
pub struct SymbolCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    symbols: Arc<Vec<SymbolNode>>,
    timestamp: Instant,
}

impl Default for SymbolCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl SymbolCache {
    pub fn new(ttl: Duration, capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(DEFAULT_CAPACITY);
        Self::new(config.cache_ttl(), capacity)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached symbols for `document_id` if the entry is younger than the TTL
    pub fn cached(&self, document_id: &str) -> Option<Arc<Vec<SymbolNode>>> {
        let mut entries = self.entries.lock();
        let entry = entries.get(document_id)?;
        if entry.timestamp.elapsed() < self.ttl {
            Some(Arc::clone(&entry.symbols))
        } else {
            None
        }
    }

    /// Symbols for `document`, fetched from `provider` when no fresh entry exists.
    ///
    /// A failed or empty fetch leaves the cache untouched and is reported as
    /// [`Error::ProviderUnavailable`].
    pub async fn get(
        &self,
        document: &Document,
        provider: &dyn SymbolProvider,
    ) -> Result<Arc<Vec<SymbolNode>>> {
        let document_id = document.id();
        if let Some(symbols) = self.cached(&document_id) {
            tracing::debug!("Symbol cache hit for {}", document_id);
            return Ok(symbols);
        }

        tracing::debug!("Symbol cache miss for {}, requesting symbols", document_id);
        let symbols = provider
            .document_symbols(document)
            .await
            .map_err(|e| match e {
                Error::ProviderUnavailable(_) => e,
                other => Error::ProviderUnavailable(other.to_string()),
            })?;

        if symbols.is_empty() {
            return Err(Error::ProviderUnavailable(format!(
                "no symbols returned for {document_id}"
            )));
        }

        let symbols = Arc::new(symbols);
        self.entries.lock().put(
            document_id,
            CacheEntry {
                symbols: Arc::clone(&symbols),
                timestamp: Instant::now(),
            },
        );
        Ok(symbols)
    }

    pub fn invalidate(&self, document_id: &str) {
        self.entries.lock().pop(document_id);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
