//! Caching of provider symbol trees

pub mod symbol_cache;

// Re-export the main cache type
pub use symbol_cache::{DEFAULT_TTL, SymbolCache};
