pub mod breakpoint;
pub mod document;
pub mod position;
pub mod scope;
pub mod symbol;

// Re-export commonly used types
pub use breakpoint::Breakpoint;
pub use document::Document;
pub use position::{Position, Range};
pub use scope::ScopeInfo;
pub use symbol::{SymbolKind, SymbolNode};
