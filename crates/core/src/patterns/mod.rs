//! Text-pattern scope detection
//!
//! Stateless scans over the raw lines of a document, used when no symbol tree is available.

pub mod assembly;
pub mod declarations;
pub mod scanner;

pub use assembly::{DEFAULT_TEST_PROJECT_MARKERS, UNKNOWN_ASSEMBLY, extract_assembly};
pub use scanner::{find_class, find_method, find_namespace};
