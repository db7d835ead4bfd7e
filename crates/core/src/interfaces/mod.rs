//! Host capability interfaces
//!
//! The engine never talks to an editor directly. Hosts implement these traits to hand over the
//! active document, the symbol tree of a document, breakpoints and user notifications.

pub mod breakpoints;
pub mod editor;
pub mod notifier;
pub mod symbol_provider;

pub use breakpoints::BreakpointHost;
pub use editor::EditorHost;
pub use notifier::{MessageLevel, Notifier, TracingNotifier};
pub use symbol_provider::SymbolProvider;
