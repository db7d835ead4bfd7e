//! File-backed implementations of the engine's host interfaces

pub mod breakpoints;
pub mod editor;
pub mod notifier;
pub mod symbols;

pub use breakpoints::JsonBreakpointStore;
pub use editor::FileEditor;
pub use notifier::StderrNotifier;
pub use symbols::LspFileSymbolProvider;
