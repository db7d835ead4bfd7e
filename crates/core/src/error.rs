use std::io;

/// Errors that can occur while resolving a test scope
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No active editor or cursor position")]
    NoActiveContext,

    #[error("Current document is not a recognized source file (language: {0})")]
    UnrecognizedDocumentKind(String),

    #[error("Structural information unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Could not detect an enclosing class")]
    NoEnclosingClass,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for scope resolution operations
pub type Result<T> = std::result::Result<T, Error>;
