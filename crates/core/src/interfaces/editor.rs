//! Active editor interface

use crate::types::{Document, Position};

/// Access to the host's active editor
pub trait EditorHost: Send + Sync {
    /// The document shown in the active editor, if any
    fn active_document(&self) -> Option<Document>;

    /// The cursor position in the active editor
    fn cursor_position(&self) -> Option<Position>;
}
