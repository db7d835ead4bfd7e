use std::path::Path;

use anyhow::{Context, Result};
use csharp_test_filter_core::{Document, EditorHost, Position, utils::language_id_for_path};
use parking_lot::Mutex;
use tracing::debug;

use crate::utils::Location;

/// Editor whose active document is a file on disk
#[derive(Default)]
pub struct FileEditor {
    active: Mutex<Option<(Document, Position)>>,
}

impl FileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `location` the active document, re-reading the file from disk
    pub fn open(&self, location: &Location) -> Result<()> {
        let path = absolute(&location.path)?;
        if !path.exists() {
            return Err(anyhow::anyhow!("File not found: {}", path.display()));
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let language_id = language_id_for_path(&path);
        debug!(
            "Opened {} as {} at {}:{}",
            path.display(),
            language_id,
            location.position.line,
            location.position.character
        );

        *self.active.lock() = Some((Document::new(text, path, language_id), location.position));
        Ok(())
    }

    /// Leave the editor without an active document
    pub fn close(&self) {
        *self.active.lock() = None;
    }
}

impl EditorHost for FileEditor {
    fn active_document(&self) -> Option<Document> {
        self.active.lock().as_ref().map(|(document, _)| document.clone())
    }

    fn cursor_position(&self) -> Option<Position> {
        self.active.lock().as_ref().map(|(_, position)| *position)
    }
}

fn absolute(path: &Path) -> Result<std::path::PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
