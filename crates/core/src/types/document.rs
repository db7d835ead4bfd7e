use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A text document as handed over by the host editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub path: PathBuf,
    pub language_id: String,
}

impl Document {
    pub fn new(text: impl Into<String>, path: impl Into<PathBuf>, language_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: path.into(),
            language_id: language_id.into(),
        }
    }

    /// Stable identity used as the cache key and breakpoint location
    pub fn id(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Lines of the document, indexed the same way as `Position::line`
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}
