use serde::{Deserialize, Serialize};

/// A source breakpoint known to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub document_uri: String,
    pub line: u32,
}

impl Breakpoint {
    pub fn new(document_uri: impl Into<String>, line: u32) -> Self {
        Self {
            document_uri: document_uri.into(),
            line,
        }
    }
}
