//! Last method-level filter, kept across resolutions

use parking_lot::Mutex;

/// Holds the most recent method-level filter.
///
/// Starts empty, is overwritten by every method-level resolution and is never cleared.
#[derive(Debug, Default)]
pub struct StickyFilter {
    value: Mutex<Option<String>>,
}

impl StickyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.value.lock().clone()
    }

    pub fn set(&self, filter: impl Into<String>) {
        *self.value.lock() = Some(filter.into());
    }

    pub fn is_set(&self) -> bool {
        self.value.lock().is_some()
    }
}
