use serde::{Deserialize, Serialize};

use crate::filter;

/// The resolved test scope under the cursor.
///
/// `filter` is derived from the other fields when the value is built. The only later change is
/// the sticky-filter override applied by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeInfo {
    pub assembly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    pub filter: String,
}

impl ScopeInfo {
    pub fn new(
        assembly: impl Into<String>,
        namespace: Option<String>,
        class_name: impl Into<String>,
        method_name: Option<String>,
    ) -> Self {
        let assembly = assembly.into();
        let class_name = class_name.into();
        let filter = filter::build(
            &assembly,
            namespace.as_deref(),
            &class_name,
            method_name.as_deref(),
        );
        Self {
            assembly,
            namespace,
            class_name,
            method_name,
            filter,
        }
    }

    /// Minimal scope carrying only a previously produced filter.
    ///
    /// Class and method names are recovered from the filter segments when possible.
    pub fn from_filter(filter: impl Into<String>) -> Self {
        let filter = filter.into();
        let segments = filter::parse(&filter);
        Self {
            assembly: String::new(),
            namespace: segments.as_ref().and_then(|s| s.namespace.clone()),
            class_name: segments
                .as_ref()
                .map(|s| s.class_name.clone())
                .unwrap_or_default(),
            method_name: segments.and_then(|s| s.method_name),
            filter,
        }
    }

    /// Replace the filter while keeping the current class metadata for display
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn is_method_level(&self) -> bool {
        self.method_name.is_some()
    }
}
