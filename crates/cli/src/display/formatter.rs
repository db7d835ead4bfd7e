use anyhow::Result;
use csharp_test_filter_core::{ScopeInfo, service::describe};

/// Render a scope for the terminal, either as a summary or as JSON
pub fn format_scope(scope: &ScopeInfo, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(scope)?)
    } else {
        Ok(describe(scope))
    }
}
