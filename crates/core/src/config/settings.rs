use crate::{
    error::{Error, Result},
    patterns::{DEFAULT_TEST_PROJECT_MARKERS, UNKNOWN_ASSEMBLY},
    utils::CSHARP_LANGUAGE_ID,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File names searched for when discovering a configuration file
pub const CONFIG_FILE_NAMES: &[&str] = &[".csharp-test-filter.json", "csharp-test-filter.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct Config {
    /// Maximum age of a cached symbol tree in milliseconds
    pub cache_ttl_ms: u64,
    /// Maximum number of documents kept in the symbol cache
    pub cache_capacity: usize,
    /// Language identifiers treated as C# sources
    pub language_ids: Vec<String>,
    /// Path fragments identifying a test project directory
    pub test_project_markers: Vec<String>,
    /// Assembly reported when none can be inferred from the path
    pub fallback_assembly: String,
    /// Keep returning the last method-level filter while the cursor sits at class level
    pub sticky_filter: bool,
    /// Insert a breakpoint into the resolved method when it has none
    pub auto_breakpoint: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: 5000,
            cache_capacity: 64,
            language_ids: vec![CSHARP_LANGUAGE_ID.to_string()],
            test_project_markers: DEFAULT_TEST_PROJECT_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
            fallback_assembly: UNKNOWN_ASSEMBLY.to_string(),
            sticky_filter: true,
            auto_breakpoint: true,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a configuration file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the configuration that applies to `start_path`, or the defaults if there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading configuration from {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No configuration found above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::ConfigError(
                "cache_capacity must be greater than zero".to_string(),
            ));
        }
        if self.language_ids.is_empty() {
            return Err(Error::ConfigError(
                "language_ids must name at least one language".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn is_recognized_language(&self, language_id: &str) -> bool {
        self.language_ids
            .iter()
            .any(|id| id.eq_ignore_ascii_case(language_id))
    }
}
