//! Configuration management for csharp-test-filter

mod settings;

pub use settings::{CONFIG_FILE_NAMES, Config};
