pub mod filter;
pub mod names;
pub mod scope;
pub mod session;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use csharp_test_filter_core::{
    Config, EditorHost, ScopeEngine, TestFilterService, TreeSitterSymbolProvider,
};
use tracing::debug;

use crate::{
    cli::GlobalOptions,
    host::{JsonBreakpointStore, LspFileSymbolProvider, StderrNotifier},
};

pub use filter::filter_command;
pub use names::{class_command, method_command};
pub use scope::scope_command;
pub use session::session_command;

/// Load the configuration that applies to `start_path`, or the one named on the command line
pub fn load_config(options: &GlobalOptions, start_path: &Path) -> Result<Config> {
    let config = match &options.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::discover(start_path)?,
    };
    debug!("Using configuration: {:?}", config);
    Ok(config)
}

/// Wire the engine and host adapters together
pub fn build_service(
    options: &GlobalOptions,
    editor: Arc<dyn EditorHost>,
    start_path: &Path,
    breakpoints: Option<&Path>,
) -> Result<TestFilterService> {
    let config = load_config(options, start_path)?;
    let mut engine = ScopeEngine::new(config);

    if let Some(symbols) = &options.symbols {
        engine = engine.with_provider(Arc::new(LspFileSymbolProvider::new(symbols)));
    } else if !options.no_symbols {
        engine = engine.with_provider(Arc::new(TreeSitterSymbolProvider));
    }

    let mut service = TestFilterService::new(editor, engine)
        .with_notifier(Arc::new(StderrNotifier::new(options.quiet)));
    if let Some(path) = breakpoints {
        service = service.with_breakpoints(Arc::new(JsonBreakpointStore::new(path)));
    }
    Ok(service)
}
