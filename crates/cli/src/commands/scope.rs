use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::GlobalOptions, commands::build_service, display::format_scope, host::FileEditor,
    utils::parse_location,
};

pub async fn scope_command(options: &GlobalOptions, location_arg: &str, json: bool) -> Result<()> {
    debug!("Resolving scope at {}", location_arg);
    let location = parse_location(location_arg);

    let editor = Arc::new(FileEditor::new());
    editor.open(&location)?;
    let service = build_service(options, editor, &location.path, None)?;

    match service.get_scope().await {
        Some(scope) => {
            println!("{}", format_scope(&scope, json)?);
            Ok(())
        }
        None => Err(anyhow::anyhow!("No test scope found at {}", location_arg)),
    }
}
