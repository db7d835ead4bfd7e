use std::{path::Path, sync::Arc};

use anyhow::Result;
use tracing::debug;

use crate::{
    cli::GlobalOptions, commands::build_service, host::FileEditor, utils::parse_location,
};

/// Print the filter at a location; an empty line when nothing resolves
pub async fn filter_command(
    options: &GlobalOptions,
    location_arg: &str,
    breakpoints: Option<&Path>,
) -> Result<()> {
    debug!("Resolving filter at {}", location_arg);
    let location = parse_location(location_arg);

    let editor = Arc::new(FileEditor::new());
    editor.open(&location)?;
    let service = build_service(options, editor, &location.path, breakpoints)?;

    println!("{}", service.get_filter().await);
    Ok(())
}
