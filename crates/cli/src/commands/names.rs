use std::sync::Arc;

use anyhow::Result;

use crate::{
    cli::GlobalOptions, commands::build_service, host::FileEditor, utils::parse_location,
};

pub async fn class_command(options: &GlobalOptions, location_arg: &str) -> Result<()> {
    let location = parse_location(location_arg);
    let editor = Arc::new(FileEditor::new());
    editor.open(&location)?;
    let service = build_service(options, editor, &location.path, None)?;

    println!("{}", service.get_class_name().await);
    Ok(())
}

pub async fn method_command(options: &GlobalOptions, location_arg: &str) -> Result<()> {
    let location = parse_location(location_arg);
    let editor = Arc::new(FileEditor::new());
    editor.open(&location)?;
    let service = build_service(options, editor, &location.path, None)?;

    println!("{}", service.get_method_name().await);
    Ok(())
}
