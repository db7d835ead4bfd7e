use std::{path::Path, sync::Arc};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use crate::{
    cli::GlobalOptions, commands::build_service, host::FileEditor, utils::parse_location,
};

/// Answer `FILE[:LINE[:COL]]` requests from stdin with one filter per line.
///
/// The engine lives for the whole session, so the symbol cache and the sticky filter carry
/// over between requests. A file that cannot be opened leaves the editor empty for that request.
pub async fn session_command(options: &GlobalOptions, breakpoints: Option<&Path>) -> Result<()> {
    let editor = Arc::new(FileEditor::new());
    let cwd = std::env::current_dir()?;
    let service = build_service(options, editor.clone(), &cwd, breakpoints)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let location = parse_location(request);
        if let Err(e) = editor.open(&location) {
            warn!("{:#}", e);
            editor.close();
        }

        let filter = service.get_filter().await;
        debug!("{} -> {:?}", request, filter);
        stdout.write_all(filter.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
