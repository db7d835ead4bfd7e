use std::path::Path;

/// Language identifier hosts use for C# documents
pub const CSHARP_LANGUAGE_ID: &str = "csharp";

/// Detect the language identifier of a document from its file extension
pub fn language_id_for_path(file_path: &Path) -> String {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let language_id = match extension.as_deref() {
        Some("cs") | Some("csx") => CSHARP_LANGUAGE_ID.to_string(),
        Some(other) => other.to_string(),
        None => "plaintext".to_string(),
    };
    tracing::trace!("Detected language '{}' for {:?}", language_id, file_path);
    language_id
}
