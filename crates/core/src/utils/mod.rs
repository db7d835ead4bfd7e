pub mod file_type;
pub mod serde_helpers;

pub use file_type::{CSHARP_LANGUAGE_ID, language_id_for_path};
