pub mod csharp_parser;
pub mod provider;
pub mod symbol_extractor;
pub mod utils;

pub use csharp_parser::CSharpParser;
pub use provider::TreeSitterSymbolProvider;
