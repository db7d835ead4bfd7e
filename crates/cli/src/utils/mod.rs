pub mod parser;

pub use parser::{Location, parse_location};
