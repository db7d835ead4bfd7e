use std::path::PathBuf;

use csharp_test_filter_core::Position;

/// A `FILE[:LINE[:COL]]` argument, converted to a 0-indexed position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub position: Position,
}

/// Parse `FILE[:LINE[:COL]]` where LINE and COL are 1-based.
///
/// A missing line points at the start of the file. Components that are not numbers are kept as
/// part of the path, so `C:\tests\A.cs` stays intact.
pub fn parse_location(arg: &str) -> Location {
    let (rest, last) = split_number(arg);
    let (path, line, column) = match last {
        Some(last) => match split_number(rest) {
            (path, Some(line)) => (path, line, last),
            (path, None) => (path, last, 1),
        },
        None => (arg, 1, 1),
    };

    Location {
        path: PathBuf::from(path),
        // Convert 1-based to 0-based
        position: Position::new(line.saturating_sub(1), column.saturating_sub(1)),
    }
}

fn split_number(arg: &str) -> (&str, Option<u32>) {
    if let Some(colon_pos) = arg.rfind(':') {
        let head = &arg[..colon_pos];
        if let Ok(number) = arg[colon_pos + 1..].parse::<u32>() {
            if !head.is_empty() {
                return (head, Some(number));
            }
        }
    }
    (arg, None)
}
