//! Backward line scans that infer the enclosing class and method from raw text.
//!
//! The scans never build a syntax tree. Brace counting approximates "still inside the body of
//! the last declaration seen", which tolerates partial or invalid code.

use super::declarations;

/// Name of the closest class declared on or above `line`
pub fn find_class(lines: &[&str], line: usize) -> Option<String> {
    let cursor = clamp_line(lines, line)?;
    (0..=cursor)
        .rev()
        .find_map(|i| declarations::class_name(lines[i]))
        .map(str::to_string)
}

/// Name of the method whose body (or declaration line) contains `line`.
///
/// Scanning upward, `brace_balance` accumulates `close - open` for lines strictly above the
/// cursor. The first declaration met is remembered; it is returned once the balance turns
/// negative (the scan left its body through the opening brace) or when the class boundary is
/// reached. A class declaration met before any method, or on the cursor line, means the cursor
/// is at class level.
pub fn find_method(lines: &[&str], line: usize) -> Option<String> {
    let cursor = clamp_line(lines, line)?;
    let mut brace_balance: i64 = 0;
    let mut found: Option<&str> = None;
    let mut entered_body = false;

    for i in (0..=cursor).rev() {
        let text = lines[i].trim();

        if declarations::is_class_declaration(text) {
            if i == cursor || found.is_none() {
                tracing::trace!("Reached class boundary at line {} before any method", i);
                return None;
            }
            return found.map(str::to_string);
        }

        let (open, close) = count_braces(text);
        if i < cursor {
            brace_balance += close - open;
        }
        if brace_balance < 0 {
            entered_body = true;
            if let Some(name) = found {
                return Some(name.to_string());
            }
        }

        if found.is_none() {
            if let Some(name) = declarations::method_name(text) {
                if i == cursor {
                    return Some(name.to_string());
                }
                found = Some(name);
            }
        }
    }

    // Top of the document without a class boundary
    if entered_body {
        found.map(str::to_string)
    } else {
        None
    }
}

/// First namespace declared anywhere in the document
pub fn find_namespace(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| declarations::namespace_name(line))
        .map(str::to_string)
}

fn count_braces(text: &str) -> (i64, i64) {
    text.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}

fn clamp_line(lines: &[&str], line: usize) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }
    Some(line.min(lines.len() - 1))
}
