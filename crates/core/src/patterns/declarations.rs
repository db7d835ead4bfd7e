//! Line-level declaration patterns for C# sources.
//!
//! Patterns are matched against a trimmed line and anchored at its start, so declarations
//! mentioned inside comments or expressions are not picked up.

use regex::Regex;
use std::sync::LazyLock;

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\[[^\]]*\]\s*)*(?:(?:public|private|internal|protected|static|abstract|sealed|partial|file|unsafe|new|readonly|ref)\s+)*(?:record\s+(?:class|struct)\s+|record\s+|class\s+|struct\s+|interface\s+)(?P<name>[A-Za-z_]\w*)",
    )
    .expect("Invalid regex")
});

static METHOD_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\[[^\]]*\]\s*)*(?:(?:public|private|internal|protected|static|async|virtual|override|abstract|sealed|new|extern|unsafe|partial|readonly)\s+)*(?P<ret>[A-Za-z_][\w.]*(?:<[^()]*>)?(?:\[\])*\??)\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^()]*>)?\s*\(",
    )
    .expect("Invalid regex")
});

static NAMESPACE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^namespace\s+(?P<name>[A-Za-z_][\w.]*)").expect("Invalid regex")
});

/// Words that can sit in the return-type or name slot of a statement that merely looks like
/// a method declaration (`else if (..)`, `return Foo(..)`, `throw new X(..)`).
const STATEMENT_KEYWORDS: &[&str] = &[
    "as", "await", "case", "catch", "class", "default", "do", "else", "for", "foreach", "goto",
    "if", "in", "is", "lock", "nameof", "namespace", "new", "return", "sizeof", "switch",
    "throw", "typeof", "using", "var", "when", "while", "yield",
];

/// Name of the type (class, record, struct or interface) declared on this line, if any
pub fn class_name(line: &str) -> Option<&str> {
    CLASS_DECLARATION
        .captures(line.trim())
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

pub fn is_class_declaration(line: &str) -> bool {
    class_name(line).is_some()
}

/// Name of the method declared on this line, if any
pub fn method_name(line: &str) -> Option<&str> {
    let caps = METHOD_DECLARATION.captures(line.trim())?;
    let return_type = caps.name("ret")?.as_str();
    let name = caps.name("name")?.as_str();
    if STATEMENT_KEYWORDS.contains(&return_type) || STATEMENT_KEYWORDS.contains(&name) {
        return None;
    }
    Some(name)
}

/// Dotted namespace declared on this line (block or file-scoped form)
pub fn namespace_name(line: &str) -> Option<&str> {
    NAMESPACE_DECLARATION
        .captures(line.trim())
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}
