//! VHDL reserved words.
//!
//! Keywords are case-insensitive. [`lookup`] maps an identifier-shaped token
//! to its keyword kind, or `None` if it is an ordinary identifier.

use super::syntax_kind::SyntaxKind;

/// All VHDL-2008 reserved words, lowercase.
pub const RESERVED_WORDS: &[&str] = &[
    "abs", "access", "after", "alias", "all", "and", "architecture", "array", "assert", "assume",
    "assume_guarantee", "attribute", "begin", "block", "body", "buffer", "bus", "case",
    "component", "configuration", "constant", "context", "cover", "default", "disconnect",
    "downto", "else", "elsif", "end", "entity", "exit", "fairness", "file", "for", "force",
    "function", "generate", "generic", "group", "guarded", "if", "impure", "in", "inertial",
    "inout", "is", "label", "library", "linkage", "literal", "loop", "map", "mod", "nand", "new",
    "next", "nor", "not", "null", "of", "on", "open", "or", "others", "out", "package",
    "parameter", "port", "postponed", "procedure", "process", "property", "protected", "pure",
    "range", "record", "register", "reject", "release", "rem", "report", "restrict",
    "restrict_guarantee", "return", "rol", "ror", "select", "sequence", "severity", "shared",
    "signal", "sla", "sll", "sra", "srl", "strong", "subtype", "then", "to", "transport",
    "type", "unaffected", "units", "until", "use", "variable", "vmode", "vprop", "vunit", "wait",
    "when", "while", "with", "xnor", "xor",
];

const LONGEST_RESERVED: usize = 18;

/// Classify an identifier as a keyword, ignoring ASCII case.
pub fn lookup(text: &str) -> Option<SyntaxKind> {
    if text.len() > LONGEST_RESERVED || !text.is_ascii() {
        return None;
    }
    let lower = text.to_ascii_lowercase();
    let kind = match lower.as_str() {
        "architecture" => SyntaxKind::ARCHITECTURE_KW,
        "body" => SyntaxKind::BODY_KW,
        "component" => SyntaxKind::COMPONENT_KW,
        "configuration" => SyntaxKind::CONFIGURATION_KW,
        "end" => SyntaxKind::END_KW,
        "entity" => SyntaxKind::ENTITY_KW,
        "function" => SyntaxKind::FUNCTION_KW,
        "generic" => SyntaxKind::GENERIC_KW,
        "is" => SyntaxKind::IS_KW,
        "library" => SyntaxKind::LIBRARY_KW,
        "map" => SyntaxKind::MAP_KW,
        "new" => SyntaxKind::NEW_KW,
        "of" => SyntaxKind::OF_KW,
        "package" => SyntaxKind::PACKAGE_KW,
        "port" => SyntaxKind::PORT_KW,
        "procedure" => SyntaxKind::PROCEDURE_KW,
        "use" => SyntaxKind::USE_KW,
        other if RESERVED_WORDS.binary_search(&other).is_ok() => SyntaxKind::RESERVED_KW,
        _ => return None,
    };
    Some(kind)
}
