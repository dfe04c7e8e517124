//! Token kinds produced by the lexer.
//!
//! Only the handful of keywords the scanner reacts to get their own kind;
//! every other VHDL reserved word lexes as [`SyntaxKind::RESERVED_KW`].

/// All token kinds in VHDL source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - skipped by the scanner)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,          // basic identifier
    EXTENDED_IDENT, // \extended identifier\
    STRING,         // "text" or an operator symbol like "+"
    CHAR,           // 'x'
    NUMBER,         // 42, 1.5e3, 16#FF#

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COLON_EQ,    // :=
    DOT,         // .
    COMMA,       // ,
    TICK,        // '
    PUNCT,       // any other operator or delimiter

    // =========================================================================
    // KEYWORDS the scanner reacts to
    // =========================================================================
    ARCHITECTURE_KW,
    BODY_KW,
    COMPONENT_KW,
    CONFIGURATION_KW,
    END_KW,
    ENTITY_KW,
    FUNCTION_KW,
    GENERIC_KW,
    IS_KW,
    LIBRARY_KW,
    MAP_KW,
    NEW_KW,
    OF_KW,
    PACKAGE_KW,
    PORT_KW,
    PROCEDURE_KW,
    USE_KW,

    /// Any other reserved word (`if`, `process`, `all`, ...).
    RESERVED_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this token can name a unit, library or architecture
    pub fn is_name(self) -> bool {
        matches!(self, Self::IDENT | Self::EXTENDED_IDENT)
    }
}
