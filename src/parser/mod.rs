//! Lexing and unit name parsing for VHDL.
//!
//! There is no grammar here. The crate only needs declaration boundaries
//! and referenced names, so the layers stop at tokens:
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (keywords classified case-insensitively)
//!     ↓
//! SourceScanner (syntax::scanner) → DeclaredUnits with references
//! ```
//!
//! [`UnitReference`] parsing is shared by the scanner and by user selectors.

pub mod keywords;
mod lexer;
mod syntax_kind;
mod unit_name;

pub use lexer::{Lexer, Token, tokenize};
pub use syntax_kind::SyntaxKind;
pub use unit_name::{UnitReference, parse_unit_name};
