//! # vhdl-order
//!
//! Compile-order discovery for VHDL source trees.
//!
//! Given a set of libraries and the files or directories that belong to each,
//! the crate scans every file for the design units it declares and the units
//! it references, builds a file dependency graph and returns the files in an
//! order in which each file comes after everything it depends on.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → OrderConfig, file walking, LibraryCatalog, compile_order()
//!   ↓
//! graph     → architecture selection, file dependency graph, levels/sort
//!   ↓
//! syntax    → DeclaredUnit/Reference model, source scanner
//!   ↓
//! parser    → Logos lexer, keyword table, unit name parser
//!   ↓
//! base      → Primitives (FileId, normalized Name, Position, constants)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use vhdl_order::{OrderConfig, compile_order};
//!
//! let config = OrderConfig::new()
//!     .with_path("ieee_proposed", "vendor/ieee_proposed")
//!     .with_default_path("rtl")
//!     .with_use_unit("adder(fast)");
//!
//! for file in compile_order(&config)?.iter() {
//!     println!("{} {} {}", file.level, file.library, file.path.display());
//! }
//! # Ok::<(), vhdl_order::OrderError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → graph → project)
// ============================================================================

/// Foundation types: FileId, Name, Position
pub mod base;

/// Crate error type
pub mod error;

/// Lexer, keywords and unit name parsing
pub mod parser;

/// Declared units, references and the source scanner
pub mod syntax;

/// Architecture selection, dependency graph and compile order
pub mod graph;

/// Configuration, file discovery, catalog and pipeline entry point
pub mod project;

// Re-export the types most callers need
pub use base::{FileId, Name, Position};
pub use error::{OrderError, Result};
pub use graph::{CompileOrder, OrderedFile, UnresolvedReference};
pub use parser::{UnitReference, parse_unit_name};
pub use project::{LibraryCatalog, OrderConfig, compile_order};
pub use syntax::{DeclaredUnit, UnitKind, scan_source};
