//! Foundation types for the compile-order engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Index of a scanned source file in discovery order
//! - [`Name`] - Case-normalized VHDL identifier
//! - [`Position`] - Line/column of a declaration, for error messages
//! - Domain constants (file extensions, default library)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod file_id;
mod name;
mod position;

pub use file_id::FileId;
pub use name::{Name, is_valid_identifier, normalize};
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
