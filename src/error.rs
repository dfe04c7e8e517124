//! Error types for the compile-order pipeline.
//!
//! Every variant aborts the whole run. Unresolved references are not errors;
//! they are collected on [`crate::graph::CompileOrder`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a compile order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A unit selector such as `lib.entity(arch)` could not be parsed.
    #[error("Invalid unit reference '{input}': {reason}")]
    InvalidUnitReference { input: String, reason: &'static str },

    /// The same unit is declared twice within one library.
    #[error(
        "Duplicate declaration of {unit} in library {library}: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateUnitDeclaration {
        library: String,
        unit: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The file dependency graph contains a cycle.
    #[error("Circular dependency detected at {}: {}", .path.display(), format_cycle(.cycle))]
    CyclicDependency { path: PathBuf, cycle: Vec<PathBuf> },

    /// A configured path could not be read or walked.
    #[error("Cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OrderError {
    /// Create an invalid unit reference error.
    pub fn invalid_reference(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidUnitReference {
            input: input.into(),
            reason,
        }
    }

    /// Create a file access error.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

fn format_cycle(cycle: &[PathBuf]) -> String {
    cycle
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrderError>;
