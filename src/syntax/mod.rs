// Design unit model and the source scanner that produces it
pub mod scanner;
pub mod unit;

pub use scanner::{SourceScanner, scan_source};
pub use unit::{DeclaredUnit, Reference, ReferenceKind, UnitKey, UnitKind, UnitTag};

// Re-export Position from base for convenience
pub use crate::base::Position;
