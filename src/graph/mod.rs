//! From a populated catalog to an ordered file list.
//!
//! ```text
//! LibraryCatalog
//!     ↓ ArchitectureSelection::apply   (drop unselected architectures)
//! UnitFileList::build                  (file → file edges, unresolved references)
//!     ↓ sort                           (levels, stable order)
//! CompileOrder
//! ```

mod file_list;
mod order;
mod select;

pub use file_list::{FileRecord, UnitFileList, UnresolvedReference};
pub use order::{CompileOrder, OrderedFile, assign_levels, sort};
pub use select::ArchitectureSelection;
