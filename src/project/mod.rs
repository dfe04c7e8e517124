//! Project management: configuration, file discovery, catalog population and
//! the pipeline that ties them to the graph stage.

pub mod catalog;
pub mod config;
pub mod file_loader;

pub use catalog::{LibraryCatalog, SourceFile};
pub use config::OrderConfig;

use tracing::{debug, warn};

use crate::base::Name;
use crate::base::constants::WORK_LIBRARY;
use crate::error::Result;
use crate::graph::{self, ArchitectureSelection, CompileOrder, UnitFileList};
use crate::parser::UnitReference;

/// Compute the compile order for `config`.
///
/// Selectors are validated before any file is touched. Unresolved references
/// are logged and returned on the [`CompileOrder`]; every other problem
/// aborts the run.
pub fn compile_order(config: &OrderConfig) -> Result<CompileOrder> {
    let selection = ArchitectureSelection::from_selectors(config.use_units.as_slice(), &config.default_library)?;
    let tops = config
        .top_units
        .iter()
        .map(|selector| UnitReference::parse(selector))
        .collect::<Result<Vec<_>>>()?;

    let mut catalog = LibraryCatalog::populate(config)?;
    selection.apply(&mut catalog);
    check_top_units(&catalog, &tops);

    let list = UnitFileList::build(&catalog);
    for unresolved in list.unresolved() {
        match unresolved.library.as_str() {
            // Standard libraries are never part of the scanned set.
            "STD" | "IEEE" => debug!("Unresolved reference: {}", unresolved),
            _ => warn!("Unresolved reference: {}", unresolved),
        }
    }

    graph::sort(list)
}

/// Warn about top-level selectors that name no declared unit.
fn check_top_units(catalog: &LibraryCatalog, tops: &[UnitReference]) {
    for top in tops {
        let library: &Name = match top.library() {
            Some(library) if library != WORK_LIBRARY => library,
            _ => catalog.default_library(),
        };
        let found = catalog.library(library).iter().any(|unit| {
            unit.primary_name() == top.name()
                && top
                    .architecture()
                    .is_none_or(|arch| unit.architecture_name() == Some(arch))
        });
        if found {
            debug!("Top unit {} found in library {}", top, library);
        } else {
            warn!("Top unit {} is not declared in library {}", top, library);
        }
    }
}
