//! Library unit catalog.
//!
//! Collects every [`DeclaredUnit`] found under the configured paths, grouped
//! by library in discovery order, and records which file each unit came from.
//! Population is the only place units are added; later stages may only
//! remove them (see [`LibraryCatalog::retain`]).

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::config::OrderConfig;
use super::file_loader;
use crate::base::{FileId, Name};
use crate::error::{OrderError, Result};
use crate::syntax::{DeclaredUnit, UnitKey, scan_source};

/// A file registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    /// Library the file was scanned into.
    pub library: Name,
}

/// All declared units across all libraries.
#[derive(Debug, Clone, Default)]
pub struct LibraryCatalog {
    default_library: Name,
    /// Every scanned file, indexed by [`FileId`].
    files: Vec<SourceFile>,
    by_path: FxHashMap<PathBuf, FileId>,
    /// Library → units in discovery order.
    libraries: IndexMap<Name, Vec<DeclaredUnit>>,
    /// (library, unit key) → declaring file, for duplicate detection.
    declared: FxHashMap<(Name, UnitKey), FileId>,
}

impl LibraryCatalog {
    pub fn new(default_library: Name) -> Self {
        Self {
            default_library,
            ..Self::default()
        }
    }

    /// Walk and scan every configured path.
    ///
    /// Paths are expanded in configuration order and each file is scanned
    /// once. With `config.parallel` the scans run on the rayon pool; their
    /// results are merged back in discovery order, so duplicate detection and
    /// the first reported error do not depend on scheduling.
    pub fn populate(config: &OrderConfig) -> Result<Self> {
        let mut catalog = Self::new(config.default_library.clone());

        let mut jobs: Vec<(FileId, PathBuf, Name)> = Vec::new();
        for (library, paths) in &config.libraries {
            catalog.libraries.entry(library.clone()).or_default();
            for path in paths {
                for file in file_loader::collect_file_paths(path, &config.extensions)? {
                    if let Some(id) = catalog.register_file(file.clone(), library.clone()) {
                        jobs.push((id, file, library.clone()));
                    }
                }
            }
        }

        let scan = |(id, path, library): &(FileId, PathBuf, Name)| -> Result<Vec<DeclaredUnit>> {
            let text = file_loader::load_file(path)?;
            let units = scan_source(&text, library, *id);
            debug!("Scanned {}: {} unit(s)", path.display(), units.len());
            Ok(units)
        };

        let results: Vec<Result<Vec<DeclaredUnit>>> = if config.parallel {
            jobs.par_iter().map(scan).collect()
        } else {
            jobs.iter().map(scan).collect()
        };

        for units in results {
            catalog.add_units(units?)?;
        }

        debug!(
            "Catalog: {} file(s), {} unit(s) in {} librar(ies)",
            catalog.files.len(),
            catalog.len(),
            catalog.libraries.len()
        );
        Ok(catalog)
    }

    /// Register a file under `library`. Returns `None` if the path was
    /// already registered, compared after [`file_loader::normalize_path`];
    /// it keeps its first library.
    pub fn register_file(&mut self, path: PathBuf, library: Name) -> Option<FileId> {
        let key = file_loader::normalize_path(&path);
        if let Some(existing) = self.by_path.get(&key) {
            warn!(
                "{} listed more than once; keeping it in library {}",
                path.display(),
                self.files[existing.index()].library
            );
            return None;
        }

        let id = FileId::new(self.files.len());
        self.by_path.insert(key, id);
        self.libraries.entry(library.clone()).or_default();
        self.files.push(SourceFile { id, path, library });
        Some(id)
    }

    /// Append scanned units, rejecting a second declaration of the same unit
    /// within one library.
    pub fn add_units(&mut self, units: Vec<DeclaredUnit>) -> Result<()> {
        for unit in units {
            let key = (unit.library.clone(), unit.key());
            if let Some(first) = self.declared.get(&key) {
                return Err(OrderError::DuplicateUnitDeclaration {
                    library: unit.library.to_string(),
                    unit: unit.to_string(),
                    first: self.files[first.index()].path.clone(),
                    second: self.files[unit.file.index()].path.clone(),
                });
            }
            self.declared.insert(key, unit.file);
            self.libraries
                .entry(unit.library.clone())
                .or_default()
                .push(unit);
        }
        Ok(())
    }

    /// Register and scan in-memory source text.
    pub fn add_source(&mut self, path: impl Into<PathBuf>, library: &Name, text: &str) -> Result<Option<FileId>> {
        let Some(id) = self.register_file(path.into(), library.clone()) else {
            return Ok(None);
        };
        self.add_units(scan_source(text, library, id))?;
        Ok(Some(id))
    }

    /// Keep only the units for which `keep` returns true.
    ///
    /// Files stay registered even when all their units are removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&DeclaredUnit) -> bool) {
        let declared = &mut self.declared;
        for units in self.libraries.values_mut() {
            units.retain(|unit| {
                let kept = keep(unit);
                if !kept {
                    declared.remove(&(unit.library.clone(), unit.key()));
                }
                kept
            });
        }
    }

    pub fn default_library(&self) -> &Name {
        &self.default_library
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    pub fn path(&self, id: FileId) -> &Path {
        &self.files[id.index()].path
    }

    /// Library names in the order they were first configured or seen.
    pub fn library_names(&self) -> impl Iterator<Item = &Name> {
        self.libraries.keys()
    }

    /// Units of one library in discovery order (empty if unknown).
    pub fn library(&self, name: &str) -> &[DeclaredUnit] {
        self.libraries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All units, library by library.
    pub fn units(&self) -> impl Iterator<Item = &DeclaredUnit> {
        self.libraries.values().flatten()
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.libraries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
