//! File dependency graph.
//!
//! Turns the unit-level references of a [`LibraryCatalog`] into file-level
//! edges: file A depends on file B when a unit declared in A references a
//! unit declared in B. Edges are deduplicated and never point back at the
//! file itself.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::constants::WORK_LIBRARY;
use crate::base::{FileId, Name};
use crate::project::LibraryCatalog;
use crate::syntax::{DeclaredUnit, Reference};

/// One source file with the units it declares and the files it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub path: PathBuf,
    pub library: Name,
    /// Declared units in source order.
    pub units: Vec<DeclaredUnit>,
    /// Files this one must be compiled after, in first-reference order.
    pub dependencies: IndexSet<FileId>,
}

/// A reference that matched no declared unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnresolvedReference {
    /// File containing the reference.
    pub path: PathBuf,
    /// Unit the reference appears in, e.g. `entity E`.
    pub unit: String,
    /// Library the reference was looked up in.
    pub library: Name,
    pub reference: Reference,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} references {} (not found in library {})",
            self.path.display(),
            self.unit,
            self.reference,
            self.library
        )
    }
}

/// Files in discovery order plus the edges between them.
#[derive(Debug, Clone, Default)]
pub struct UnitFileList {
    files: Vec<FileRecord>,
    unresolved: Vec<UnresolvedReference>,
}

impl UnitFileList {
    /// Resolve every reference in `catalog`.
    ///
    /// A reference is looked up in the library it names, or in the
    /// referencing unit's own library when it names none or names `WORK`.
    /// When several units match (an entity with more than one architecture)
    /// an edge is added to each of their files.
    pub fn build(catalog: &LibraryCatalog) -> Self {
        let mut files: Vec<FileRecord> = catalog
            .files()
            .iter()
            .map(|file| FileRecord {
                id: file.id,
                path: file.path.clone(),
                library: file.library.clone(),
                units: Vec::new(),
                dependencies: IndexSet::new(),
            })
            .collect();

        // (library, primary name) → units answering to that name
        let mut index: FxHashMap<(&Name, &Name), Vec<&DeclaredUnit>> = FxHashMap::default();
        for unit in catalog.units() {
            index
                .entry((&unit.library, unit.primary_name()))
                .or_default()
                .push(unit);
        }

        let mut unresolved = Vec::new();
        let mut edges = 0usize;

        for unit in catalog.units() {
            let from = unit.file;
            for reference in &unit.references {
                let library = match reference.unit.library() {
                    Some(library) if library != WORK_LIBRARY => library,
                    _ => &unit.library,
                };
                let candidates: Vec<&DeclaredUnit> = index
                    .get(&(library, reference.unit.name()))
                    .into_iter()
                    .flatten()
                    .copied()
                    .filter(|candidate| {
                        candidate.satisfies(reference.kind, reference.unit.architecture())
                    })
                    .collect();

                if candidates.is_empty() {
                    unresolved.push(UnresolvedReference {
                        path: catalog.path(from).to_path_buf(),
                        unit: unit.to_string(),
                        library: library.clone(),
                        reference: reference.clone(),
                    });
                    continue;
                }

                for candidate in candidates {
                    if candidate.file != from && files[from.index()].dependencies.insert(candidate.file) {
                        edges += 1;
                        trace!(
                            "{} -> {} ({})",
                            catalog.path(from).display(),
                            catalog.path(candidate.file).display(),
                            reference
                        );
                    }
                }
            }
        }

        for unit in catalog.units() {
            files[unit.file.index()].units.push(unit.clone());
        }

        debug!(
            "File graph: {} file(s), {} edge(s), {} unresolved reference(s)",
            files.len(),
            edges,
            unresolved.len()
        );
        Self { files, unresolved }
    }

    /// All files in discovery order, indexed by [`FileId`].
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> &FileRecord {
        &self.files[id.index()]
    }

    /// Dependencies of one file.
    pub fn dependencies(&self, id: FileId) -> impl Iterator<Item = FileId> + '_ {
        self.files[id.index()].dependencies.iter().copied()
    }

    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<FileRecord>, Vec<UnresolvedReference>) {
        (self.files, self.unresolved)
    }
}
