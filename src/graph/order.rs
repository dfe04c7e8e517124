//! Level assignment and final compile order.
//!
//! level(F) is 0 for a file without dependencies and otherwise one more than
//! the highest level among the files it depends on. Files are emitted by
//! ascending level; equal levels keep discovery order.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;

use super::file_list::{FileRecord, UnitFileList, UnresolvedReference};
use crate::base::{FileId, Name};
use crate::error::{OrderError, Result};
use crate::syntax::{DeclaredUnit, UnitKind};

/// A file in compile order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderedFile {
    pub path: PathBuf,
    /// Library the file was scanned into.
    pub library: Name,
    /// Libraries of the units the file declares.
    pub libraries: IndexSet<Name>,
    pub level: usize,
    pub units: Vec<DeclaredUnit>,
    #[cfg_attr(feature = "serde", serde(skip))]
    id: FileId,
}

impl OrderedFile {
    /// Position of the file in discovery order.
    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the declared units, `ENTITY(ARCH)` for architectures.
    pub fn unit_names(&self) -> Vec<String> {
        self.units
            .iter()
            .map(|unit| match &unit.kind {
                UnitKind::Architecture { of } => format!("{}({})", of, unit.name),
                _ => unit.name.to_string(),
            })
            .collect()
    }
}

/// The result of a run: files in compile order plus every reference that
/// matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompileOrder {
    files: Vec<OrderedFile>,
    unresolved: Vec<UnresolvedReference>,
}

impl CompileOrder {
    pub fn files(&self) -> &[OrderedFile] {
        &self.files
    }

    /// Paths in compile order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(OrderedFile::path)
    }

    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    /// Highest assigned level, `None` for an empty order.
    pub fn max_level(&self) -> Option<usize> {
        self.files.iter().map(|f| f.level).max()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderedFile> {
        self.files.iter()
    }
}

impl IntoIterator for CompileOrder {
    type Item = OrderedFile;
    type IntoIter = std::vec::IntoIter<OrderedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompileOrder {
    type Item = &'a OrderedFile;
    type IntoIter = std::slice::Iter<'a, OrderedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done(usize),
}

/// Assign a level to every file of `list`.
///
/// Fails with [`OrderError::CyclicDependency`] when a file is reached again
/// while it is still being visited.
pub fn assign_levels(list: &UnitFileList) -> Result<Vec<usize>> {
    let mut state = vec![Visit::Unvisited; list.len()];
    let mut stack = Vec::new();
    for file in list.files() {
        visit(list, file.id, &mut state, &mut stack)?;
    }

    Ok(state
        .into_iter()
        .map(|visit| match visit {
            Visit::Done(level) => level,
            Visit::Unvisited | Visit::InProgress => 0,
        })
        .collect())
}

fn visit(list: &UnitFileList, id: FileId, state: &mut [Visit], stack: &mut Vec<FileId>) -> Result<usize> {
    match state[id.index()] {
        Visit::Done(level) => return Ok(level),
        Visit::InProgress => return Err(cycle_error(list, id, stack)),
        Visit::Unvisited => {}
    }

    state[id.index()] = Visit::InProgress;
    stack.push(id);

    let mut level = 0;
    for dependency in list.dependencies(id) {
        level = level.max(visit(list, dependency, state, stack)? + 1);
    }

    stack.pop();
    state[id.index()] = Visit::Done(level);
    Ok(level)
}

/// `closing` is on the stack: the cycle is the stack from there on, closed by
/// `closing` again.
fn cycle_error(list: &UnitFileList, closing: FileId, stack: &[FileId]) -> OrderError {
    let start = stack.iter().position(|&id| id == closing).unwrap_or(0);
    let path = list.file(closing).path.clone();
    let mut cycle: Vec<PathBuf> = stack[start..]
        .iter()
        .map(|&id| list.file(id).path.clone())
        .collect();
    cycle.push(path.clone());
    OrderError::CyclicDependency { path, cycle }
}

/// Assign levels and sort `list` into compile order.
pub fn sort(list: UnitFileList) -> Result<CompileOrder> {
    let levels = assign_levels(&list)?;
    let (files, unresolved) = list.into_parts();

    let mut files: Vec<OrderedFile> = files
        .into_iter()
        .zip(levels)
        .map(|(record, level)| ordered_file(record, level))
        .collect();
    // Stable: equal levels stay in discovery order.
    files.sort_by_key(|file| file.level);

    debug!(
        "Compile order: {} file(s), max level {}",
        files.len(),
        files.iter().map(|f| f.level).max().unwrap_or(0)
    );
    Ok(CompileOrder { files, unresolved })
}

fn ordered_file(record: FileRecord, level: usize) -> OrderedFile {
    let libraries = record.units.iter().map(|u| u.library.clone()).collect();
    OrderedFile {
        path: record.path,
        library: record.library,
        libraries,
        level,
        units: record.units,
        id: record.id,
    }
}
