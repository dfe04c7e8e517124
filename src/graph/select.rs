//! Architecture selection.
//!
//! An entity may have several architectures in the catalog. A selector such
//! as `adder(fast)` pins the entity to one of them and every other
//! architecture of that entity is removed before the graph is built.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::base::Name;
use crate::base::constants::WORK_LIBRARY;
use crate::error::{OrderError, Result};
use crate::parser::UnitReference;
use crate::project::LibraryCatalog;
use crate::syntax::UnitKind;

/// `(library, entity)` → the only architecture allowed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchitectureSelection {
    selected: IndexMap<(Name, Name), Name>,
}

impl ArchitectureSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse selector strings.
    ///
    /// Every selector must name an architecture. Unqualified selectors and
    /// selectors qualified with `WORK` apply to `default_library`. A later
    /// selector for the same entity replaces an earlier one.
    pub fn from_selectors<S: AsRef<str>>(selectors: &[S], default_library: &Name) -> Result<Self> {
        let mut selection = Self::new();
        for selector in selectors {
            let selector = selector.as_ref();
            let reference = UnitReference::parse(selector)?;
            if reference.architecture().is_none() {
                return Err(OrderError::invalid_reference(
                    selector,
                    "architecture selector needs an architecture name",
                ));
            }
            selection.insert(&reference, default_library);
        }
        Ok(selection)
    }

    /// Pin an entity to an architecture. References without an architecture
    /// are ignored.
    pub fn insert(&mut self, reference: &UnitReference, default_library: &Name) {
        let Some(architecture) = reference.architecture() else {
            return;
        };
        let library = match reference.library() {
            Some(library) if library != WORK_LIBRARY => library.clone(),
            _ => default_library.clone(),
        };
        let key = (library, reference.name().clone());
        if let Some(previous) = self.selected.insert(key, architecture.clone()) {
            debug!("Selector {} replaces architecture {}", reference, previous);
        }
    }

    /// Selected architecture for an entity, if any.
    pub fn get(&self, library: &str, entity: &str) -> Option<&Name> {
        self.selected
            .iter()
            .find(|((lib, ent), _)| lib == library && ent == entity)
            .map(|(_, arch)| arch)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Remove every architecture of a selected entity except the chosen one.
    ///
    /// Returns the number of removed units.
    pub fn apply(&self, catalog: &mut LibraryCatalog) -> usize {
        if self.selected.is_empty() {
            return 0;
        }

        let before = catalog.len();
        catalog.retain(|unit| match &unit.kind {
            UnitKind::Architecture { of } => self
                .selected
                .get(&(unit.library.clone(), of.clone()))
                .is_none_or(|arch| arch == &unit.name),
            _ => true,
        });
        let removed = before - catalog.len();

        for ((library, entity), arch) in &self.selected {
            let found = catalog
                .library(library)
                .iter()
                .any(|u| u.entity_name() == Some(entity) && u.architecture_name() == Some(arch));
            if !found {
                warn!("Selected architecture {}.{}({}) is not declared", library, entity, arch);
            }
        }

        debug!("Architecture selection removed {} unit(s)", removed);
        removed
    }
}
