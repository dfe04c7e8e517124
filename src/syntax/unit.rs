//! Design units as seen by the scanner.
//!
//! A [`DeclaredUnit`] is one `entity`, `architecture`, `package`,
//! `package body` or `configuration` found in a file, together with the
//! [`Reference`]s that appear in its context clause and body.

use std::fmt;

use indexmap::IndexSet;

use crate::base::{FileId, Name, Position};
use crate::parser::UnitReference;

/// The kind of a declared design unit.
///
/// Secondary units carry the name of the primary unit they belong to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnitKind {
    Package,
    PackageBody,
    Entity,
    Architecture { of: Name },
    Configuration { of: Name },
}

impl UnitKind {
    /// The keyword(s) that open a unit of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            UnitKind::Package => "package",
            UnitKind::PackageBody => "package body",
            UnitKind::Entity => "entity",
            UnitKind::Architecture { .. } => "architecture",
            UnitKind::Configuration { .. } => "configuration",
        }
    }

    pub fn tag(&self) -> UnitTag {
        match self {
            UnitKind::Package => UnitTag::Package,
            UnitKind::PackageBody => UnitTag::PackageBody,
            UnitKind::Entity => UnitTag::Entity,
            UnitKind::Architecture { .. } => UnitTag::Architecture,
            UnitKind::Configuration { .. } => UnitTag::Configuration,
        }
    }
}

/// [`UnitKind`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnitTag {
    Package,
    PackageBody,
    Entity,
    Architecture,
    Configuration,
}

/// Identity of a unit within one library.
///
/// Architectures are keyed by `(entity, architecture)`; every other kind by
/// its own name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitKey {
    pub tag: UnitTag,
    pub name: Name,
    pub architecture: Option<Name>,
}

/// What a reference expects to find on the other end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReferenceKind {
    /// `use lib.pkg.x` - a package declaration.
    Package,
    /// `architecture a of E`, `package body P` style bindings - the entity
    /// declaration itself, never its architectures.
    Entity,
    /// An instantiation - the entity and its architectures, or only the
    /// architecture named in `entity lib.e(arch)`.
    Instance,
    /// `configuration lib.c` - a configuration declaration.
    Configuration,
}

/// A referenced unit name together with what kind of unit it expects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reference {
    pub kind: ReferenceKind,
    pub unit: UnitReference,
}

impl Reference {
    pub fn new(kind: ReferenceKind, unit: UnitReference) -> Self {
        Self { kind, unit }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ReferenceKind::Package => "package",
            ReferenceKind::Entity => "entity",
            ReferenceKind::Instance => "instance",
            ReferenceKind::Configuration => "configuration",
        };
        write!(f, "{} {}", kind, self.unit)
    }
}

/// One design unit declaration found in a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeclaredUnit {
    /// Library the file was scanned into.
    pub library: Name,
    pub kind: UnitKind,
    /// The unit's own name. For an architecture this is the architecture name.
    pub name: Name,
    /// File that declares the unit.
    pub file: FileId,
    /// Where the opening keyword sits in the file.
    pub position: Position,
    /// References in source order, without duplicates.
    pub references: IndexSet<Reference>,
}

impl DeclaredUnit {
    pub fn new(library: Name, kind: UnitKind, name: Name, file: FileId, position: Position) -> Self {
        Self {
            library,
            kind,
            name,
            file,
            position,
            references: IndexSet::new(),
        }
    }

    /// The name other units use to reach this one: the entity name for an
    /// architecture, the package name for a package body, the own name otherwise.
    pub fn primary_name(&self) -> &Name {
        match &self.kind {
            UnitKind::Architecture { of } => of,
            _ => &self.name,
        }
    }

    /// Architecture name, for architectures only.
    pub fn architecture_name(&self) -> Option<&Name> {
        match self.kind {
            UnitKind::Architecture { .. } => Some(&self.name),
            _ => None,
        }
    }

    /// Entity this unit implements (architectures) or is (entities).
    pub fn entity_name(&self) -> Option<&Name> {
        match &self.kind {
            UnitKind::Entity => Some(&self.name),
            UnitKind::Architecture { of } => Some(of),
            _ => None,
        }
    }

    pub fn key(&self) -> UnitKey {
        UnitKey {
            tag: self.kind.tag(),
            name: self.primary_name().clone(),
            architecture: self.architecture_name().cloned(),
        }
    }

    /// Whether this unit satisfies a reference of `kind`, assuming names already match.
    pub fn satisfies(&self, kind: ReferenceKind, architecture: Option<&Name>) -> bool {
        match (kind, &self.kind) {
            (ReferenceKind::Package, UnitKind::Package) => true,
            (ReferenceKind::Entity, UnitKind::Entity) => true,
            (ReferenceKind::Instance, UnitKind::Entity) => true,
            (ReferenceKind::Instance, UnitKind::Architecture { .. }) => {
                architecture.is_none_or(|arch| arch == &self.name)
            }
            (ReferenceKind::Configuration, UnitKind::Configuration { .. }) => true,
            _ => false,
        }
    }
}

impl fmt::Display for DeclaredUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UnitKind::Architecture { of } | UnitKind::Configuration { of } => {
                write!(f, "{} {} of {}", self.kind.keyword(), self.name, of)
            }
            kind => write!(f, "{} {}", kind.keyword(), self.name),
        }
    }
}
