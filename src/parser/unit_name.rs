//! Unit name parser.
//!
//! Parses selectors of the form `name`, `name(arch)`, `lib.name` and
//! `lib.name(arch)`. Whitespace around each piece is ignored and every
//! identifier is normalized with [`crate::base::normalize`].
//!
//! Extended identifiers are accepted as long as they contain no `.` or parentheses.

use std::fmt;
use std::str::FromStr;

use crate::base::{Name, is_valid_identifier, normalize};
use crate::error::{OrderError, Result};

/// A reference to a design unit, optionally library-qualified and
/// optionally naming an architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitReference {
    library: Option<Name>,
    name: Name,
    architecture: Option<Name>,
}

impl UnitReference {
    pub fn new(library: Option<Name>, name: Name, architecture: Option<Name>) -> Self {
        Self {
            library,
            name,
            architecture,
        }
    }

    /// Shorthand for an unqualified reference without architecture.
    pub fn simple(name: impl AsRef<str>) -> Self {
        Self::new(None, normalize(name.as_ref()), None)
    }

    /// Parse a textual selector.
    pub fn parse(input: &str) -> Result<Self> {
        parse_unit_name(input)
    }

    pub fn library(&self) -> Option<&Name> {
        self.library.as_ref()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn architecture(&self) -> Option<&Name> {
        self.architecture.as_ref()
    }

    /// Return a copy with the architecture dropped.
    pub fn without_architecture(&self) -> Self {
        Self::new(self.library.clone(), self.name.clone(), None)
    }
}

impl fmt::Display for UnitReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(library) = &self.library {
            write!(f, "{}.", library)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(arch) = &self.architecture {
            write!(f, "({})", arch)?;
        }
        Ok(())
    }
}

impl FromStr for UnitReference {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        parse_unit_name(s)
    }
}

/// Parse `[lib.]name[(arch)]` into a [`UnitReference`].
pub fn parse_unit_name(input: &str) -> Result<UnitReference> {
    let fail = |reason| OrderError::invalid_reference(input, reason);
    let trimmed = input.trim();

    let (head, architecture) = match trimmed.find('(') {
        None => {
            if trimmed.contains(')') {
                return Err(fail("unmatched ')'"));
            }
            (trimmed, None)
        }
        Some(open) => {
            let rest = &trimmed[open + 1..];
            let close = rest.find(')').ok_or_else(|| fail("unterminated '('"))?;
            let inner = &rest[..close];
            if inner.contains('(') {
                return Err(fail("nested '('"));
            }
            if !rest[close + 1..].trim().is_empty() {
                return Err(fail("unexpected text after ')'"));
            }
            let arch = inner.trim();
            if arch.is_empty() {
                return Err(fail("empty architecture name"));
            }
            if !is_valid_identifier(arch) {
                return Err(fail("invalid architecture name"));
            }
            (&trimmed[..open], Some(normalize(arch)))
        }
    };

    let segments: Vec<&str> = head.split('.').map(str::trim).collect();
    let (library, name) = match segments.as_slice() {
        [name] => (None, *name),
        [library, name] => {
            if library.is_empty() {
                return Err(fail("empty library name"));
            }
            (Some(*library), *name)
        }
        _ => return Err(fail("too many name segments")),
    };

    if name.is_empty() {
        return Err(fail("empty unit name"));
    }
    if !is_valid_identifier(name) {
        return Err(fail("invalid unit name"));
    }
    if let Some(library) = library {
        if !is_valid_identifier(library) {
            return Err(fail("invalid library name"));
        }
    }

    Ok(UnitReference::new(
        library.map(normalize),
        normalize(name),
        architecture,
    ))
}
