//! Source scanner: declared units and their references from one file's text.
//!
//! This is a keyword-triggered state machine over significant tokens, not a
//! VHDL parser. It recognizes where design units open and close and the
//! handful of constructs that name other units:
//!
//! - `use lib.pkg.x;` / `use pkg.x;` (package references)
//! - `label : entity lib.e(arch)` / `use entity lib.e(arch)` (instances)
//! - `label : component c` / `label : c port map` / `label : c generic map`
//! - `label : configuration lib.c` / `use configuration lib.c`
//!
//! Context clauses written before a unit belong to that unit. Subprogram
//! bodies and packages declared inside a unit nest in it and never open a
//! library unit of their own. Anything the scanner does not understand is
//! skipped, and a unit left open at end of file is still reported with
//! whatever references it collected.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::base::constants::WORK_LIBRARY;
use crate::base::{FileId, Name, Position, normalize};
use crate::parser::{Lexer, SyntaxKind, Token, UnitReference, parse_unit_name};

use super::unit::{DeclaredUnit, Reference, ReferenceKind, UnitKind};

/// Scan `text` and return the units it declares, in source order.
///
/// Pure function of its inputs: no file I/O, no global state.
pub fn scan_source(text: &str, library: &Name, file: FileId) -> Vec<DeclaredUnit> {
    SourceScanner::new(text, library.clone(), file).scan()
}

/// A declarative region nested inside an open unit.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Region {
    /// Subprogram body.
    Subprogram(Name),
    /// Local package declaration or body.
    Package(Name),
}

impl Region {
    fn name(&self) -> &Name {
        match self {
            Region::Subprogram(name) | Region::Package(name) => name,
        }
    }
}

/// A unit whose closing `end` has not been seen yet.
struct OpenUnit {
    unit: DeclaredUnit,
    /// Regions currently open inside the unit, innermost last.
    regions: Vec<Region>,
    /// Package instantiations (`package p is new g ...;`) end at their `;`.
    closes_at_semicolon: bool,
}

pub struct SourceScanner<'a> {
    text: &'a str,
    library: Name,
    file: FileId,
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Names usable as library prefixes in a two-part `use` clause.
    libraries: FxHashSet<Name>,
    /// Context clause references waiting for the next unit.
    pending: IndexSet<Reference>,
    current: Option<OpenUnit>,
    units: Vec<DeclaredUnit>,
}

impl<'a> SourceScanner<'a> {
    pub fn new(text: &'a str, library: Name, file: FileId) -> Self {
        let tokens = Lexer::new(text).filter(|t| !t.kind.is_trivia()).collect();
        let mut libraries = FxHashSet::default();
        libraries.insert(Name::new(WORK_LIBRARY));
        libraries.insert(library.clone());
        Self {
            text,
            library,
            file,
            tokens,
            pos: 0,
            libraries,
            pending: IndexSet::new(),
            current: None,
            units: Vec::new(),
        }
    }

    pub fn scan(mut self) -> Vec<DeclaredUnit> {
        while let Some(kind) = self.peek_kind(0) {
            match kind {
                SyntaxKind::LIBRARY_KW => self.library_clause(),
                SyntaxKind::USE_KW => self.use_clause(),
                SyntaxKind::ENTITY_KW => self.entity_declaration(),
                SyntaxKind::ARCHITECTURE_KW => self.architecture_body(),
                SyntaxKind::PACKAGE_KW => self.package_declaration(),
                SyntaxKind::CONFIGURATION_KW => self.configuration_declaration(),
                SyntaxKind::COLON => self.instantiation(),
                SyntaxKind::FUNCTION_KW | SyntaxKind::PROCEDURE_KW => self.subprogram(),
                SyntaxKind::END_KW => self.end(),
                SyntaxKind::SEMICOLON => {
                    self.pos += 1;
                    if self.current.as_ref().is_some_and(|u| u.closes_at_semicolon) {
                        self.close_current();
                    }
                }
                _ => self.pos += 1,
            }
        }

        self.close_current();
        if !self.pending.is_empty() {
            trace!(
                "{}: {} context reference(s) after the last unit dropped",
                self.file,
                self.pending.len()
            );
        }
        self.units
    }

    // =========================================================================
    // TOKEN CURSOR
    // =========================================================================

    fn peek(&self, n: usize) -> Option<&Token<'a>> {
        self.tokens.get(self.pos + n)
    }

    fn peek_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.peek(n).map(|t| t.kind)
    }

    fn at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.peek_kind(n) == Some(kind)
    }

    fn at_name(&self, n: usize) -> bool {
        self.peek_kind(n).is_some_and(SyntaxKind::is_name)
    }

    fn name_at(&self, n: usize) -> Option<Name> {
        self.peek(n).map(|t| normalize(t.text))
    }

    // =========================================================================
    // UNIT BOUNDARIES
    // =========================================================================

    fn open_unit(&mut self, kind: UnitKind, name: Name) {
        self.close_current();

        let offset = self.peek(0).map(|t| t.range.start()).unwrap_or_default();
        let position = Position::from_offset(self.text, offset);
        let mut unit = DeclaredUnit::new(self.library.clone(), kind, name, self.file, position);
        unit.references = std::mem::take(&mut self.pending);

        trace!("{}: opened {} at {}", self.file, unit, position);
        self.current = Some(OpenUnit {
            unit,
            regions: Vec::new(),
            closes_at_semicolon: false,
        });
    }

    fn close_current(&mut self) {
        if let Some(open) = self.current.take() {
            trace!(
                "{}: closed {} with {} reference(s)",
                self.file,
                open.unit,
                open.unit.references.len()
            );
            self.units.push(open.unit);
        }
    }

    fn add_reference(&mut self, reference: Reference) {
        trace!("{}: reference to {}", self.file, reference);
        match &mut self.current {
            Some(open) => {
                open.unit.references.insert(reference);
            }
            None => {
                self.pending.insert(reference);
            }
        }
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    /// `library a, b;` - only allowed in context clauses, so it ends any open unit.
    fn library_clause(&mut self) {
        self.close_current();
        self.pos += 1;
        while let Some(token) = self.peek(0) {
            match token.kind {
                SyntaxKind::SEMICOLON => break,
                kind if kind.is_name() => {
                    let name = normalize(token.text);
                    self.libraries.insert(name);
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// `entity E is`
    fn entity_declaration(&mut self) {
        if self.at_name(1) && self.at(2, SyntaxKind::IS_KW) {
            if let Some(name) = self.name_at(1) {
                self.open_unit(UnitKind::Entity, name);
            }
            self.pos += 3;
        } else {
            self.pos += 1;
        }
    }

    /// `architecture A of E is` - binds to entity E.
    fn architecture_body(&mut self) {
        let is_header = self.at_name(1)
            && self.at(2, SyntaxKind::OF_KW)
            && self.at_name(3)
            && self.at(4, SyntaxKind::IS_KW);
        if !is_header {
            self.pos += 1;
            return;
        }

        if let (Some(name), Some(entity)) = (self.name_at(1), self.name_at(3)) {
            self.open_unit(UnitKind::Architecture { of: entity.clone() }, name);
            self.add_reference(Reference::new(
                ReferenceKind::Entity,
                UnitReference::new(None, entity, None),
            ));
        }
        self.pos += 5;
    }

    /// `package P is`, `package body P is`, `package P is new G ...;`
    fn package_declaration(&mut self) {
        if self.current.is_some() {
            self.nested_package();
            return;
        }

        if self.at(1, SyntaxKind::BODY_KW) && self.at_name(2) && self.at(3, SyntaxKind::IS_KW) {
            if let Some(name) = self.name_at(2) {
                self.open_unit(UnitKind::PackageBody, name.clone());
                self.add_reference(Reference::new(
                    ReferenceKind::Package,
                    UnitReference::new(None, name, None),
                ));
            }
            self.pos += 4;
            return;
        }

        if !(self.at_name(1) && self.at(2, SyntaxKind::IS_KW)) {
            self.pos += 1;
            return;
        }

        let Some(name) = self.name_at(1) else {
            self.pos += 1;
            return;
        };
        self.open_unit(UnitKind::Package, name);
        let instantiation = self.at(3, SyntaxKind::NEW_KW);
        self.pos += 3;

        if instantiation {
            self.pos += 1;
            if let Some(open) = &mut self.current {
                open.closes_at_semicolon = true;
            }
            if let Some(generic) = self.unit_name() {
                self.add_reference(Reference::new(ReferenceKind::Package, generic));
            }
        }
    }

    /// A package inside an open unit's declarative region. It is not a library
    /// unit: a local package only nests, an instantiation only adds a reference
    /// to its generic package.
    fn nested_package(&mut self) {
        if self.at(1, SyntaxKind::BODY_KW) && self.at_name(2) && self.at(3, SyntaxKind::IS_KW) {
            if let Some(name) = self.name_at(2) {
                self.push_region(Region::Package(name));
            }
            self.pos += 4;
            return;
        }

        if !(self.at_name(1) && self.at(2, SyntaxKind::IS_KW)) {
            self.pos += 1;
            return;
        }

        if self.at(3, SyntaxKind::NEW_KW) {
            self.pos += 4;
            if let Some(generic) = self.unit_name() {
                self.add_reference(Reference::new(ReferenceKind::Package, generic));
            }
            return;
        }

        if let Some(name) = self.name_at(1) {
            self.push_region(Region::Package(name));
        }
        self.pos += 3;
    }

    fn push_region(&mut self, region: Region) {
        if let Some(open) = &mut self.current {
            trace!("{}: nested {:?} in {}", self.file, region, open.unit);
            open.regions.push(region);
        }
    }

    /// `configuration C of E is` - needs E and its architectures.
    fn configuration_declaration(&mut self) {
        let is_header = self.at_name(1)
            && self.at(2, SyntaxKind::OF_KW)
            && self.at_name(3)
            && self.at(4, SyntaxKind::IS_KW);
        if !is_header {
            self.pos += 1;
            return;
        }

        if let (Some(name), Some(entity)) = (self.name_at(1), self.name_at(3)) {
            self.open_unit(UnitKind::Configuration { of: entity.clone() }, name);
            self.add_reference(Reference::new(
                ReferenceKind::Instance,
                UnitReference::new(None, entity, None),
            ));
        }
        self.pos += 5;
    }

    /// Tracks subprogram bodies so their bare `end;` does not close the unit.
    fn subprogram(&mut self) {
        self.pos += 1;
        let Some(token) = self.peek(0) else {
            return;
        };
        let name = match token.kind {
            kind if kind.is_name() => normalize(token.text),
            SyntaxKind::STRING => Name::new(token.text),
            _ => return,
        };

        let mut depth = 0usize;
        let mut n = 1;
        while let Some(token) = self.peek(n) {
            match token.kind {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => depth = depth.saturating_sub(1),
                SyntaxKind::SEMICOLON | SyntaxKind::END_KW if depth == 0 => return,
                SyntaxKind::IS_KW if depth == 0 => {
                    // `is new g` instantiates, `is <>` / `is name` are interface defaults.
                    let is_body = match self.peek(n + 1) {
                        Some(next) => {
                            !(next.kind == SyntaxKind::NEW_KW
                                || next.kind.is_name()
                                || next.text == "<>")
                        }
                        None => false,
                    };
                    if is_body {
                        self.push_region(Region::Subprogram(name));
                    }
                    return;
                }
                _ => {}
            }
            n += 1;
        }
    }

    /// `end [kind] [name];`
    fn end(&mut self) {
        self.pos += 1;
        let Some(open) = &mut self.current else {
            return;
        };

        let closes = match self.tokens.get(self.pos) {
            None => true,
            Some(next) => match next.kind {
                SyntaxKind::SEMICOLON => open.regions.pop().is_none(),
                SyntaxKind::FUNCTION_KW | SyntaxKind::PROCEDURE_KW => {
                    open.regions.pop();
                    false
                }
                SyntaxKind::PACKAGE_KW => match open.regions.last() {
                    Some(Region::Package(_)) => {
                        open.regions.pop();
                        false
                    }
                    _ => true,
                },
                SyntaxKind::ENTITY_KW | SyntaxKind::ARCHITECTURE_KW | SyntaxKind::CONFIGURATION_KW => true,
                SyntaxKind::IDENT | SyntaxKind::EXTENDED_IDENT | SyntaxKind::STRING => {
                    let name = match next.kind {
                        SyntaxKind::STRING => Name::new(next.text),
                        _ => normalize(next.text),
                    };
                    if open.regions.last().map(Region::name) == Some(&name) {
                        open.regions.pop();
                        false
                    } else {
                        open.regions.is_empty() && name == open.unit.name
                    }
                }
                _ => false,
            },
        };

        if closes {
            self.close_current();
        }

        // Skip `[kind] [body] [name]` so the keyword is not mistaken for an opening.
        let mut skipped = 0;
        while skipped < 3 && self.peek_kind(0).is_some_and(|k| k != SyntaxKind::SEMICOLON) {
            self.pos += 1;
            skipped += 1;
        }
    }

    // =========================================================================
    // REFERENCES
    // =========================================================================

    /// `use` clauses: package imports, or bindings inside configurations.
    fn use_clause(&mut self) {
        self.pos += 1;

        match self.peek_kind(0) {
            Some(SyntaxKind::ENTITY_KW) => {
                self.pos += 1;
                if let Some(unit) = self.unit_name() {
                    self.add_reference(Reference::new(ReferenceKind::Instance, unit));
                }
                return;
            }
            Some(SyntaxKind::CONFIGURATION_KW) => {
                self.pos += 1;
                if let Some(unit) = self.unit_name() {
                    self.add_reference(Reference::new(ReferenceKind::Configuration, unit));
                }
                return;
            }
            _ => {}
        }

        loop {
            let segments = self.selected_name_segments();
            if let Some(unit) = self.package_from_segments(&segments) {
                self.add_reference(Reference::new(ReferenceKind::Package, unit));
            }
            if self.at(0, SyntaxKind::COMMA) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Reads `a.b.c` style names. Non-identifier suffixes (`all`, operator
    /// symbols) end the name and are returned as `None`.
    fn selected_name_segments(&mut self) -> Vec<Option<Name>> {
        let mut segments = Vec::new();
        if !self.at_name(0) {
            return segments;
        }
        segments.push(self.name_at(0));
        self.pos += 1;

        while self.at(0, SyntaxKind::DOT) {
            self.pos += 1;
            match self.peek(0) {
                Some(token) if token.kind.is_name() => {
                    segments.push(Some(normalize(token.text)));
                    self.pos += 1;
                }
                Some(token) if token.kind != SyntaxKind::SEMICOLON => {
                    segments.push(None);
                    self.pos += 1;
                    break;
                }
                _ => break,
            }
        }
        segments
    }

    /// Which package a `use` clause's selected name points at.
    fn package_from_segments(&self, segments: &[Option<Name>]) -> Option<UnitReference> {
        match segments {
            [Some(library), Some(unit), _, ..] => self.reference(Some(library), unit),
            [Some(first), Some(second)] if self.libraries.contains(first) => {
                self.reference(Some(first), second)
            }
            [Some(unit), _] if !self.libraries.contains(unit) => self.reference(None, unit),
            _ => None,
        }
    }

    /// After a `:` - instantiations of entities, components or configurations.
    fn instantiation(&mut self) {
        self.pos += 1;

        match self.peek_kind(0) {
            Some(SyntaxKind::ENTITY_KW) => {
                self.pos += 1;
                if let Some(unit) = self.unit_name() {
                    self.add_reference(Reference::new(ReferenceKind::Instance, unit));
                }
            }
            Some(SyntaxKind::CONFIGURATION_KW) => {
                self.pos += 1;
                if let Some(unit) = self.unit_name() {
                    self.add_reference(Reference::new(ReferenceKind::Configuration, unit));
                }
            }
            Some(SyntaxKind::COMPONENT_KW) => {
                self.pos += 1;
                if let Some(unit) = self.unit_name() {
                    self.add_reference(Reference::new(
                        ReferenceKind::Instance,
                        unit.without_architecture(),
                    ));
                }
            }
            Some(kind) if kind.is_name() => {
                // `label : comp port map` / `label : lib.comp generic map`
                let mut n = 1;
                while self.at(n, SyntaxKind::DOT) && self.at_name(n + 1) {
                    n += 2;
                }
                let is_instance = (self.at(n, SyntaxKind::PORT_KW)
                    || self.at(n, SyntaxKind::GENERIC_KW))
                    && self.at(n + 1, SyntaxKind::MAP_KW);
                if is_instance {
                    if let Some(unit) = self.unit_name() {
                        self.add_reference(Reference::new(ReferenceKind::Instance, unit));
                    }
                }
            }
            _ => {}
        }
    }

    /// Reads `[lib.]name[(arch)]` at the cursor and parses it as a unit reference.
    fn unit_name(&mut self) -> Option<UnitReference> {
        if !self.at_name(0) {
            return None;
        }
        let mut text = String::from(self.peek(0)?.text);
        self.pos += 1;

        while self.at(0, SyntaxKind::DOT) && self.at_name(1) {
            text.push('.');
            text.push_str(self.peek(1)?.text);
            self.pos += 2;
        }

        if self.at(0, SyntaxKind::L_PAREN) && self.at_name(1) && self.at(2, SyntaxKind::R_PAREN) {
            text.push('(');
            text.push_str(self.peek(1)?.text);
            text.push(')');
            self.pos += 3;
        }

        match parse_unit_name(&text) {
            Ok(unit) => Some(unit),
            Err(err) => {
                trace!("{}: skipping unit name: {}", self.file, err);
                None
            }
        }
    }

    fn reference(&self, library: Option<&Name>, name: &Name) -> Option<UnitReference> {
        let text = match library {
            Some(library) => format!("{}.{}", library, name),
            None => name.to_string(),
        };
        parse_unit_name(&text).ok()
    }
}
