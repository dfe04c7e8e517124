//! Run configuration: which paths belong to which library, and which
//! selectors the caller passed.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::base::constants::{DEFAULT_LIBRARY, VHDL_EXTENSIONS};
use crate::base::{Name, normalize};

/// Inputs for one compile-order computation.
///
/// Libraries keep the order they were first added in, and so do the paths
/// within a library. That order is the discovery order ties are broken by.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderConfig {
    /// Library name → files or directories scanned into it.
    pub libraries: IndexMap<Name, Vec<PathBuf>>,
    /// Library unqualified selectors apply to.
    pub default_library: Name,
    /// Architecture selectors, `entity(arch)` or `lib.entity(arch)`.
    pub use_units: Vec<String>,
    /// Top-level unit selectors. Validated and checked for existence only.
    pub top_units: Vec<String>,
    /// Extensions collected from directories, without the dot.
    pub extensions: Vec<String>,
    /// Scan files on the rayon thread pool.
    pub parallel: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            libraries: IndexMap::new(),
            default_library: Name::new(DEFAULT_LIBRARY),
            use_units: Vec::new(),
            top_units: Vec::new(),
            extensions: VHDL_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            parallel: true,
        }
    }
}

impl OrderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default library. Paths added afterwards with
    /// [`add_default_path`](Self::add_default_path) go there.
    pub fn with_default_library(mut self, library: &str) -> Self {
        self.default_library = normalize(library);
        self
    }

    /// Add a file or directory to `library`.
    pub fn with_path(mut self, library: &str, path: impl Into<PathBuf>) -> Self {
        self.add_path(library, path);
        self
    }

    /// Add a file or directory to the default library.
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_default_path(path);
        self
    }

    /// Add an architecture selector such as `adder(fast)`.
    pub fn with_use_unit(mut self, selector: impl Into<String>) -> Self {
        self.use_units.push(selector.into());
        self
    }

    /// Add a top-level unit selector.
    pub fn with_top_unit(mut self, selector: impl Into<String>) -> Self {
        self.top_units.push(selector.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn add_path(&mut self, library: &str, path: impl Into<PathBuf>) {
        self.libraries
            .entry(normalize(library))
            .or_default()
            .push(path.into());
    }

    pub fn add_default_path(&mut self, path: impl Into<PathBuf>) {
        let library = self.default_library.clone();
        self.libraries.entry(library).or_default().push(path.into());
    }
}
