//! On-disk library trees in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vhdl_order::{CompileOrder, OrderConfig};

/// A temporary directory holding VHDL files.
pub struct LibraryTree {
    dir: TempDir,
}

impl LibraryTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `text` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, text).expect("write source file");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// File names (not full paths) in compile order.
pub fn file_names(order: &CompileOrder) -> Vec<String> {
    order
        .paths()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect()
}

/// `(file name, level)` pairs in compile order.
pub fn levels(order: &CompileOrder) -> Vec<(String, usize)> {
    file_names(order)
        .into_iter()
        .zip(order.iter().map(|f| f.level))
        .collect()
}

/// Config scanning one directory into WORK, sequentially.
pub fn work_config(root: &Path) -> OrderConfig {
    OrderConfig::new().with_default_path(root).with_parallel(false)
}
