use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{OrderError, Result};

/// Expand a configured path into the source files it stands for.
///
/// A file is returned as-is, whatever its extension. A directory is walked
/// recursively in file-name order, keeping files whose extension is in
/// `extensions` (compared case-insensitively).
pub fn collect_file_paths(path: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(path).map_err(|e| OrderError::file_access(path, e))?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let failed = e.path().unwrap_or(path).to_path_buf();
            OrderError::file_access(failed, e.into())
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Collected {} file(s) under {}", files.len(), path.display());
    Ok(files)
}

/// Check a path's extension against a list, ignoring ASCII case.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Lexically clean a path: drop `.` segments and fold `name/..` pairs.
///
/// The file system is not consulted, so in-memory sources get the same key
/// as files on disk.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
