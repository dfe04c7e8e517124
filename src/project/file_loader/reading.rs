use std::path::Path;

use crate::error::{OrderError, Result};

/// Read a source file.
///
/// Bytes that are not valid UTF-8 (Latin-1 comments are common in VHDL) are
/// replaced rather than rejected; the scanner only cares about ASCII keywords.
pub fn load_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| OrderError::file_access(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}
