//! Best-effort file reading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read the whole file at `path` as text.
///
/// A missing file yields an empty string. Any other I/O failure
/// (permissions, invalid UTF-8, a directory) is returned as an error.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found, returning empty content");
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}
