use crate::domain::errors::ReadFailure;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Reads a file as UTF-8 text, telling decode failures apart from I/O failures.
pub fn read_file_contents(path: &Path) -> Result<String, ReadFailure> {
    debug!("Reading file contents: {}", path.display());
    let bytes = fs::read(path).map_err(|source| {
        warn!("Failed to read {}: {}", path.display(), source);
        ReadFailure::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match String::from_utf8(bytes) {
        Ok(contents) => {
            debug!("Read {} bytes from file", contents.len());
            Ok(contents)
        }
        Err(_) => {
            warn!("Skipping non-UTF-8 content in {}", path.display());
            Err(ReadFailure::Decode {
                path: path.to_path_buf(),
            })
        }
    }
}
