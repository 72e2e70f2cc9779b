use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a file's content could not be included verbatim.
#[derive(Error, Debug)]
pub enum ReadFailure {
    #[error("not valid UTF-8: {}", path.display())]
    Decode { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadFailure {
    pub fn is_decode(&self) -> bool {
        matches!(self, ReadFailure::Decode { .. })
    }

    /// Inline text written into the aggregate in place of the file content.
    pub fn placeholder(&self) -> String {
        match self {
            ReadFailure::Decode { path } => format!(
                "[Unable to read binary or non-UTF-8 file: {}]\n",
                path.display()
            ),
            ReadFailure::Io { path, source } => {
                format!("[Error reading file: {} - {}]\n", path.display(), source)
            }
        }
    }
}

pub type Result<T, E = FlattenError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error("Root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("Could not determine the executable's directory: {0}")]
    ExecutableLocation(#[source] io::Error),

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
