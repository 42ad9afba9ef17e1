//! ---
//! rally_section: "02-file-io"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Text and JSON file helpers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! File helpers for UTF-8 text and JSON documents.
//!
//! Writers create missing parent directories and replace the destination
//! atomically through a sibling `.tmp` file. Paths are anything implementing
//! `AsRef<Path>`; relative paths resolve against the working directory.
#![warn(missing_docs)]

use std::path::{Path, PathBuf};

mod atomic;
mod finite;
pub mod json;
pub mod text;

pub use json::{read_json, write_json, write_json_with};
pub use text::{read_text, write_text, write_text_with, LineEnding};

/// Result alias used throughout the IO crate.
pub type Result<T> = std::result::Result<T, IoError>;

/// Error type for file helpers. Every variant names the file involved.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// The file to read does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Requested file.
        path: PathBuf,
    },
    /// Any other filesystem failure, including invalid UTF-8 on read.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
    /// The file does not hold valid JSON of the requested shape.
    #[error("invalid json in {}: {source}", path.display())]
    Parse {
        /// File being read.
        path: PathBuf,
        /// Parser diagnostics, including line and column.
        source: serde_json::Error,
    },
    /// The value cannot be represented as JSON.
    #[error("value for {} is not serializable as json: {source}", path.display())]
    Serialize {
        /// Intended destination.
        path: PathBuf,
        /// Serializer diagnostics.
        source: serde_json::Error,
    },
}

impl IoError {
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Whether the error reports a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IoError::NotFound { .. })
    }

    /// File the failed operation was about.
    pub fn path(&self) -> &Path {
        match self {
            IoError::NotFound { path }
            | IoError::Io { path, .. }
            | IoError::Parse { path, .. }
            | IoError::Serialize { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kind_maps_to_dedicated_variant() {
        let err = IoError::from_io(
            Path::new("missing.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "file not found: missing.txt");

        let err = IoError::from_io(
            Path::new("locked.txt"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, IoError::Io { .. }));
        assert_eq!(err.path(), Path::new("locked.txt"));
    }
}
