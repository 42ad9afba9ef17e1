//! ---
//! rally_section: "02-file-io"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Parent creation and temp-file replacement shared by the writers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{IoError, Result};

/// Sibling file the payload is staged in, e.g. `data.json` -> `data.json.tmp`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path`, creating parents and replacing any previous file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| IoError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let staging = staging_path(path);
    let outcome = write_file(&staging, bytes).and_then(|()| fs::rename(&staging, path));
    if let Err(source) = outcome {
        let _ = fs::remove_file(&staging);
        return Err(IoError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
