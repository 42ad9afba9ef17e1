//! ---
//! rally_section: "02-file-io"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "JSON document helpers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! JSON documents.
//!
//! Output is pretty-printed (two-space indentation unless another indent is
//! requested) with sorted object keys,
//! non-ASCII text kept as-is and a trailing newline.
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::atomic::write_atomic;
use crate::finite::ensure_finite;
use crate::{IoError, Result};

const DEFAULT_INDENT: usize = 2;

/// Read and deserialize a JSON document.
///
/// Use `serde_json::Value` as `T` for untyped documents.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| IoError::from_io(path, source))?;
    let value = serde_json::from_slice(&bytes).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "json file read");
    Ok(value)
}

/// Serialize `value` as JSON, creating parent directories and replacing any
/// existing file. Nothing is written when serialization fails.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    write_json_with(path, value, DEFAULT_INDENT)
}

/// [`write_json`] with `indent` spaces per nesting level. An indent of zero
/// still breaks lines, it only drops the leading spaces.
///
/// Non-finite floats (`NaN`, `inf`) are rejected with [`IoError::Serialize`]
/// rather than written as `null`.
pub fn write_json_with<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    indent: usize,
) -> Result<()> {
    let path = path.as_ref();
    let serialize_error = |source| IoError::Serialize {
        path: path.to_path_buf(),
        source,
    };
    ensure_finite(value).map_err(serialize_error)?;
    // Going through `Value` orders object keys.
    let document = serde_json::to_value(value).map_err(serialize_error)?;

    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut bytes = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    document.serialize(&mut serializer).map_err(serialize_error)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}
