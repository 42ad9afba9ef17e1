//! ---
//! rally_section: "02-file-io"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "UTF-8 text file helpers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! UTF-8 text files.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::atomic::write_atomic;
use crate::{IoError, Result};

/// Line terminator applied by [`write_text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Terminator as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Rewrite every `\r\n`, `\r` and `\n` in `content` with this terminator.
    pub fn normalize(&self, content: &str) -> String {
        let unified = content.replace("\r\n", "\n").replace('\r', "\n");
        match self {
            LineEnding::Lf => unified,
            LineEnding::CrLf => unified.replace('\n', "\r\n"),
        }
    }
}

/// Read a UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| IoError::from_io(path, source))?;
    debug!(path = %path.display(), bytes = content.len(), "text file read");
    Ok(content)
}

/// Write `content` verbatim, creating parent directories and replacing any
/// existing file.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path.as_ref(), content.as_bytes())
}

/// Like [`write_text`], with line terminators normalised to `line_ending`.
pub fn write_text_with(
    path: impl AsRef<Path>,
    content: &str,
    line_ending: LineEnding,
) -> Result<()> {
    write_atomic(path.as_ref(), line_ending.normalize(content).as_bytes())
}
