//! ---
//! rally_section: "01-logging"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Process-wide logging setup and named loggers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! Logging helper for the rallytools toolkit.
//!
//! [`setup_logging`] installs a process-wide `tracing` subscriber writing
//! either human-readable lines or JSON lines. Calling it again swaps the level
//! and format of the installed subscriber in place. [`get_logger`] hands out
//! named [`Logger`] handles that share that configuration.
#![warn(missing_docs)]

use std::path::PathBuf;

use tracing::debug;

mod json_lines;
mod logger;
mod settings;
mod subscriber;

pub use logger::{get_logger, Logger};
pub use settings::{IntoLogLevel, LogFormat, LogLevel, LogTarget, LoggingSettings};

/// Result alias used throughout the logging crate.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Configuration errors raised while setting up the process logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The requested severity is neither a known name nor a known number.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    /// The requested output format is unknown.
    #[error("invalid log format: {0}")]
    InvalidFormat(String),
    /// The logging config file could not be read.
    #[error("unable to read logging config {path}: {source}")]
    ConfigRead {
        /// Location of the config file.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },
    /// The logging config file is not valid TOML or holds invalid values.
    #[error("failed to parse logging config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// The log file target could not be opened.
    #[error("unable to open log file {path}: {reason}")]
    LogFile {
        /// Requested log file.
        path: PathBuf,
        /// Why the file could not be used.
        reason: String,
    },
    /// Another global subscriber was installed before ours.
    #[error("failed to install global subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
    /// The installed subscriber went away before it could be reconfigured.
    #[error("failed to reconfigure subscriber: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),
}

/// Configure the process logger with a level and an output format.
///
/// `level` may be a name (`"INFO"`, `"debug"`, ...) or its numeric
/// equivalent (`20`, `10`, ...). With `json` set every record is written to
/// stdout as one JSON object per line.
pub fn setup_logging(level: impl IntoLogLevel, json: bool) -> Result<()> {
    let settings =
        LoggingSettings::new(level.into_log_level()?, LogFormat::from_json_flag(json));
    setup_logging_with(&settings)
}

/// Configure the process logger from complete settings, including the target.
pub fn setup_logging_with(settings: &LoggingSettings) -> Result<()> {
    subscriber::configure(settings)?;
    debug!(
        level = %settings.level,
        format = ?settings.format,
        output = ?settings.target,
        "logging configured"
    );
    Ok(())
}

/// Whether a setup call has installed the process logger.
pub fn is_configured() -> bool {
    subscriber::is_installed()
}
