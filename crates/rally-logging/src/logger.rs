//! ---
//! rally_section: "01-logging"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Named logger handles bound to the process configuration."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};

use crate::LogLevel;

/// Named handle onto the process logger.
///
/// Every record carries a `logger` field with the bound name. Extra
/// structured fields can be attached by calling the `tracing` macros directly;
/// the JSON format flattens them into the record object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    name: Arc<str>,
}

impl Logger {
    /// Create a handle without touching the process configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
        }
    }

    /// Name this logger was bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: LogLevel, message: impl Display) {
        match level {
            LogLevel::Trace => trace!(logger = %self.name, "{message}"),
            LogLevel::Debug => debug!(logger = %self.name, "{message}"),
            LogLevel::Info => info!(logger = %self.name, "{message}"),
            LogLevel::Warn => warn!(logger = %self.name, "{message}"),
            LogLevel::Error => error!(logger = %self.name, "{message}"),
        }
    }

    /// Emit a trace record.
    pub fn trace(&self, message: impl Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Emit a debug record.
    pub fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit an informational record.
    pub fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    /// Emit a warning record.
    pub fn warn(&self, message: impl Display) {
        self.log(LogLevel::Warn, message);
    }

    /// Emit an error record.
    pub fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }
}

/// Return a logger bound to `name`.
///
/// The handle follows whatever [`setup_logging`](crate::setup_logging)
/// installed, including later reconfigurations. Records emitted before any
/// setup are discarded.
pub fn get_logger(name: impl Into<String>) -> Logger {
    Logger::new(name)
}
