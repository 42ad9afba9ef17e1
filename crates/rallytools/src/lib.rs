//! ---
//! rally_section: "04-aggregate"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Flat re-export surface for the toolkit."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! Personal utility toolkit: logging setup, file helpers and timing.
//!
//! Everything lives in a flat namespace:
//!
//! ```no_run
//! use rallytools::{get_logger, read_json, setup_logging, timeit, write_json, Timer};
//!
//! # fn main() -> rallytools::Result<()> {
//! setup_logging("INFO", false)?;
//! let log = get_logger("report");
//!
//! write_json("out/summary.json", &serde_json::json!({"stories": 12}))?;
//! let summary: serde_json::Value = read_json("out/summary.json")?;
//! log.info(format!("stories: {}", summary["stories"]));
//!
//! let timer = Timer::new();
//! let square = timeit(|x: u64| x * x);
//! timer.time(|| square.call_with(12));
//! log.info(format!("took {:.3}s", timer.elapsed_secs()));
//! # Ok(())
//! # }
//! ```

pub use rally_io::{
    read_json, read_text, write_json, write_json_with, write_text, write_text_with, IoError,
    LineEnding,
};
pub use rally_logging::{
    get_logger, is_configured, setup_logging, setup_logging_with, IntoLogLevel, LogFormat,
    LogLevel, LogTarget, Logger, LoggingError, LoggingSettings,
};
pub use rally_time::{measure, timeit, Timed, Timer, TimerScope};

/// Toolkit version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result alias for code mixing the toolkit's helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised by the toolkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Logging configuration error.
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// File helper error.
    #[error(transparent)]
    Io(#[from] IoError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn errors_convert_into_toolkit_error() {
        let dir = tempfile::tempdir().unwrap();
        let err: Error = read_text(dir.path().join("none.txt")).unwrap_err().into();
        assert!(matches!(err, Error::Io(IoError::NotFound { .. })));

        let err: Error = "loud".parse::<LogLevel>().unwrap_err().into();
        assert_eq!(err.to_string(), "invalid log level: loud");
    }
}
