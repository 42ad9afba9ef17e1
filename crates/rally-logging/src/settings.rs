//! ---
//! rally_section: "01-logging"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Logging levels, formats, targets and their TOML form."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::{LoggingError, Result};

/// Severity threshold applied to every logger in the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "LevelValue", into = "String")]
pub enum LogLevel {
    /// Very fine-grained diagnostics.
    Trace,
    /// Diagnostics useful while developing.
    Debug,
    /// Normal operational messages.
    #[default]
    Info,
    /// Something unexpected that does not stop the caller.
    Warn,
    /// Failures, including critical ones.
    Error,
}

impl LogLevel {
    /// Map a numeric severity (`10` debug, `20` info, `30` warn, `40` error,
    /// `50` critical) onto a level. `0` and `5` select trace.
    pub fn from_numeric(value: i64) -> Result<Self> {
        match value {
            0 | 5 => Ok(LogLevel::Trace),
            10 => Ok(LogLevel::Debug),
            20 => Ok(LogLevel::Info),
            30 => Ok(LogLevel::Warn),
            40 | 50 => Ok(LogLevel::Error),
            other => Err(LoggingError::InvalidLevel(other.to_string())),
        }
    }

    /// Lower-case name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub(crate) fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_level(Level::from(*self))
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_owned()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "critical" | "fatal" => Ok(LogLevel::Error),
            _ => Err(LoggingError::InvalidLevel(s.to_owned())),
        }
    }
}

/// Severity as written in a config file: a name or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelValue {
    Numeric(i64),
    Name(String),
}

impl TryFrom<LevelValue> for LogLevel {
    type Error = LoggingError;

    fn try_from(value: LevelValue) -> Result<Self> {
        match value {
            LevelValue::Numeric(number) => LogLevel::from_numeric(number),
            LevelValue::Name(name) => name.parse(),
        }
    }
}

/// Anything `setup_logging` accepts as a level.
pub trait IntoLogLevel {
    /// Resolve the value, failing with [`LoggingError::InvalidLevel`].
    fn into_log_level(self) -> Result<LogLevel>;
}

impl IntoLogLevel for LogLevel {
    fn into_log_level(self) -> Result<LogLevel> {
        Ok(self)
    }
}

impl IntoLogLevel for Level {
    fn into_log_level(self) -> Result<LogLevel> {
        Ok(self.into())
    }
}

impl IntoLogLevel for &str {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for String {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for &String {
    fn into_log_level(self) -> Result<LogLevel> {
        self.parse()
    }
}

impl IntoLogLevel for i32 {
    fn into_log_level(self) -> Result<LogLevel> {
        LogLevel::from_numeric(i64::from(self))
    }
}

impl IntoLogLevel for u32 {
    fn into_log_level(self) -> Result<LogLevel> {
        LogLevel::from_numeric(i64::from(self))
    }
}

/// Line format used by the process logger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// `<timestamp> <LEVEL> <message> <fields>` lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    #[serde(alias = "json")]
    StructuredJson,
}

impl LogFormat {
    /// Format selected by the `json` switch of `setup_logging`.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::StructuredJson
        } else {
            LogFormat::Pretty
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "structured-json" => Ok(LogFormat::StructuredJson),
            _ => Err(LoggingError::InvalidFormat(s.to_owned())),
        }
    }
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// Append to a file, creating it and its parent directories.
    File(PathBuf),
}

/// Complete description of the process logger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Severity threshold.
    pub level: LogLevel,
    /// Line format.
    pub format: LogFormat,
    /// Output destination.
    pub target: LogTarget,
}

impl LoggingSettings {
    /// Settings writing to stdout.
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self {
            level,
            format,
            target: LogTarget::Stdout,
        }
    }

    /// Replace the output destination.
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LoggingError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }
}

impl FromStr for LoggingSettings {
    type Err = LoggingError;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_parse_case_insensitively() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("CRITICAL".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn numeric_levels_follow_the_conventional_scale() {
        assert_eq!(LogLevel::from_numeric(10).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_numeric(20).unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_numeric(30).unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_numeric(50).unwrap(), LogLevel::Error);
        assert_eq!(40i32.into_log_level().unwrap(), LogLevel::Error);
    }

    #[test]
    fn invalid_levels_are_configuration_errors() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref value) if value == "verbose"));
        assert!(LogLevel::from_numeric(7).is_err());
        assert!(LogLevel::from_numeric(-10).is_err());
    }

    #[test]
    fn formats_accept_json_alias() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::StructuredJson);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggingError::InvalidFormat(_))
        ));
        assert_eq!(LogFormat::from_json_flag(true), LogFormat::StructuredJson);
    }

    #[test]
    fn settings_parse_from_toml() {
        let settings: LoggingSettings = r#"
            level = "debug"
            format = "structured-json"
            target = { file = "logs/run.log" }
        "#
        .parse()
        .unwrap();
        assert_eq!(settings.level, LogLevel::Debug);
        assert_eq!(settings.format, LogFormat::StructuredJson);
        assert_eq!(settings.target, LogTarget::File(PathBuf::from("logs/run.log")));
    }

    #[test]
    fn settings_accept_numeric_level_and_defaults() {
        let settings: LoggingSettings = "level = 30\nformat = \"json\"".parse().unwrap();
        assert_eq!(settings.level, LogLevel::Warn);
        assert_eq!(settings.format, LogFormat::StructuredJson);
        assert_eq!(settings.target, LogTarget::Stdout);

        let empty: LoggingSettings = "".parse().unwrap();
        assert_eq!(empty, LoggingSettings::default());
    }

    #[test]
    fn settings_reject_bad_level() {
        let err = "level = \"loud\"".parse::<LoggingSettings>().unwrap_err();
        assert!(matches!(err, LoggingError::ConfigParse(_)));
    }

    #[test]
    fn settings_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        fs::write(&path, "target = \"stderr\"\nlevel = \"error\"\n").unwrap();
        let settings = LoggingSettings::load(&path).unwrap();
        assert_eq!(settings.target, LogTarget::Stderr);
        assert_eq!(settings.level, LogLevel::Error);

        let missing = LoggingSettings::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, LoggingError::ConfigRead { .. }));
    }
}
