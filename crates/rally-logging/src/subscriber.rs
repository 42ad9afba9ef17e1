//! ---
//! rally_section: "01-logging"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Global subscriber installation and in-place reconfiguration."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::fs;
use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, Layer, Registry};

use crate::json_lines::LoggerKeyWriter;
use crate::{LogFormat, LogTarget, LoggingError, LoggingSettings, Result};

pub(crate) type FormatLayer = Box<dyn Layer<Registry> + Send + Sync>;

type FormatHandle = reload::Handle<FormatLayer, Registry>;
type LevelHandle =
    reload::Handle<LevelFilter, Layered<reload::Layer<FormatLayer, Registry>, Registry>>;

struct ReloadHandles {
    format: FormatHandle,
    level: LevelHandle,
}

impl ReloadHandles {
    fn apply(&self, settings: &LoggingSettings) -> Result<()> {
        self.format.reload(build_format_layer(settings)?)?;
        self.level.reload(settings.level.level_filter())?;
        Ok(())
    }
}

static HANDLES: OnceCell<ReloadHandles> = OnceCell::new();

/// Install the global subscriber on first use, reload it afterwards.
pub(crate) fn configure(settings: &LoggingSettings) -> Result<()> {
    let mut installed = false;
    let handles = HANDLES.get_or_try_init(|| {
        installed = true;
        install(settings)
    })?;
    if !installed {
        handles.apply(settings)?;
    }
    Ok(())
}

pub(crate) fn is_installed() -> bool {
    HANDLES.get().is_some()
}

fn install(settings: &LoggingSettings) -> Result<ReloadHandles> {
    let (format_layer, format) = reload::Layer::new(build_format_layer(settings)?);
    let (level_layer, level) = reload::Layer::new(settings.level.level_filter());

    tracing_subscriber::registry()
        .with(format_layer)
        .with(level_layer)
        .try_init()?;

    Ok(ReloadHandles { format, level })
}

/// Build the line formatter for `settings`, without any level filtering.
pub(crate) fn build_format_layer(settings: &LoggingSettings) -> Result<FormatLayer> {
    let writer = make_writer(&settings.target)?;

    let layer = match settings.format {
        LogFormat::StructuredJson => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(LoggerKeyWriter::new(writer))
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(false)
            .with_ansi(use_ansi(&settings.target))
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(writer)
            .boxed(),
    };
    Ok(layer)
}

/// Colour only when the stream is an interactive terminal.
fn use_ansi(target: &LogTarget) -> bool {
    match target {
        LogTarget::Stdout => io::stdout().is_terminal(),
        LogTarget::Stderr => io::stderr().is_terminal(),
        LogTarget::File(_) => false,
    }
}

fn make_writer(target: &LogTarget) -> Result<BoxMakeWriter> {
    match target {
        LogTarget::Stdout => Ok(BoxMakeWriter::new(io::stdout)),
        LogTarget::Stderr => Ok(BoxMakeWriter::new(io::stderr)),
        LogTarget::File(path) => {
            let file_error = |reason: String| LoggingError::LogFile {
                path: path.clone(),
                reason,
            };
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| file_error("path has no usable file name".to_owned()))?;
            let directory = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => std::path::PathBuf::from("."),
            };
            fs::create_dir_all(&directory).map_err(|err| file_error(err.to_string()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(&directory)
                .map_err(|err| file_error(err.to_string()))?;
            Ok(BoxMakeWriter::new(appender))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn file_target_without_file_name_is_rejected() {
        let settings = LoggingSettings::default().with_target(LogTarget::File(PathBuf::from("/")));
        let err = build_format_layer(&settings).err().expect("root has no file name");
        assert!(matches!(err, LoggingError::LogFile { .. }));
    }

    #[test]
    fn file_target_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("run.log");
        let settings = LoggingSettings::default().with_target(LogTarget::File(path.clone()));
        build_format_layer(&settings).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn file_targets_never_colour() {
        let target = LogTarget::File(PathBuf::from("run.log"));
        assert!(!use_ansi(&target));
    }
}
