//! ---
//! rally_section: "01-logging"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Writer giving every JSON record a logger key."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! JSON records from [`Logger`](crate::Logger) carry a `logger` field. Plain
//! `tracing` events do not, so this writer moves the event `target` into
//! `logger` when the field is absent and drops `target` otherwise.
use std::io::{self, Write};

use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

const LOGGER_KEY: &str = "logger";
const TARGET_KEY: &str = "target";

/// Wraps a [`MakeWriter`] so each record it writes has a `logger` key.
pub(crate) struct LoggerKeyWriter<M> {
    inner: M,
}

impl<M> LoggerKeyWriter<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for LoggerKeyWriter<M> {
    type Writer = LoggerKeyLine<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        LoggerKeyLine {
            inner: self.inner.make_writer(),
        }
    }
}

pub(crate) struct LoggerKeyLine<W> {
    inner: W,
}

impl<W: Write> Write for LoggerKeyLine<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // The fmt layer hands over one complete record per write.
        match std::str::from_utf8(buf).ok().and_then(with_logger_key) {
            Some(record) => {
                self.inner.write_all(record.as_bytes())?;
                Ok(buf.len())
            }
            None => self.inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Rewrite one JSON record; `None` leaves the text untouched.
fn with_logger_key(record: &str) -> Option<String> {
    let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(record) else {
        return None;
    };
    let target = map.remove(TARGET_KEY);
    if !map.contains_key(LOGGER_KEY) {
        map.insert(LOGGER_KEY.to_owned(), target.unwrap_or(Value::Null));
    }
    let mut rewritten = serde_json::to_string(&map).ok()?;
    if record.ends_with('\n') {
        rewritten.push('\n');
    }
    Some(rewritten)
}
