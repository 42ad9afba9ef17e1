//! ---
//! rally_section: "03-timing"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Scoped timer with an optional log line on scope exit."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, error, info, trace, warn, Level};

use crate::record::RecordOnDrop;

/// Measures how long a scope takes.
///
/// [`enter`](Timer::enter) starts a scope; dropping the returned
/// [`TimerScope`] stores the elapsed time on the timer. The value survives the
/// scope and stays unchanged until another scope closes.
///
/// ```
/// use rally_time::Timer;
///
/// let timer = Timer::new();
/// {
///     let _scope = timer.enter();
///     std::thread::sleep(std::time::Duration::from_millis(5));
/// }
/// assert!(timer.elapsed_ms() >= 5.0);
/// ```
#[derive(Debug)]
pub struct Timer {
    name: Option<String>,
    level: Level,
    elapsed: Mutex<Duration>,
}

impl Timer {
    /// Silent timer.
    pub fn new() -> Self {
        Self {
            name: None,
            level: Level::INFO,
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    /// Timer that logs `[Timer] <name> completed in <ms>ms` when a scope closes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Level of the completion log line, `INFO` by default.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Start a scope.
    pub fn enter(&self) -> TimerScope<'_> {
        TimerScope {
            timer: self,
            record: Some(RecordOnDrop::start(&self.elapsed)),
        }
    }

    /// Run `body` inside a scope and return its result.
    pub fn time<R>(&self, body: impl FnOnce() -> R) -> R {
        let _scope = self.enter();
        body()
    }

    /// Duration of the last closed scope, zero before any.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock()
    }

    /// [`elapsed`](Self::elapsed) in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// [`elapsed`](Self::elapsed) in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs() * 1000.0
    }

    /// Name given to [`Timer::named`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn report(&self, name: &str) {
        let elapsed = self.elapsed_ms();
        match self.level {
            Level::TRACE => trace!("[Timer] {} completed in {:.2}ms", name, elapsed),
            Level::DEBUG => debug!("[Timer] {} completed in {:.2}ms", name, elapsed),
            Level::INFO => info!("[Timer] {} completed in {:.2}ms", name, elapsed),
            Level::WARN => warn!("[Timer] {} completed in {:.2}ms", name, elapsed),
            _ => error!("[Timer] {} completed in {:.2}ms", name, elapsed),
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Open timing scope; closing it (by drop) finalises the owning [`Timer`].
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct TimerScope<'a> {
    timer: &'a Timer,
    record: Option<RecordOnDrop<'a>>,
}

impl TimerScope<'_> {
    /// Time spent in this scope so far.
    pub fn elapsed(&self) -> Duration {
        self.record
            .as_ref()
            .map(|record| record.started_at().elapsed())
            .unwrap_or_default()
    }
}

impl Drop for TimerScope<'_> {
    fn drop(&mut self) {
        // Store the duration before reporting it.
        drop(self.record.take());
        if let Some(name) = self.timer.name() {
            self.timer.report(name);
        }
    }
}
