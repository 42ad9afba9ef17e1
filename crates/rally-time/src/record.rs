//! ---
//! rally_section: "03-timing"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Drop guard storing an elapsed duration."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Writes the time since its creation into `slot` when dropped, which also
/// happens while unwinding.
pub(crate) struct RecordOnDrop<'a> {
    start: Instant,
    slot: &'a Mutex<Duration>,
}

impl<'a> RecordOnDrop<'a> {
    pub(crate) fn start(slot: &'a Mutex<Duration>) -> Self {
        Self {
            start: Instant::now(),
            slot,
        }
    }

    pub(crate) fn started_at(&self) -> Instant {
        self.start
    }
}

impl Drop for RecordOnDrop<'_> {
    fn drop(&mut self) {
        *self.slot.lock() = self.start.elapsed();
    }
}
