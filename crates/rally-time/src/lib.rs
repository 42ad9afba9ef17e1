//! ---
//! rally_section: "03-timing"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Function and scope timing helpers."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! Wall-clock timing helpers.
//!
//! - [`timeit`] wraps a function so every call records its duration.
//! - [`Timer`] records the duration of a scope, including scopes left by `?`
//!   or by a panic.

mod record;
mod timed;
mod timer;

pub use timed::{timeit, Timed};
pub use timer::{Timer, TimerScope};

/// Evaluate a block under a named [`Timer`] that logs its duration.
///
/// ```
/// let total = rally_time::measure!("sum", { (1..=10).sum::<u32>() });
/// assert_eq!(total, 55);
/// ```
#[macro_export]
macro_rules! measure {
    ($name:expr, $block:block) => {{
        let timer = $crate::Timer::named($name);
        timer.time(|| $block)
    }};
}
