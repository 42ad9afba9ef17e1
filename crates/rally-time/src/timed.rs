//! ---
//! rally_section: "03-timing"
//! rally_subsection: "module"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Function wrapper recording the duration of its latest call."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;

use crate::record::RecordOnDrop;

/// A function together with the wall-clock duration of its most recent call.
pub struct Timed<F> {
    func: F,
    last_runtime: Mutex<Duration>,
}

/// Wrap `func` so that each call through the wrapper records its duration.
///
/// ```
/// let double = rally_time::timeit(|x: u32| x * 2);
/// assert_eq!(double.call_with(21), 42);
/// assert!(double.last_runtime_secs() >= 0.0);
/// ```
pub fn timeit<F>(func: F) -> Timed<F> {
    Timed {
        func,
        last_runtime: Mutex::new(Duration::ZERO),
    }
}

impl<F> Timed<F> {
    /// Run `call` against the wrapped function and record how long it took.
    ///
    /// This is the general form for functions of any arity:
    /// `timed.invoke(|f| f(a, b))`. The duration is recorded even when the
    /// call panics.
    pub fn invoke<R>(&self, call: impl FnOnce(&F) -> R) -> R {
        let _record = RecordOnDrop::start(&self.last_runtime);
        call(&self.func)
    }

    /// Call a function taking no arguments.
    pub fn call<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        self.invoke(|func| func())
    }

    /// Call a function taking a single argument.
    pub fn call_with<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.invoke(|func| func(arg))
    }

    /// Duration of the most recent call, zero before the first one.
    pub fn last_runtime(&self) -> Duration {
        *self.last_runtime.lock()
    }

    /// [`last_runtime`](Self::last_runtime) in seconds.
    pub fn last_runtime_secs(&self) -> f64 {
        self.last_runtime().as_secs_f64()
    }

    /// The wrapped function.
    pub fn inner(&self) -> &F {
        &self.func
    }

    /// Unwrap, discarding the recorded duration.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for Timed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timed")
            .field("last_runtime", &self.last_runtime())
            .finish_non_exhaustive()
    }
}
