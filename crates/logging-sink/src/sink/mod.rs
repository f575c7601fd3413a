//! crates/logging-sink/src/sink/mod.rs
//! The sink capability trait and its concrete implementations.

use std::io;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::pattern::PatternTemplate;
use crate::severity::Severity;

mod console;
mod file;
mod memory;
mod rotating;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use rotating::RotatingFileSink;

/// Error raised when a sink cannot be constructed.
///
/// Sinks fail fast: an unopenable file or an invalid rotation threshold is
/// reported to the caller at attach time, never deferred to the first write.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying file could not be opened or inspected.
    #[error("log file I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A rotating sink was configured with a zero byte threshold.
    #[error("rotating sink requires a non-zero size threshold")]
    ZeroRotationSize,
}

/// An output destination for rendered log lines.
///
/// `line` is the wire payload assembled by the logger: pad spaces for label
/// alignment, the section prefix, and one payload line. The sink wraps it
/// with its current [`PatternTemplate`] (timestamp, severity label, color)
/// and delivers it.
///
/// Implementations serialize their own writes, so one sink instance may be
/// attached to several loggers and still produce a coherent stream. Write
/// failures after construction belong to the sink's own policy; they are
/// never surfaced to the logger and must not panic.
pub trait Sink: Send + Sync {
    /// Delivers one rendered line at the given severity.
    fn write(&self, severity: Severity, line: &str);

    /// Replaces the formatting template used for subsequent writes.
    fn apply_template(&self, template: &PatternTemplate);

    /// Sets the least severity this sink will deliver.
    ///
    /// [`Severity::Off`] silences the sink entirely.
    fn set_minimum_level(&self, level: Severity);
}

/// Locks sink state, recovering from a poisoned mutex.
///
/// A panic while holding sink state leaves nothing half-written that a later
/// record could corrupt, so writers continue instead of propagating the
/// poison.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reports a write failure to stderr, at most once per sink instance.
pub(crate) fn report_write_error(reported: &mut bool, path: &Path, error: &io::Error) {
    if !*reported {
        *reported = true;
        eprintln!("logging-sink: write to {} failed: {error}", path.display());
    }
}
