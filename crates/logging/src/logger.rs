//! crates/logging/src/logger.rs
//! The logging facade: gating, section bookkeeping, and sink fan-out.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging_sink::{
    ConsoleSink, DEFAULT_PATTERN, FileSink, PatternError, PatternTemplate, RotatingFileSink,
    Severity, Sink, SinkError,
};

use crate::guard::SectionGuard;
use crate::level_set::LevelSet;
use crate::registry::LoggerRegistry;
use crate::section::SectionTracker;

/// A named, leveled logger fanning records out to attached sinks.
///
/// Every operation takes `&self`; interior state (level set, sink list,
/// section depth, template) sits behind one mutex, so a logger can be shared
/// across threads. Calls block only on the attached sinks' own writes.
///
/// The wire line handed to each sink is `<pad><section-prefix><payload-line>`:
/// pad spaces align the severity label column across levels, the prefix is
/// `"| "` per open section, and multi-line messages become one record per
/// line so stack traces stay indented like single-line output.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, MemorySink, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::bare("doc_logger");
/// logger.add_sink(sink.clone());
///
/// logger.info("ready");
/// {
///     let _section = logger.section(Severity::Info, "load");
///     logger.warn("missing index");
/// }
/// // info + start framing + warn + end framing
/// assert_eq!(sink.len(), 4);
/// ```
pub struct Logger {
    name: String,
    inner: Mutex<Inner>,
}

struct Inner {
    levels: LevelSet,
    sinks: Vec<Arc<dyn Sink>>,
    sections: SectionTracker,
    template: PatternTemplate,
}

impl Logger {
    /// Creates a logger with a colorized console sink attached, gated at
    /// [`Severity::Debug`] with the default pattern.
    ///
    /// The name is claimed through the process-wide registry; a colliding
    /// base gets a `_1`, `_2`, ... suffix.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_registry(LoggerRegistry::global(), name)
    }

    /// Like [`Logger::new`], claiming the name from an explicit registry.
    #[must_use]
    pub fn with_registry(registry: &LoggerRegistry, name: &str) -> Self {
        let logger = Self::bare_with_registry(registry, name);
        logger.add_sink(Arc::new(ConsoleSink::new(true)));
        logger
            .configure(Severity::Debug, DEFAULT_PATTERN)
            .expect("default pattern is valid");
        logger
    }

    /// Creates a logger with no sinks and every severity enabled.
    #[must_use]
    pub fn bare(name: &str) -> Self {
        Self::bare_with_registry(LoggerRegistry::global(), name)
    }

    /// Like [`Logger::bare`], claiming the name from an explicit registry.
    #[must_use]
    pub fn bare_with_registry(registry: &LoggerRegistry, name: &str) -> Self {
        Self {
            name: registry.claim(name),
            inner: Mutex::new(Inner {
                levels: LevelSet::all(),
                sinks: Vec::new(),
                sections: SectionTracker::new(),
                template: PatternTemplate::default(),
            }),
        }
    }

    /// Returns the registered name, suffix included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking sink must not wedge every later record.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns whether records at `severity` currently produce output.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.lock().levels.is_enabled(severity)
    }

    /// Logs `message` at `severity`.
    ///
    /// A gated severity is a complete no-op: the line is never assembled and
    /// no sink is invoked. An empty sink list short-circuits the same way.
    /// Each line of a multi-line message becomes its own record carrying the
    /// same pad and section prefix.
    pub fn log(&self, severity: Severity, message: &str) {
        let inner = self.lock();
        if !inner.levels.is_enabled(severity) || inner.sinks.is_empty() {
            return;
        }
        fan_out(&inner, severity, message);
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Logs at [`Severity::Info`].
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Logs at [`Severity::Warn`].
    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Logs at [`Severity::Critical`].
    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    /// Emits a start-framing record and deepens the section nesting.
    ///
    /// Depth bookkeeping proceeds even when `severity` is gated off, so
    /// enable/disable cycles cannot skew nesting.
    pub fn start_section(&self, severity: Severity, name: &str) {
        let mut inner = self.lock();
        if inner.levels.is_enabled(severity) && !inner.sinks.is_empty() {
            fan_out(&inner, severity, &format!("=== start {name} === {{"));
        }
        inner.sections.enter();
    }

    /// Shallows the section nesting and emits an end-framing record.
    ///
    /// Closing below depth zero clamps silently; the framing record is still
    /// emitted at depth zero.
    pub fn end_section(&self, severity: Severity, name: &str) {
        let mut inner = self.lock();
        inner.sections.leave();
        if inner.levels.is_enabled(severity) && !inner.sinks.is_empty() {
            fan_out(&inner, severity, &format!("===   end {name} === }}"));
        }
    }

    /// Opens a framed section bound to the returned guard's scope.
    ///
    /// The matching [`end_section`](Self::end_section) runs when the guard
    /// drops, on every exit path.
    #[must_use]
    pub fn section(&self, severity: Severity, name: impl Into<String>) -> SectionGuard<'_> {
        SectionGuard::framed(self, severity, name.into())
    }

    /// Mutes this logger for the returned guard's scope.
    ///
    /// The full [`LevelSet`] is snapshotted and restored on drop; nothing is
    /// emitted inside the scope, framing included.
    #[must_use]
    pub fn muted_section(&self) -> SectionGuard<'_> {
        SectionGuard::muted(self)
    }

    /// Returns the current section nesting depth.
    #[must_use]
    pub fn section_depth(&self) -> usize {
        self.lock().sections.depth()
    }

    /// Attaches a sink and immediately reapplies the current template and
    /// minimum level to every sink, the new one included.
    ///
    /// Sinks fan out in attach order; attaching the same sink twice delivers
    /// every record twice.
    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        let mut inner = self.lock();
        inner.sinks.push(sink);
        reapply(&inner);
    }

    /// Attaches a console sink, colorized when `color` is set and stdout is
    /// a terminal.
    pub fn add_console_sink(&self, color: bool) {
        self.add_sink(Arc::new(ConsoleSink::new(color)));
    }

    /// Attaches a file sink, truncating existing content when `truncate` is
    /// set and appending otherwise.
    pub fn add_file_sink(&self, path: impl AsRef<Path>, truncate: bool) -> Result<(), SinkError> {
        let sink = FileSink::create(path, truncate)?;
        self.add_sink(Arc::new(sink));
        Ok(())
    }

    /// Attaches a rotating file sink rolling at `max_size` bytes and keeping
    /// at most `max_files` historical files.
    pub fn add_rotating_sink(
        &self,
        path: impl AsRef<Path>,
        max_size: u64,
        max_files: usize,
    ) -> Result<(), SinkError> {
        let sink = RotatingFileSink::create(path, max_size, max_files)?;
        self.add_sink(Arc::new(sink));
        Ok(())
    }

    /// Detaches every sink. Subsequent logging produces no output.
    pub fn remove_all_sinks(&self) {
        self.lock().sinks.clear();
    }

    /// Returns how many sinks are attached.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.lock().sinks.len()
    }

    /// Atomically updates gating and the formatting template, then reapplies
    /// both to every attached sink.
    ///
    /// Accepts a single [`Severity`] (threshold semantics) or a full
    /// [`LevelSet`]. A malformed pattern fails fast and leaves the previous
    /// configuration untouched.
    pub fn configure(
        &self,
        levels: impl Into<LevelSet>,
        pattern: &str,
    ) -> Result<(), PatternError> {
        let template = PatternTemplate::parse(pattern)?;
        let mut inner = self.lock();
        inner.levels = levels.into();
        inner.template = template;
        reapply(&inner);
        Ok(())
    }

    /// Gates this logger at `level` and above.
    pub fn set_level(&self, level: Severity) {
        let mut inner = self.lock();
        inner.levels.set_threshold(level);
        reapply(&inner);
    }

    /// Replaces the level set wholesale.
    pub fn set_levels(&self, levels: LevelSet) {
        let mut inner = self.lock();
        inner.levels = levels;
        reapply(&inner);
    }

    /// Disables every severity. Restorable via [`set_levels`](Self::set_levels).
    pub fn disable_all_levels(&self) {
        let mut inner = self.lock();
        inner.levels.disable_all();
        reapply(&inner);
    }

    /// Enables every severity.
    pub fn enable_all_levels(&self) {
        let mut inner = self.lock();
        inner.levels.enable_all();
        reapply(&inner);
    }

    /// Returns a snapshot of the level set, sufficient to restore the
    /// current gating exactly.
    #[must_use]
    pub fn current_levels(&self) -> LevelSet {
        self.lock().levels
    }

    /// Returns the least enabled severity, or [`Severity::Off`] when muted.
    #[must_use]
    pub fn current_level(&self) -> Severity {
        self.lock().levels.lowest().unwrap_or(Severity::Off)
    }
}

/// Assembles wire lines for one record and delivers them to every sink.
fn fan_out(inner: &Inner, severity: Severity, message: &str) {
    let prefix = inner.sections.prefix();
    let emit = |payload: &str| {
        let mut line =
            String::with_capacity(severity.pad_width() + prefix.len() + payload.len());
        for _ in 0..severity.pad_width() {
            line.push(' ');
        }
        line.push_str(&prefix);
        line.push_str(payload);
        for sink in &inner.sinks {
            sink.write(severity, &line);
        }
    };

    if message.is_empty() {
        emit("");
    } else {
        for payload in message.lines() {
            emit(payload);
        }
    }
}

/// Pushes the logger's template and minimum level onto every sink.
fn reapply(inner: &Inner) {
    let minimum = inner.levels.lowest().unwrap_or(Severity::Off);
    for sink in &inner.sinks {
        sink.apply_template(&inner.template);
        sink.set_minimum_level(minimum);
    }
}
