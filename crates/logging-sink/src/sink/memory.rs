//! crates/logging-sink/src/sink/memory.rs
//! In-memory sink capturing wire lines verbatim, for tests and log capture.

use std::sync::Mutex;

use super::{Sink, lock};
use crate::pattern::PatternTemplate;
use crate::severity::Severity;

/// Sink that stores `(severity, line)` pairs instead of rendering them.
///
/// The stored line is exactly the wire payload the logger produced (pad,
/// section prefix, payload), making this the reference observer for the sink
/// contract. The template handed to [`apply_template`](Sink::apply_template)
/// is retained so callers can assert a late-attached sink received the
/// logger's current formatting state.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    records: Vec<(Severity, String)>,
    template: Option<PatternTemplate>,
    min_level: Severity,
}

impl Default for State {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            template: None,
            min_level: Severity::Trace,
        }
    }
}

impl MemorySink {
    /// Creates an empty capture sink delivering every severity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every captured record.
    #[must_use]
    pub fn records(&self) -> Vec<(Severity, String)> {
        lock(&self.state).records.clone()
    }

    /// Returns the captured wire lines without their severities.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.state)
            .records
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Returns how many records have been captured.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.state).records.len()
    }

    /// Returns `true` when nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.state).records.is_empty()
    }

    /// Discards every captured record.
    pub fn clear(&self) {
        lock(&self.state).records.clear();
    }

    /// Returns the template most recently applied to this sink, if any.
    #[must_use]
    pub fn applied_template(&self) -> Option<PatternTemplate> {
        lock(&self.state).template.clone()
    }

    /// Returns the minimum level most recently applied to this sink.
    #[must_use]
    pub fn minimum_level(&self) -> Severity {
        lock(&self.state).min_level
    }
}

impl Sink for MemorySink {
    fn write(&self, severity: Severity, line: &str) {
        let mut state = lock(&self.state);
        if severity < state.min_level {
            return;
        }
        state.records.push((severity, line.to_string()));
    }

    fn apply_template(&self, template: &PatternTemplate) {
        lock(&self.state).template = Some(template.clone());
    }

    fn set_minimum_level(&self, level: Severity) {
        lock(&self.state).min_level = level;
    }
}
