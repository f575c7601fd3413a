//! crates/logging-sink/src/sink/console.rs
//! Best-effort stdout sink with optional per-severity colorization.

use std::io::{self, Write as _};
use std::sync::Mutex;

use is_terminal::IsTerminal as _;

use super::{Sink, lock};
use crate::pattern::PatternTemplate;
use crate::severity::Severity;

/// Sink that writes rendered records to stdout.
///
/// Color is applied only when it was requested *and* stdout is a terminal, so
/// piping a colorized logger into a file never embeds escape codes. Writes
/// are best-effort: a broken stdout drops the record silently, matching the
/// behavior of a console device disappearing underneath the process.
pub struct ConsoleSink {
    color: bool,
    state: Mutex<State>,
}

struct State {
    template: PatternTemplate,
    min_level: Severity,
}

impl ConsoleSink {
    /// Creates a console sink, colorizing when `color` is set and stdout is a
    /// terminal.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self {
            color: color && io::stdout().is_terminal(),
            state: Mutex::new(State {
                template: PatternTemplate::default(),
                min_level: Severity::Trace,
            }),
        }
    }

    /// Returns whether this sink will emit ANSI color codes.
    #[must_use]
    pub fn colorized(&self) -> bool {
        self.color
    }
}

impl Sink for ConsoleSink {
    fn write(&self, severity: Severity, line: &str) {
        let state = lock(&self.state);
        if severity < state.min_level {
            return;
        }
        let mut rendered = state.template.format(severity, line, self.color);
        rendered.push('\n');
        let _ = io::stdout().lock().write_all(rendered.as_bytes());
    }

    fn apply_template(&self, template: &PatternTemplate) {
        lock(&self.state).template = template.clone();
    }

    fn set_minimum_level(&self, level: Severity) {
        lock(&self.state).min_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_off_stays_off() {
        let sink = ConsoleSink::new(false);
        assert!(!sink.colorized());
    }

    #[test]
    fn requested_color_depends_on_a_terminal() {
        let sink = ConsoleSink::new(true);
        assert_eq!(sink.colorized(), io::stdout().is_terminal());
    }
}
