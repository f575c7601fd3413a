//! crates/logging-sink/src/severity.rs
//! Severity levels and their display-label table.

use std::fmt;

/// Width of the severity label column across all levels.
///
/// Every rendered record is left-padded so its label column lines up with the
/// widest label (`critical`). The value is fixed at compile time; a unit test
/// pins it to the longest entry of the label table.
pub const LABEL_WIDTH: usize = 8;

/// Severity of a log record, ordered from most to least verbose.
///
/// `Off` is a gate value only: it can be stored as a threshold or a sink
/// minimum, but no record is ever emitted at `Off`.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained control flow diagnostics.
    Trace,
    /// Development-time diagnostics.
    Debug,
    /// Normal operational messages.
    Info,
    /// Recoverable anomalies.
    Warn,
    /// Failures of the current operation.
    Error,
    /// Failures the process cannot recover from.
    Critical,
    /// Pseudo-level used to gate everything off. Never a message severity.
    Off,
}

impl Severity {
    /// The six real message severities, most verbose first.
    pub const LEVELS: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the display label for this severity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "err",
            Self::Critical => "critical",
            Self::Off => "off",
        }
    }

    /// Returns the number of pad spaces that align this severity's label
    /// column with [`LABEL_WIDTH`].
    #[must_use]
    pub const fn pad_width(self) -> usize {
        LABEL_WIDTH - self.label().len()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
