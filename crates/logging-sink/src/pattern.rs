//! crates/logging-sink/src/pattern.rs
//! Compiled formatting templates applied by sinks around the wire payload.

use std::fmt::Write as _;
use std::time::SystemTime;

use thiserror::Error;
use time::OffsetDateTime;

use crate::severity::Severity;

/// Pattern applied when a logger is constructed: `[%H:%M:%S.%f] [%^%l%$] %v`.
pub const DEFAULT_PATTERN: &str = "[%H:%M:%S.%f] [%^%l%$] %v";

/// Error raised when a pattern string cannot be compiled.
///
/// Pattern compilation happens at configuration time so a malformed pattern
/// surfaces immediately instead of degrading every rendered record.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("pattern string is empty")]
    Empty,
    /// The pattern contained a `%` token this engine does not know.
    #[error("unknown pattern token `%{0}`")]
    UnknownToken(char),
    /// The pattern ended in the middle of a `%` token.
    #[error("pattern ends with a dangling `%`")]
    DanglingPercent,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Hour,
    Minute,
    Second,
    Millis,
    Micros,
    Year,
    Month,
    Day,
    Label,
    Payload,
    ColorStart,
    ColorEnd,
}

/// A compiled formatting template.
///
/// Templates wrap the wire payload (pad + section prefix + one payload line)
/// with timestamp and severity decoration. They are compiled once per
/// `configure` call and cloned into every attached sink, so render time never
/// re-parses the pattern string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternTemplate {
    segments: Vec<Segment>,
}

impl PatternTemplate {
    /// Compiles a pattern string.
    ///
    /// Recognized tokens: `%H` `%M` `%S` (zero-padded clock), `%e`
    /// (milliseconds), `%f` (microseconds), `%Y` `%m` `%d` (date), `%l`
    /// (severity label), `%v` (payload), `%^`/`%$` (severity color range on
    /// color-capable sinks), `%%` (literal percent).
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }

            let token = chars.next().ok_or(PatternError::DanglingPercent)?;
            if token == '%' {
                literal.push('%');
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            segments.push(match token {
                'H' => Segment::Hour,
                'M' => Segment::Minute,
                'S' => Segment::Second,
                'e' => Segment::Millis,
                'f' => Segment::Micros,
                'Y' => Segment::Year,
                'm' => Segment::Month,
                'd' => Segment::Day,
                'l' => Segment::Label,
                'v' => Segment::Payload,
                '^' => Segment::ColorStart,
                '$' => Segment::ColorEnd,
                other => return Err(PatternError::UnknownToken(other)),
            });
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Renders one record through the template.
    ///
    /// `payload` is the wire line handed to [`Sink::write`](crate::Sink::write);
    /// `use_color` selects whether the `%^`/`%$` range emits ANSI codes for
    /// the record's severity.
    #[must_use]
    pub fn format(&self, severity: Severity, payload: &str, use_color: bool) -> String {
        let now = OffsetDateTime::from(SystemTime::now());
        let (color_start, color_end) = if use_color {
            color_codes(severity)
        } else {
            ("", "")
        };

        let mut out = String::with_capacity(payload.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Hour => {
                    let _ = write!(out, "{:02}", now.hour());
                }
                Segment::Minute => {
                    let _ = write!(out, "{:02}", now.minute());
                }
                Segment::Second => {
                    let _ = write!(out, "{:02}", now.second());
                }
                Segment::Millis => {
                    let _ = write!(out, "{:03}", now.millisecond());
                }
                Segment::Micros => {
                    let _ = write!(out, "{:06}", now.microsecond());
                }
                Segment::Year => {
                    let _ = write!(out, "{:04}", now.year());
                }
                Segment::Month => {
                    let _ = write!(out, "{:02}", u8::from(now.month()));
                }
                Segment::Day => {
                    let _ = write!(out, "{:02}", now.day());
                }
                Segment::Label => out.push_str(severity.label()),
                Segment::Payload => out.push_str(payload),
                Segment::ColorStart => out.push_str(color_start),
                Segment::ColorEnd => out.push_str(color_end),
            }
        }
        out
    }
}

impl Default for PatternTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_PATTERN).expect("default pattern is valid")
    }
}

/// ANSI start/reset codes for a severity's color range.
const fn color_codes(severity: Severity) -> (&'static str, &'static str) {
    const RESET: &str = "\x1b[0m";
    match severity {
        Severity::Trace => ("\x1b[90m", RESET),
        Severity::Debug => ("\x1b[36m", RESET),
        Severity::Info => ("\x1b[32m", RESET),
        Severity::Warn => ("\x1b[33m", RESET),
        Severity::Error => ("\x1b[31m", RESET),
        Severity::Critical => ("\x1b[1;31m", RESET),
        Severity::Off => ("", ""),
    }
}
