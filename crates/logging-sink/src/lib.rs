#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the wire-contract layer of the section logger: the
//! [`Severity`] table with its fixed label column, the [`PatternTemplate`]
//! engine that decorates records with timestamps and color, and the concrete
//! destinations the `logging` façade fans out to. The façade hands every sink
//! a fully assembled payload line (pad + section prefix + one line of the
//! message); everything from the timestamp outward is decided here.
//!
//! # Design
//!
//! [`Sink`] is a narrow capability: deliver a line, adopt a template, adopt a
//! minimum level. Each implementation serializes its own writes behind a
//! mutex, so one sink instance can be shared by several loggers and still
//! produce a coherent stream. Construction is the only fallible surface —
//! an unopenable file or a zero rotation threshold is a [`SinkError`] at
//! attach time. After construction a sink owns its error policy: the console
//! is best-effort, the file-backed sinks report the first failure to stderr
//! and keep trying.
//!
//! # Examples
//!
//! Capture wire lines with the in-memory sink:
//!
//! ```
//! use logging_sink::{MemorySink, Severity, Sink};
//!
//! let sink = MemorySink::new();
//! sink.write(Severity::Warn, "disk almost full");
//! assert_eq!(sink.lines(), vec!["disk almost full"]);
//! ```

mod pattern;
mod severity;
mod sink;

pub use pattern::{DEFAULT_PATTERN, PatternError, PatternTemplate};
pub use severity::{LABEL_WIDTH, Severity};
pub use sink::{ConsoleSink, FileSink, MemorySink, RotatingFileSink, Sink, SinkError};
