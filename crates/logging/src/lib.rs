#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a leveled, human-readable logging facade built around three
//! ideas: an explicit per-severity enable set instead of a single threshold,
//! visual nesting of logical *sections* of execution, and the ability to
//! silence or rate-limit output without touching call sites.
//!
//! A [`Logger`] owns a [`LevelSet`], an ordered list of attached sinks, and a
//! [`SectionTracker`]. Records pass the level gate, pick up enough pad spaces
//! to align the severity label column, pick up one `"| "` marker per open
//! section, and fan out line-by-line to every sink. The sinks themselves —
//! console, single file, rotating file — live in the `logging-sink` crate
//! and are re-exported here.
//!
//! # Design
//!
//! - Gating is checked before anything is formatted; a disabled severity is
//!   a complete no-op, and the [`log!`] macro extends that to the caller's
//!   format arguments.
//! - [`SectionGuard`] pairs every section open with exactly one close on
//!   every exit path, unwinding included. Its muted mode snapshots the full
//!   level set, so fine-grained gating survives a mute/restore round trip.
//! - [`RateGate`] bounds how often a logger emits by toggling the whole
//!   level set once per tick, keeping per-iteration diagnostics cheap.
//! - Logger names are process-unique: collisions resolve to `name_1`,
//!   `name_2`, ... through the [`LoggerRegistry`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Logger, MemorySink, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::bare("overview");
//! logger.add_sink(sink.clone());
//!
//! logger.info("starting up");
//! {
//!     let _section = logger.section(Severity::Info, "load assets");
//!     logger.warn("texture cache cold");
//! }
//!
//! assert_eq!(
//!     sink.lines(),
//!     vec![
//!         "    starting up",
//!         "    === start load assets === {",
//!         "    | texture cache cold",
//!         "    ===   end load assets === }",
//!     ],
//! );
//! ```

mod guard;
mod level_set;
mod logger;
mod macros;
mod rate_gate;
mod registry;
mod section;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use guard::SectionGuard;
pub use level_set::LevelSet;
pub use logger::Logger;
pub use rate_gate::{RateGate, RateGateError};
pub use registry::LoggerRegistry;
pub use section::{SECTION_PREFIX, SectionTracker};
#[cfg(feature = "tracing")]
pub use tracing_bridge::LoggerLayer;

pub use logging_sink::{
    ConsoleSink, DEFAULT_PATTERN, FileSink, LABEL_WIDTH, MemorySink, PatternError,
    PatternTemplate, RotatingFileSink, Severity, Sink, SinkError,
};
