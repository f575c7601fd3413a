//! crates/logging/src/tracing_bridge.rs
//! Bridge forwarding `tracing` events into a bound [`Logger`].
//!
//! The layer lets code written against the standard tracing macros
//! (`trace!`, `debug!`, `info!`, ...) flow through a section logger's gating
//! and sinks without touching call sites. Events are mapped to the matching
//! [`Severity`]; the logger's level set decides delivery, so muting or rate
//! gating the logger silences bridged events too.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, LoggerLayer};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let logger = Arc::new(Logger::new("bridged"));
//! let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
//! tracing::subscriber::set_global_default(subscriber).expect("install subscriber");
//! tracing::info!("visible through the section logger");
//! ```

use std::fmt;
use std::sync::Arc;

use logging_sink::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::logger::Logger;

/// A tracing-subscriber layer delivering events to a [`Logger`].
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    /// Binds a layer to `logger`.
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

fn severity_for(level: &Level) -> Severity {
    if *level == Level::TRACE {
        Severity::Trace
    } else if *level == Level::DEBUG {
        Severity::Debug
    } else if *level == Level::INFO {
        Severity::Info
    } else if *level == Level::WARN {
        Severity::Warn
    } else {
        Severity::Error
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = severity_for(event.metadata().level());
        if !self.logger.is_enabled(severity) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.log(severity, &message);
        }
    }
}
