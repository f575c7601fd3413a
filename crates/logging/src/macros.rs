//! crates/logging/src/macros.rs
//! Gate-before-format logging macro.

/// Logs a formatted message through a [`Logger`](crate::Logger), evaluating
/// the format arguments only when the severity is enabled.
///
/// The method wrappers take an already-built `&str`; this macro is the lazy
/// path for call sites whose arguments are expensive to format.
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity, log};
///
/// let logger = Logger::bare("macro_docs");
/// log!(logger, Severity::Info, "processed {} records", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let severity = $severity;
        if logger.is_enabled(severity) {
            logger.log(severity, &format!($($arg)+));
        }
    }};
}
