//! Integration tests for sink attachment, reconfiguration, and the name
//! registry.

use std::fs;
use std::sync::Arc;

use logging::{
    Logger, LoggerRegistry, MemorySink, PatternError, PatternTemplate, Severity, SinkError,
};

#[test]
fn late_attached_sink_receives_the_current_state() {
    let logger = Logger::bare("sinks_late_attach");
    logger
        .configure(Severity::Warn, "%l %v")
        .expect("pattern is valid");

    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    let expected = PatternTemplate::parse("%l %v").expect("pattern is valid");
    assert_eq!(sink.applied_template(), Some(expected));
    assert_eq!(sink.minimum_level(), Severity::Warn);
}

#[test]
fn reconfiguration_reaches_every_attached_sink() {
    let logger = Logger::bare("sinks_reconfigure");
    let first = Arc::new(MemorySink::new());
    let second = Arc::new(MemorySink::new());
    logger.add_sink(first.clone());
    logger.add_sink(second.clone());

    logger
        .configure(Severity::Error, "%v!")
        .expect("pattern is valid");

    let expected = PatternTemplate::parse("%v!").expect("pattern is valid");
    assert_eq!(first.applied_template(), Some(expected.clone()));
    assert_eq!(second.applied_template(), Some(expected));
    assert_eq!(first.minimum_level(), Severity::Error);
    assert_eq!(second.minimum_level(), Severity::Error);
}

#[test]
fn malformed_patterns_fail_fast_and_change_nothing() {
    let logger = Logger::bare("sinks_bad_pattern");
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());
    logger
        .configure(Severity::Info, "%v")
        .expect("pattern is valid");

    assert_eq!(
        logger.configure(Severity::Error, ""),
        Err(PatternError::Empty)
    );
    assert_eq!(
        logger.configure(Severity::Error, "%z"),
        Err(PatternError::UnknownToken('z'))
    );

    // The failed calls left gating and formatting untouched.
    assert!(logger.is_enabled(Severity::Info));
    let expected = PatternTemplate::parse("%v").expect("pattern is valid");
    assert_eq!(sink.applied_template(), Some(expected));
}

#[test]
fn duplicate_sinks_deliver_twice() {
    let logger = Logger::bare("sinks_duplicate");
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());
    logger.add_sink(sink.clone());

    logger.info("once");
    assert_eq!(sink.len(), 2);
}

#[test]
fn one_sink_may_serve_several_loggers() {
    let sink = Arc::new(MemorySink::new());
    let first = Logger::bare("sinks_shared_a");
    let second = Logger::bare("sinks_shared_b");
    first.add_sink(sink.clone());
    second.add_sink(sink.clone());

    first.info("from a");
    second.warn("from b");

    assert_eq!(sink.lines(), vec!["    from a", "    from b"]);
}

#[test]
fn removing_all_sinks_silences_the_logger() {
    let logger = Logger::bare("sinks_remove_all");
    let sink = Arc::new(MemorySink::new());
    logger.add_sink(sink.clone());

    logger.info("heard");
    logger.remove_all_sinks();
    assert_eq!(logger.sink_count(), 0);
    logger.info("unheard");

    assert_eq!(sink.lines(), vec!["    heard"]);
}

#[test]
fn file_sinks_render_through_the_template() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("managed.log");

    let logger = Logger::bare("sinks_file");
    logger
        .configure(Severity::Trace, "%l %v")
        .expect("pattern is valid");
    logger.add_file_sink(&path, true).expect("file opens");

    logger.start_section(Severity::Info, "boot");
    logger.error("disk offline");
    logger.end_section(Severity::Info, "boot");

    let contents = fs::read_to_string(&path).expect("readable");
    assert_eq!(
        contents,
        "info     === start boot === {\nerr      | disk offline\ninfo     ===   end boot === }\n"
    );
}

#[test]
fn rotating_sink_misconfiguration_fails_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rotated.log");

    let logger = Logger::bare("sinks_rotating_invalid");
    assert!(matches!(
        logger.add_rotating_sink(&path, 0, 3),
        Err(SinkError::ZeroRotationSize)
    ));
    assert_eq!(logger.sink_count(), 0);
}

#[test]
fn global_registry_appends_numeric_suffixes() {
    let first = Logger::bare("svc");
    let second = Logger::bare("svc");
    assert_eq!(first.name(), "svc");
    assert_eq!(second.name(), "svc_1");
}

#[test]
fn explicit_registries_are_independent_namespaces() {
    let left = LoggerRegistry::new();
    let right = LoggerRegistry::new();

    let a = Logger::bare_with_registry(&left, "api");
    let b = Logger::bare_with_registry(&right, "api");
    assert_eq!(a.name(), "api");
    assert_eq!(b.name(), "api");

    let c = Logger::bare_with_registry(&left, "api");
    assert_eq!(c.name(), "api_1");
    assert!(left.contains("api_1"));
    assert!(!right.contains("api_1"));
}

#[test]
fn console_sink_attaches_without_observable_side_effects() {
    let logger = Logger::bare("sinks_console_attach");
    logger.add_console_sink(false);
    assert_eq!(logger.sink_count(), 1);
}
