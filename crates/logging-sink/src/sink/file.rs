//! crates/logging-sink/src/sink/file.rs
//! Single-file sink with append or truncate-on-open semantics.

use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Sink, SinkError, lock, report_write_error};
use crate::pattern::PatternTemplate;
use crate::severity::Severity;

/// Sink that writes rendered records to one file.
///
/// The file is opened (and created if missing) at construction; open failures
/// surface immediately as [`SinkError`]. Each record is written and flushed
/// as one unit so interleaved writers sharing this sink produce whole lines.
/// A write failure is reported to stderr once; later records keep trying in
/// case the underlying device recovers.
pub struct FileSink {
    path: PathBuf,
    state: Mutex<State>,
}

struct State {
    file: File,
    template: PatternTemplate,
    min_level: Severity,
    reported: bool,
}

impl FileSink {
    /// Opens `path` for logging, truncating existing content when `truncate`
    /// is set and appending otherwise.
    pub fn create(path: impl AsRef<Path>, truncate: bool) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.open(&path)?;
        Ok(Self {
            path,
            state: Mutex::new(State {
                file,
                template: PatternTemplate::default(),
                min_level: Severity::Trace,
                reported: false,
            }),
        })
    }

    /// Returns the path this sink writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, severity: Severity, line: &str) {
        let mut state = lock(&self.state);
        if severity < state.min_level {
            return;
        }
        let mut rendered = state.template.format(severity, line, false);
        rendered.push('\n');

        let mut result = state.file.write_all(rendered.as_bytes());
        if result.is_ok() {
            result = state.file.flush();
        }
        if let Err(error) = result {
            report_write_error(&mut state.reported, &self.path, &error);
        }
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
    use std::fs;

    fn payload_template() -> PatternTemplate {
        PatternTemplate::parse("%v").expect("payload-only pattern parses")
    }

    #[test]
    fn records_are_written_one_per_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");

        let sink = FileSink::create(&path, false).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "first");
        sink.write(Severity::Warn, "second");

        let contents = fs::read_to_string(&path).expect("readable");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn append_mode_preserves_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "old\n").expect("seed file");

        let sink = FileSink::create(&path, false).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "new");

        let contents = fs::read_to_string(&path).expect("readable");
        assert_eq!(contents, "old\nnew\n");
    }

    #[test]
    fn truncate_mode_discards_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "old\n").expect("seed file");

        let sink = FileSink::create(&path, true).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "new");

        let contents = fs::read_to_string(&path).expect("readable");
        assert_eq!(contents, "new\n");
    }

    #[test]
    fn minimum_level_filters_quieter_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");

        let sink = FileSink::create(&path, false).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.set_minimum_level(Severity::Warn);
        sink.write(Severity::Info, "dropped");
        sink.write(Severity::Error, "kept");

        let contents = fs::read_to_string(&path).expect("readable");
        assert_eq!(contents, "kept\n");
    }

    #[test]
    fn unopenable_path_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("app.log");
        assert!(matches!(
            FileSink::create(&path, false),
            Err(SinkError::Io(_))
        ));
    }
}
