//! crates/logging-sink/src/sink/rotating.rs
//! Size-rotated file sink retaining a bounded set of historical files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Sink, SinkError, lock, report_write_error};
use crate::pattern::PatternTemplate;
use crate::severity::Severity;

/// Sink that rolls its file once a byte threshold is reached.
///
/// Records land in `path` until writing the next record would push the file
/// past `max_size` bytes. Rotation shifts `path.1` through `path.N` (oldest
/// deleted, `N = max_files`), renames `path` to `path.1`, and reopens `path`
/// truncated. With `max_files == 0` no history is kept and the file is simply
/// truncated. A `max_size` of zero is invalid configuration.
pub struct RotatingFileSink {
    path: PathBuf,
    max_size: u64,
    max_files: usize,
    state: Mutex<State>,
}

struct State {
    file: File,
    written: u64,
    template: PatternTemplate,
    min_level: Severity,
    reported: bool,
}

impl RotatingFileSink {
    /// Opens `path` for rotated logging.
    ///
    /// The current size of an existing file counts toward the threshold, so
    /// reopening a log does not defer rotation.
    pub fn create(
        path: impl AsRef<Path>,
        max_size: u64,
        max_files: usize,
    ) -> Result<Self, SinkError> {
        if max_size == 0 {
            return Err(SinkError::ZeroRotationSize);
        }
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_size,
            max_files,
            state: Mutex::new(State {
                file,
                written,
                template: PatternTemplate::default(),
                min_level: Severity::Trace,
                reported: false,
            }),
        })
    }

    /// Returns the path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the rotation threshold in bytes.
    #[must_use]
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Returns how many historical files are retained.
    #[must_use]
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self, state: &mut State) -> io::Result<()> {
        if self.max_files > 0 {
            // Shift history oldest-first so every rename target is free.
            let _ = fs::remove_file(self.rotated_path(self.max_files));
            for index in (1..self.max_files).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    let _ = fs::rename(&from, self.rotated_path(index + 1));
                }
            }
            fs::rename(&self.path, self.rotated_path(1))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        state.file = file;
        state.written = 0;
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, severity: Severity, line: &str) {
        let mut state = lock(&self.state);
        if severity < state.min_level {
            return;
        }
        let mut rendered = state.template.format(severity, line, false);
        rendered.push('\n');
        let length = rendered.len() as u64;

        if state.written > 0 && state.written + length > self.max_size {
            if let Err(error) = self.rotate(&mut state) {
                report_write_error(&mut state.reported, &self.path, &error);
            }
        }

        let mut result = state.file.write_all(rendered.as_bytes());
        if result.is_ok() {
            result = state.file.flush();
        }
        match result {
            Ok(()) => state.written += length,
            Err(error) => report_write_error(&mut state.reported, &self.path, &error),
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

    fn payload_template() -> PatternTemplate {
        PatternTemplate::parse("%v").expect("payload-only pattern parses")
    }

    #[test]
    fn zero_threshold_is_invalid_configuration() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        assert!(matches!(
            RotatingFileSink::create(&path, 0, 3),
            Err(SinkError::ZeroRotationSize)
        ));
    }

    #[test]
    fn crossing_the_threshold_rolls_to_a_numbered_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");

        // "aaaa\n" is five bytes; two records fit, the third rotates.
        let sink = RotatingFileSink::create(&path, 10, 3).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "aaaa");
        sink.write(Severity::Info, "bbbb");
        sink.write(Severity::Info, "cccc");

        let rotated = fs::read_to_string(sink.rotated_path(1)).expect("rotated file exists");
        assert_eq!(rotated, "aaaa\nbbbb\n");
        let active = fs::read_to_string(&path).expect("active file exists");
        assert_eq!(active, "cccc\n");
    }

    #[test]
    fn retention_is_bounded_by_max_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");

        let sink = RotatingFileSink::create(&path, 5, 2).expect("open succeeds");
        sink.apply_template(&payload_template());
        for payload in ["1111", "2222", "3333", "4444", "5555"] {
            sink.write(Severity::Info, payload);
        }

        assert!(sink.rotated_path(1).exists());
        assert!(sink.rotated_path(2).exists());
        assert!(!sink.rotated_path(3).exists());
        // Oldest surviving history holds the record two rotations back.
        let oldest = fs::read_to_string(sink.rotated_path(2)).expect("readable");
        assert_eq!(oldest, "3333\n");
    }

    #[test]
    fn zero_history_truncates_in_place() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");

        let sink = RotatingFileSink::create(&path, 5, 0).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "aaaa");
        sink.write(Severity::Info, "bbbb");

        assert!(!sink.rotated_path(1).exists());
        let active = fs::read_to_string(&path).expect("readable");
        assert_eq!(active, "bbbb\n");
    }

    #[test]
    fn existing_content_counts_toward_the_threshold() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "seeded-8\n").expect("seed file");

        let sink = RotatingFileSink::create(&path, 10, 1).expect("open succeeds");
        sink.apply_template(&payload_template());
        sink.write(Severity::Info, "next");

        let rotated = fs::read_to_string(sink.rotated_path(1)).expect("rotated file exists");
        assert_eq!(rotated, "seeded-8\n");
        let active = fs::read_to_string(&path).expect("readable");
        assert_eq!(active, "next\n");
    }
}
