//! crates/logging/src/guard.rs
//! Scope guards pairing section open/close and mute/restore.

use logging_sink::Severity;

use crate::level_set::LevelSet;
use crate::logger::Logger;

/// RAII guard binding a section to a lexical scope.
///
/// A framed guard emits the start-framing record at construction and the
/// matching end-framing record on drop; the display name is captured once at
/// construction and never re-evaluated. A muted guard instead snapshots the
/// logger's [`LevelSet`], disables everything, and restores the snapshot on
/// drop — it emits nothing at all, framing included, as if the scope's log
/// statements were never written.
///
/// Exactly one close action runs per construction, on every exit path of the
/// owning scope, early returns and unwinding included. The guard is not
/// clonable; a copy would close its section twice.
///
/// Instances come from [`Logger::section`] and [`Logger::muted_section`].
#[must_use = "dropping the guard immediately closes the section"]
pub struct SectionGuard<'a> {
    logger: &'a Logger,
    mode: Mode,
}

enum Mode {
    Framed { severity: Severity, name: String },
    Muted { previous: LevelSet },
}

impl<'a> SectionGuard<'a> {
    pub(crate) fn framed(logger: &'a Logger, severity: Severity, name: String) -> Self {
        logger.start_section(severity, &name);
        Self {
            logger,
            mode: Mode::Framed { severity, name },
        }
    }

    pub(crate) fn muted(logger: &'a Logger) -> Self {
        let previous = logger.current_levels();
        logger.disable_all_levels();
        Self {
            logger,
            mode: Mode::Muted { previous },
        }
    }

    /// Returns `true` when this guard mutes its scope instead of framing it.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        matches!(self.mode, Mode::Muted { .. })
    }
}

impl Drop for SectionGuard<'_> {
    fn drop(&mut self) {
        match &self.mode {
            Mode::Framed { severity, name } => self.logger.end_section(*severity, name),
            Mode::Muted { previous } => self.logger.set_levels(*previous),
        }
    }
}
