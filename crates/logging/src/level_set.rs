//! crates/logging/src/level_set.rs
//! Per-logger bitset of active severities.

use logging_sink::Severity;

const MASK_ALL: u8 = 0b0011_1111;

/// Set of severities a logger currently delivers.
///
/// Membership tests and mutations are O(1) bit operations. The default state
/// enables every message severity; [`Severity::Off`] is never a member and
/// enabling it is a no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    /// Returns the set with every message severity enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self { bits: MASK_ALL }
    }

    /// Returns the empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    const fn bit(severity: Severity) -> u8 {
        match severity {
            Severity::Off => 0,
            other => 1 << (other as u8),
        }
    }

    /// Enables one severity. Idempotent.
    pub fn enable(&mut self, severity: Severity) {
        self.bits |= Self::bit(severity);
    }

    /// Disables one severity. Idempotent.
    pub fn disable(&mut self, severity: Severity) {
        self.bits &= !Self::bit(severity);
    }

    /// Enables every message severity.
    pub fn enable_all(&mut self) {
        self.bits = MASK_ALL;
    }

    /// Disables every message severity.
    pub fn disable_all(&mut self) {
        self.bits = 0;
    }

    /// Returns whether `severity` is currently enabled.
    ///
    /// [`Severity::Off`] is never enabled.
    #[must_use]
    pub const fn is_enabled(self, severity: Severity) -> bool {
        self.bits & Self::bit(severity) != 0
    }

    /// Enables `level` and everything above it, disabling everything below.
    ///
    /// [`Severity::Off`] disables the whole set.
    pub fn set_threshold(&mut self, level: Severity) {
        self.bits = match level {
            Severity::Off => 0,
            other => (MASK_ALL << (other as u8)) & MASK_ALL,
        };
    }

    /// Returns the least enabled severity, or `None` when the set is empty.
    #[must_use]
    pub fn lowest(self) -> Option<Severity> {
        Severity::LEVELS
            .into_iter()
            .find(|severity| self.is_enabled(*severity))
    }

    /// Returns `true` when no severity is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Severity> for LevelSet {
    /// Builds the at-or-above threshold set for `level`.
    fn from(level: Severity) -> Self {
        let mut set = Self::none();
        set.set_threshold(level);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let set = LevelSet::default();
        for severity in Severity::LEVELS {
            assert!(set.is_enabled(severity));
        }
        assert!(!set.is_enabled(Severity::Off));
    }

    #[test]
    fn enable_and_disable_are_idempotent() {
        let mut set = LevelSet::none();
        set.enable(Severity::Warn);
        set.enable(Severity::Warn);
        assert!(set.is_enabled(Severity::Warn));
        assert!(!set.is_enabled(Severity::Info));

        set.disable(Severity::Warn);
        set.disable(Severity::Warn);
        assert!(set.is_empty());
    }

    #[test]
    fn enabling_off_is_a_no_op() {
        let mut set = LevelSet::none();
        set.enable(Severity::Off);
        assert!(set.is_empty());
    }

    #[test]
    fn threshold_disables_strictly_below() {
        let mut set = LevelSet::all();
        set.set_threshold(Severity::Warn);
        assert!(!set.is_enabled(Severity::Trace));
        assert!(!set.is_enabled(Severity::Debug));
        assert!(!set.is_enabled(Severity::Info));
        assert!(set.is_enabled(Severity::Warn));
        assert!(set.is_enabled(Severity::Error));
        assert!(set.is_enabled(Severity::Critical));
    }

    #[test]
    fn threshold_off_mutes_the_set() {
        let mut set = LevelSet::all();
        set.set_threshold(Severity::Off);
        assert!(set.is_empty());
    }

    #[test]
    fn from_severity_matches_set_threshold() {
        for severity in Severity::LEVELS {
            let mut expected = LevelSet::all();
            expected.set_threshold(severity);
            assert_eq!(LevelSet::from(severity), expected);
        }
    }

    #[test]
    fn lowest_finds_the_most_verbose_member() {
        assert_eq!(LevelSet::all().lowest(), Some(Severity::Trace));
        assert_eq!(LevelSet::from(Severity::Error).lowest(), Some(Severity::Error));
        assert_eq!(LevelSet::none().lowest(), None);

        let mut sparse = LevelSet::none();
        sparse.enable(Severity::Critical);
        sparse.enable(Severity::Debug);
        assert_eq!(sparse.lowest(), Some(Severity::Debug));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn level_set_roundtrips_through_json() {
            let mut set = LevelSet::none();
            set.enable(Severity::Trace);
            set.enable(Severity::Error);

            let json = serde_json::to_string(&set).expect("serialize");
            let decoded: LevelSet = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(set, decoded);
        }
    }
}
