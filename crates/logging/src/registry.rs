//! crates/logging/src/registry.rs
//! Process-wide deduplication of logger names.

use std::sync::OnceLock;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Registry guaranteeing that no two live loggers share a visible name.
///
/// Names are claimed on logger construction and never removed; the registry
/// only ever grows. Callers who want isolated namespaces construct their own
/// instance and pass it to [`Logger::with_registry`]; the plain constructors
/// use the documented process-wide instance from [`LoggerRegistry::global`].
///
/// [`Logger::with_registry`]: crate::Logger::with_registry
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    names: DashMap<String, ()>,
}

impl LoggerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: DashMap::new(),
        }
    }

    /// Returns the process-wide registry used by the plain constructors.
    ///
    /// Lifecycle: populated on logger construction, entries never removed.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Claims a free name derived from `base`.
    ///
    /// Returns `base` itself when free, otherwise the first free of
    /// `base_1`, `base_2`, ... The claim is atomic: two concurrent callers
    /// with the same base receive distinct names.
    pub fn claim(&self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 0usize;
        loop {
            match self.names.entry(candidate) {
                Entry::Vacant(slot) => {
                    let claimed = slot.key().clone();
                    slot.insert(());
                    return claimed;
                }
                Entry::Occupied(_) => {
                    suffix += 1;
                    candidate = format!("{base}_{suffix}");
                }
            }
        }
    }

    /// Returns whether `name` has been claimed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns how many names have been claimed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no name has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
