//! crates/logging/src/rate_gate.rs
//! Time-windowed on/off switch bounding how often a logger may emit.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::logger::Logger;

/// Error raised when a rate gate is configured with an unusable frequency.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RateGateError {
    /// The maximum admission frequency was zero, negative, or not finite.
    #[error("maximum admission frequency must be positive and finite (got {0})")]
    InvalidFrequency(f64),
}

/// Coarse binary gate toggling a bound logger on a wall-clock budget.
///
/// Each [`tick`](Self::tick) either *admits* — at least the minimum interval
/// has passed since the last admitted tick, so every severity is enabled —
/// or *suppresses*, disabling every severity. There is no sampling or
/// averaging: a burst of ticks inside one interval all suppress except the
/// first, and call sites stay untouched.
///
/// Intended usage is one tick per logical loop iteration (once per rendered
/// frame, once per poll cycle) from a single owning context; `tick` takes
/// `&mut self` and is not designed for concurrent ticking.
pub struct RateGate {
    logger: Arc<Logger>,
    min_interval: Duration,
    last_admitted: Option<Instant>,
}

impl RateGate {
    /// Binds a gate to `logger`, admitting at most `max_frequency_hz` ticks
    /// per second.
    ///
    /// The minimum inter-tick interval is `1 / max_frequency_hz`. A zero,
    /// negative, or non-finite frequency is invalid configuration.
    pub fn new(logger: Arc<Logger>, max_frequency_hz: f64) -> Result<Self, RateGateError> {
        if !max_frequency_hz.is_finite() || max_frequency_hz <= 0.0 {
            return Err(RateGateError::InvalidFrequency(max_frequency_hz));
        }
        let min_interval = Duration::try_from_secs_f64(max_frequency_hz.recip())
            .map_err(|_| RateGateError::InvalidFrequency(max_frequency_hz))?;
        Ok(Self {
            logger,
            min_interval,
            last_admitted: None,
        })
    }

    /// Returns the minimum interval between admitted ticks.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns the bound logger.
    #[must_use]
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Ticks the gate at the current instant.
    ///
    /// Returns `true` when the tick was admitted.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Ticks the gate at an explicit instant.
    ///
    /// The first tick always admits. Admission decisions are monotonic under
    /// a non-decreasing clock: an admitted tick resets the window, a
    /// suppressed tick leaves it untouched.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let admit = self
            .last_admitted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.min_interval);
        if admit {
            self.last_admitted = Some(now);
            self.logger.enable_all_levels();
        } else {
            self.logger.disable_all_levels();
        }
        admit
    }
}
