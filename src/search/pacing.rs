//! Randomized pre-request delay

use crate::{MAX_PACING_SECS, MIN_PACING_SECS};
use rand::Rng;
use std::time::Duration;

/// Closed range a pacing delay is drawn from.
///
/// Drawing uniformly instead of sleeping a fixed amount keeps parallel
/// clients from hitting the rate limit in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingDelay {
    min_secs: f64,
    max_secs: f64,
}

impl PacingDelay {
    /// Range of `[min_secs, max_secs]`; negative bounds clamp to zero and
    /// reversed bounds are swapped
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        let a = min_secs.max(0.0);
        let b = max_secs.max(0.0);
        Self {
            min_secs: a.min(b),
            max_secs: a.max(b),
        }
    }

    /// No delay at all
    pub fn disabled() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn min(&self) -> Duration {
        Duration::from_secs_f64(self.min_secs)
    }

    pub fn max(&self) -> Duration {
        Duration::from_secs_f64(self.max_secs)
    }

    pub fn is_disabled(&self) -> bool {
        self.max_secs == 0.0
    }

    /// Draw a delay using the thread-local generator
    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Draw a delay from the given generator
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min_secs == self.max_secs {
            return self.min();
        }
        Duration::from_secs_f64(rng.gen_range(self.min_secs..=self.max_secs))
    }
}

impl Default for PacingDelay {
    fn default() -> Self {
        Self::new(MIN_PACING_SECS, MAX_PACING_SECS)
    }
}
