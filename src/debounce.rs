//! Trailing debounce bookkeeping
//!
//! Each trigger arms a new generation and supersedes whatever was pending.
//! The runtime delivers the generation back once the delay has elapsed; only
//! the most recently armed generation is honored, so bursts of triggers
//! collapse into a single run after the quiet period.

use std::time::Duration;

/// Default quiet period before a recomputation runs
pub const RECOMPUTE_DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
    pending: Option<u64>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(RECOMPUTE_DEBOUNCE_MS))
    }
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a new generation, superseding any pending one
    pub fn arm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        self.generation
    }

    /// Claim an elapsed timer. Returns false for superseded or cancelled generations.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending generation. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_generation_wins() {
        let mut debounce = Debounce::default();
        let first = debounce.arm();
        let second = debounce.arm();

        assert!(!debounce.fire(first));
        assert!(debounce.is_pending());
        assert!(debounce.fire(second));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_fires_once() {
        let mut debounce = Debounce::default();
        let generation = debounce.arm();
        assert!(debounce.fire(generation));
        assert!(!debounce.fire(generation));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debounce = Debounce::default();
        let generation = debounce.arm();
        assert!(debounce.cancel());
        assert!(!debounce.fire(generation));
        assert!(!debounce.cancel());
    }
}
