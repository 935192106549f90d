use std::time::Instant;

use crate::traits::{NanoSecs, TimeSource};

/// Strictly increasing nanosecond clock backed by `Instant`.
///
/// The epoch is the moment of construction. Readings start at 1, never at 0.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
    last: NanoSecs,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            epoch: Instant::now(),
            last: 0,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ns(&mut self) -> NanoSecs {
        let elapsed = NanoSecs::try_from(self.epoch.elapsed().as_nanos()).unwrap_or(NanoSecs::MAX);
        // Two reads within the same tick still have to move forward.
        let now = elapsed.saturating_add(1).max(self.last.saturating_add(1));
        self.last = now;
        now
    }
}
