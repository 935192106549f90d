use std::collections::VecDeque;

use crate::traits::{NanoSecs, TimeSource};

/// Replays a fixed list of timestamps, front to back.
///
/// Meant for tests and simulations that need exact control over `dt`.
///
/// # Panics
///
/// [`TimeSource::now_ns`] panics once the script is used up. Check
/// [`remaining`](Self::remaining) or [`push`](Self::push) more readings
/// before driving a controller past the end.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClock {
    script: VecDeque<NanoSecs>,
}

impl ScriptedClock {
    pub fn new<I>(timestamps: I) -> Self
    where
        I: IntoIterator<Item = NanoSecs>,
    {
        ScriptedClock {
            script: timestamps.into_iter().collect(),
        }
    }

    /// Appends one more reading to the end of the script.
    pub fn push(&mut self, ts: NanoSecs) {
        self.script.push_back(ts);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl FromIterator<NanoSecs> for ScriptedClock {
    fn from_iter<I: IntoIterator<Item = NanoSecs>>(iter: I) -> Self {
        ScriptedClock::new(iter)
    }
}

impl TimeSource for ScriptedClock {
    fn now_ns(&mut self) -> NanoSecs {
        match self.script.pop_front() {
            Some(ts) => ts,
            None => panic!("scripted clock exhausted: no timestamps left"),
        }
    }
}
