//! Ready-made time sources.

mod monotonic;
mod scripted;

pub use self::monotonic::MonotonicClock;
pub use self::scripted::ScriptedClock;
