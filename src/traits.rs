/// Nanoseconds since a caller-chosen epoch.
pub type NanoSecs = i64;

/// A time source the controller consults once per update.
///
/// The controller never reads a real clock itself. Whatever implements this
/// decides the epoch, as long as readings observed through one controller
/// keep increasing. Implementations may be stateful (e.g. draining a queue of
/// fake timestamps).
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource {
    fn now_ns(&mut self) -> NanoSecs;
}

impl<F> TimeSource for F
where
    F: FnMut() -> NanoSecs,
{
    fn now_ns(&mut self) -> NanoSecs {
        self()
    }
}

/// Type-erased time source, for controllers whose source gets swapped for a
/// different concrete type at runtime.
pub type BoxedTimeSource = Box<dyn FnMut() -> NanoSecs + Send>;
