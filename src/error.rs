use thiserror::Error;

use crate::traits::NanoSecs;

/// Contract violations reported by [`PidController::try_update`].
///
/// There is nothing to recover: seeing one of these means the time source is
/// broken. [`PidController::update`] panics with the same message instead.
///
/// [`PidController::try_update`]: crate::PidController::try_update
/// [`PidController::update`]: crate::PidController::update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PidError {
    #[error("time source went backwards or stalled: {current}ns is not after {previous}ns")]
    TimeMonotonicityViolation { previous: NanoSecs, current: NanoSecs },
}
