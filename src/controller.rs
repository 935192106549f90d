use log::{debug, error, info, warn};
use std::mem;

use crate::config::PidGains;
use crate::error::PidError;
use crate::number::Number;
use crate::status::{ControllerPhase, ControllerStatus};
use crate::traits::{BoxedTimeSource, NanoSecs, TimeSource};

/// PID controller timed by a caller-supplied [`TimeSource`].
///
/// Every [`update`](Self::update) reads the time source exactly once, and the
/// reading must be strictly later than the previous one. The first update
/// after construction (or [`reset`](Self::reset)) accepts any reading and
/// skips the derivative term.
///
/// There is no internal locking. If several threads share one controller,
/// the caller has to serialize `update` and the setters; treat a controller
/// as owned by one control loop.
pub struct PidController<T, S = BoxedTimeSource> {
    kp: T,
    ki: T,
    kd: T,
    time_source: S,

    // State
    last_time: Option<NanoSecs>,
    last_error: T,
    error_sum: T,
}

impl<T, S> PidController<T, S>
where
    T: Number,
    S: TimeSource,
{
    pub fn new(kp: T, ki: T, kd: T, time_source: S) -> Self {
        PidController {
            kp,
            ki,
            kd,
            time_source,
            last_time: None,
            last_error: T::zero(),
            error_sum: T::zero(),
        }
    }

    pub fn from_gains(gains: PidGains<T>, time_source: S) -> Self {
        Self::new(gains.kp, gains.ki, gains.kd, time_source)
    }

    /// Runs one control step and returns the correction output.
    ///
    /// `output = kp*e + ki*sum(e) + kd*(e - e_prev)/dt` with `e = target - input`
    /// and `dt` in nanoseconds. The derivative term is evaluated as
    /// `(kd * (e - e_prev)) / dt` using `T`'s own division, so integer
    /// controllers get a truncated derivative.
    ///
    /// # Panics
    ///
    /// If the time source returns a reading that is not strictly after the
    /// previous one. That is a broken time source, not a runtime condition;
    /// use [`try_update`](Self::try_update) to get it as an error instead.
    pub fn update(&mut self, input: T, target: T) -> T {
        let cur_time = match self.read_time() {
            Ok(t) => t,
            Err(e) => {
                error!("PID update aborted: {}", e);
                panic!("{}", e);
            }
        };
        self.advance(cur_time, input, target)
    }

    /// Like [`update`](Self::update), but reports a non-monotonic time source
    /// as [`PidError::TimeMonotonicityViolation`]. No output is produced and
    /// the controller state is left exactly as it was.
    #[must_use = "a rejected update produces no output"]
    pub fn try_update(&mut self, input: T, target: T) -> Result<T, PidError> {
        let cur_time = self.read_time().map_err(|e| {
            warn!("PID update rejected: {}", e);
            e
        })?;
        Ok(self.advance(cur_time, input, target))
    }

    fn read_time(&mut self) -> Result<NanoSecs, PidError> {
        let cur_time = self.time_source.now_ns();
        match self.last_time {
            Some(previous) if cur_time <= previous => Err(PidError::TimeMonotonicityViolation {
                previous,
                current: cur_time,
            }),
            _ => Ok(cur_time),
        }
    }

    fn advance(&mut self, cur_time: NanoSecs, input: T, target: T) -> T {
        let error = target - input;

        self.error_sum += error;
        let proportional = self.kp * error;
        let integral = self.ki * self.error_sum;
        let mut output = proportional + integral;

        if let Some(last_time) = self.last_time {
            let derivative = self.derivative(error, cur_time.saturating_sub(last_time));
            output += derivative;
            debug!(
                "PID: t={}ns err={:?} P={:?} I={:?} D={:?} out={:?}",
                cur_time, error, proportional, integral, derivative, output
            );
        } else {
            debug!(
                "PID: t={}ns err={:?} P={:?} I={:?} (first update, no D) out={:?}",
                cur_time, error, proportional, integral, output
            );
        }

        self.last_time = Some(cur_time);
        self.last_error = error;

        output
    }

    fn derivative(&self, error: T, dt_ns: NanoSecs) -> T {
        match T::from_nanos(dt_ns) {
            Some(dt) => self.kd * (error - self.last_error) / dt,
            // Only integer types end up here, where the truncated quotient of an
            // in-range numerator by an out-of-range dt is zero anyway.
            None => {
                debug!("PID: dt={}ns does not fit the numeric type, D=0", dt_ns);
                T::zero()
            }
        }
    }

    /// Drops all running state and goes back to [`ControllerPhase::Fresh`].
    /// Coefficients and time source are kept.
    pub fn reset(&mut self) {
        self.last_time = None;
        self.last_error = T::zero();
        self.error_sum = T::zero();
        info!("PID controller reset");
    }

    pub fn phase(&self) -> ControllerPhase {
        if self.last_time.is_some() {
            ControllerPhase::Running
        } else {
            ControllerPhase::Fresh
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.phase() == ControllerPhase::Fresh
    }

    pub fn status(&self) -> ControllerStatus<T> {
        ControllerStatus {
            phase: self.phase(),
            last_time: self.last_time,
            last_error: self.last_error,
            error_sum: self.error_sum,
        }
    }
}

impl<T: Copy, S> PidController<T, S> {
    pub fn kp(&self) -> T {
        self.kp
    }

    pub fn ki(&self) -> T {
        self.ki
    }

    pub fn kd(&self) -> T {
        self.kd
    }

    pub fn gains(&self) -> PidGains<T> {
        PidGains::new(self.kp, self.ki, self.kd)
    }

    pub fn time_source(&self) -> &S {
        &self.time_source
    }

    pub fn time_source_mut(&mut self) -> &mut S {
        &mut self.time_source
    }

    pub fn set_kp(&mut self, kp: T) {
        self.kp = kp;
    }

    pub fn set_ki(&mut self, ki: T) {
        self.ki = ki;
    }

    pub fn set_kd(&mut self, kd: T) {
        self.kd = kd;
    }

    pub fn set_gains(&mut self, gains: PidGains<T>) {
        self.kp = gains.kp;
        self.ki = gains.ki;
        self.kd = gains.kd;
    }

    /// Swaps in a new time source, returning the old one. Takes effect on the
    /// next update; the recorded last time is kept, so the new source must
    /// continue past it.
    pub fn set_time_source(&mut self, time_source: S) -> S {
        mem::replace(&mut self.time_source, time_source)
    }
}
