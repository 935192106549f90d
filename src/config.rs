use serde::{Deserialize, Serialize};

use crate::number::Number;

/// Proportional, integral and derivative coefficients.
///
/// No validation: zero and negative gains are legal. The default is the
/// all-zero set, whose controller always outputs zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains<T> {
    pub kp: T,
    pub ki: T,
    pub kd: T,
}

impl<T> PidGains<T> {
    pub fn new(kp: T, ki: T, kd: T) -> Self {
        PidGains { kp, ki, kd }
    }
}

impl<T: Number> Default for PidGains<T> {
    fn default() -> Self {
        PidGains {
            kp: T::zero(),
            ki: T::zero(),
            kd: T::zero(),
        }
    }
}
