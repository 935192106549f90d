use num_traits::{NumCast, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::traits::NanoSecs;

/// Numeric types the controller can run on.
///
/// Blanket implemented for everything with arithmetic, ordering, a zero value
/// and a lossless-or-failing cast from `i64`. This covers the builtin
/// integers and floats. Integer controllers use integer division for the
/// derivative term.
pub trait Number:
    Copy
    + PartialOrd
    + Debug
    + Zero
    + NumCast
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
{
    /// Converts a time delta into `Self`, `None` if it does not fit.
    fn from_nanos(ns: NanoSecs) -> Option<Self> {
        <Self as NumCast>::from(ns)
    }
}

impl<T> Number for T where
    T: Copy
        + PartialOrd
        + Debug
        + Zero
        + NumCast
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AddAssign
{
}
