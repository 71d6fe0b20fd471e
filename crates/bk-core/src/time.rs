//! Simulation time model.
//!
//! Time is a monotonically increasing minute counter starting at 0.  All
//! schedule arithmetic (arrivals, departures, setup phases) is exact integer
//! arithmetic; only the tide evaluates the minute as a float.

use std::fmt;

/// An absolute simulation minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// The minute after `self`.
    #[inline]
    pub fn next(self) -> Minute {
        Minute(self.0 + 1)
    }

    /// Minutes from `self` until `later`; negative if `later` is in the past.
    #[inline]
    pub fn until(self, later: Minute) -> i64 {
        later.0 as i64 - self.0 as i64
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl std::ops::Add<u64> for Minute {
    type Output = Minute;
    #[inline]
    fn add(self, rhs: u64) -> Minute {
        Minute(self.0 + rhs)
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
