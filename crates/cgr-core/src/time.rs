//! Contact-plan time model.
//!
//! # Design
//!
//! Contact windows and one-way light times share a single time unit chosen
//! by the plan author (seconds, in every plan we ship).  Values are real:
//! plans routinely carry fractional OWLTs.
//!
//! `Time` wraps an `f64` and orders it with [`f64::total_cmp`], so it can key
//! a `BinaryHeap` directly.  Loaders reject NaN, which means the total order
//! agrees with the numeric one for every value the router ever sees.

use std::cmp::Ordering;
use std::fmt;

/// An instant on the contact plan's time axis.
///
/// [`Time::INFINITY`] marks "not reached yet" in search labels.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub f64);

impl Time {
    pub const ZERO: Time = Time(0.0);
    pub const INFINITY: Time = Time(f64::INFINITY);

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// The later of two instants.
    #[inline]
    pub fn max(self, other: Time) -> Time {
        if other > self { other } else { self }
    }

    /// Time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Time) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for Time {
    type Output = Time;
    #[inline]
    fn add(self, rhs: f64) -> Time {
        Time(self.0 + rhs)
    }
}

impl From<f64> for Time {
    #[inline]
    fn from(t: f64) -> Time {
        Time(t)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
