//! The contact: a directed edge that only exists during a time window.

use cgr_core::{ContactId, NodeId, Time};

use crate::PlanError;

/// A directed, time-bounded edge from `src` to `dst`.
///
/// Data sent over the contact must depart `src` within `[start, end]` and
/// arrives `owlt` later.  Construct with [`Contact::new`], which enforces
/// `start ≤ end`, finite times, and a non-negative OWLT.  The router relies
/// on the last of these: with `owlt ≥ 0` a settled label can never improve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    pub id:    ContactId,
    pub start: Time,
    pub end:   Time,
    pub src:   NodeId,
    pub dst:   NodeId,
    /// One-way light time, in the same unit as `start`/`end`.
    pub owlt:  f64,
}

impl Contact {
    /// Build a contact, rejecting windows and delays the router cannot use.
    pub fn new(
        id:    ContactId,
        start: Time,
        end:   Time,
        src:   NodeId,
        dst:   NodeId,
        owlt:  f64,
    ) -> Result<Self, PlanError> {
        let invalid = |reason: &str| PlanError::InvalidContact { id, reason: reason.to_owned() };

        let (start, end, owlt) = (unsigned_zero(start.0), unsigned_zero(end.0), unsigned_zero(owlt));
        let (start, end) = (Time(start), Time(end));

        if !start.is_finite() || !end.is_finite() {
            return Err(invalid("start and end must be finite"));
        }
        if start > end {
            return Err(invalid("start is after end"));
        }
        if !owlt.is_finite() {
            return Err(invalid("owlt must be finite"));
        }
        if owlt < 0.0 {
            return Err(invalid("owlt must not be negative"));
        }
        // Arrival over the contact must stay representable, or the label
        // compare against an unreached (infinite) node would never succeed.
        if !(end + owlt).is_finite() {
            return Err(invalid("end + owlt overflows the time range"));
        }

        Ok(Self { id, start, end, src, dst, owlt })
    }

    /// `true` if data can depart over this contact at `t`.
    #[inline]
    pub fn is_open_at(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }

    /// Length of the availability window.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end.since(self.start)
    }
}

/// Map `-0.0` to `0.0`.  `Time` orders with `total_cmp`, under which the two
/// zeros differ.
#[inline]
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
