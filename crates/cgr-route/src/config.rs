//! Router configuration.
//!
//! Typically built by the application from CLI flags or a JSON file and
//! handed to [`EarliestArrivalRouter::new`](crate::EarliestArrivalRouter::new).

use cgr_core::Time;
use cgr_plan::Contact;

// ── WindowPolicy ──────────────────────────────────────────────────────────────

/// How contact availability windows constrain relaxation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WindowPolicy {
    /// Ignore `[start, end]` once the clock is seeded: every contact is
    /// usable at any time, and arrival is `t + owlt`.
    #[default]
    Unchecked,

    /// A contact is usable only while open.  Data ready at `t` departs at
    /// `max(t, start)` provided `t ≤ end`, and arrives `owlt` later.
    Enforced,
}

impl WindowPolicy {
    /// Arrival time at `contact.dst` for data ready at `contact.src` at `t`,
    /// or `None` if the contact cannot be used.
    #[inline]
    pub fn arrival_via(self, contact: &Contact, t: Time) -> Option<Time> {
        match self {
            WindowPolicy::Unchecked => Some(t + contact.owlt),
            WindowPolicy::Enforced => {
                if t > contact.end {
                    return None;
                }
                Some(t.max(contact.start) + contact.owlt)
            }
        }
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

/// When the search loop stops.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// Run until the priority queue is empty.  The destination's outgoing
    /// contacts are never scanned, but every other reachable node is.
    #[default]
    Exhaustive,

    /// Stop as soon as the destination is popped from the queue.  Returns the
    /// same route as `Exhaustive` because OWLTs are non-negative.
    EarlyExit,
}

// ── RouterConfig ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    pub window:      WindowPolicy,
    pub termination: Termination,
}

impl RouterConfig {
    pub fn with_window(mut self, window: WindowPolicy) -> Self {
        self.window = window;
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Apply command-line style overrides on top of a loaded configuration.
    /// `window: None` and `early_exit: false` leave the loaded values alone.
    pub fn with_overrides(self, window: Option<WindowPolicy>, early_exit: bool) -> Self {
        let mut config = self;
        if let Some(w) = window {
            config = config.with_window(w);
        }
        if early_exit {
            config = config.with_termination(Termination::EarlyExit);
        }
        config
    }
}
