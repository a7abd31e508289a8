//! Search observer trait for instrumentation.

use cgr_core::{NodeId, Time};
use cgr_plan::Contact;

/// Callbacks invoked by
/// [`EarliestArrivalRouter::route_observed`][crate::EarliestArrivalRouter::route_observed]
/// at key points in the search loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — settle printer
///
/// ```rust,ignore
/// struct SettlePrinter;
///
/// impl SearchObserver for SettlePrinter {
///     fn on_settle(&mut self, node: NodeId, arrival: Time) {
///         println!("{node} settled at {arrival}");
///     }
/// }
/// ```
pub trait SearchObserver {
    /// A node was popped with its current best arrival time.
    fn on_settle(&mut self, _node: NodeId, _arrival: Time) {}

    /// A heap entry was discarded because the node's label had already
    /// improved past it.
    fn on_stale(&mut self, _node: NodeId, _popped: Time) {}

    /// A contact was evaluated with the given candidate arrival at its `dst`,
    /// whether or not it improved the label.
    fn on_relax(&mut self, _contact: &Contact, _candidate: Time) {}

    /// Called once when the search loop exits.
    fn on_search_end(&mut self, _settled: usize) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counts search work.  Useful for comparing termination strategies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub settled:     usize,
    pub stale_pops:  usize,
    pub relaxations: usize,
}

impl SearchObserver for SearchStats {
    fn on_settle(&mut self, _node: NodeId, _arrival: Time) {
        self.settled += 1;
    }

    fn on_stale(&mut self, _node: NodeId, _popped: Time) {
        self.stale_pops += 1;
    }

    fn on_relax(&mut self, _contact: &Contact, _candidate: Time) {
        self.relaxations += 1;
    }
}
