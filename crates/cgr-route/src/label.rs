//! Per-node search state.
//!
//! Labels are owned by a single query.  The contact graph itself is never
//! written to, so nothing leaks from one query into the next and a node with
//! no outgoing contacts still gets a well-defined label.

use cgr_core::{NodeId, Time};
use cgr_plan::Contact;

#[cfg(feature = "fx-hash")]
type NodeMap<V> = rustc_hash::FxHashMap<NodeId, V>;
#[cfg(not(feature = "fx-hash"))]
type NodeMap<V> = std::collections::HashMap<NodeId, V>;

/// Best known arrival at a node and the contact that achieved it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeLabel {
    pub arrival:     Time,
    /// `None` for the query source and for unreached nodes.
    pub predecessor: Option<Contact>,
}

impl NodeLabel {
    pub const UNREACHED: NodeLabel = NodeLabel { arrival: Time::INFINITY, predecessor: None };
}

impl Default for NodeLabel {
    fn default() -> Self {
        Self::UNREACHED
    }
}

/// Query-local `NodeId → NodeLabel` map.  Absent nodes read as
/// [`NodeLabel::UNREACHED`].
#[derive(Debug, Default)]
pub struct LabelMap {
    labels: NodeMap<NodeLabel>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source label: arrival `t`, no predecessor.
    pub fn seed(&mut self, node: NodeId, t: Time) {
        self.labels.insert(node, NodeLabel { arrival: t, predecessor: None });
    }

    /// Record `via` as the way into `via.dst` if `candidate` is strictly
    /// earlier than the current label.  Returns `true` on improvement.
    pub fn improve(&mut self, candidate: Time, via: Contact) -> bool {
        let label = self.labels.entry(via.dst).or_default();
        if candidate < label.arrival {
            label.arrival = candidate;
            label.predecessor = Some(via);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn arrival(&self, node: NodeId) -> Time {
        self.labels.get(&node).map_or(Time::INFINITY, |l| l.arrival)
    }

    #[inline]
    pub fn predecessor(&self, node: NodeId) -> Option<&Contact> {
        self.labels.get(&node).and_then(|l| l.predecessor.as_ref())
    }

    /// Number of nodes that have been reached (including the source).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
