//! Routing results.

use cgr_core::{ContactId, NodeId, Time};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An earliest-arrival path: contacts in order from source to destination,
/// the per-hop endpoints, and the arrival time at the destination.
///
/// `contacts`, `hop_src` and `hop_dst` are parallel: hop `i` uses contact
/// `contacts[i]` from `hop_src[i]` to `hop_dst[i]`, and
/// `hop_dst[i] == hop_src[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub source:      NodeId,
    pub destination: NodeId,
    pub contacts:    Vec<ContactId>,
    pub hop_src:     Vec<NodeId>,
    pub hop_dst:     Vec<NodeId>,
    /// Best arrival time at `destination`.
    pub arrival:     Time,
}

impl Route {
    /// The empty route for a query whose source is its destination.
    pub fn trivial(node: NodeId, arrival: Time) -> Self {
        Self {
            source: node,
            destination: node,
            contacts: Vec::new(),
            hop_src: Vec::new(),
            hop_dst: Vec::new(),
            arrival,
        }
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.contacts.len()
    }

    /// `(src, dst)` pairs, one per hop.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.hop_src.iter().copied().zip(self.hop_dst.iter().copied())
    }

    /// Nodes visited in order, source first and destination last.
    pub fn node_trace(&self) -> Vec<NodeId> {
        std::iter::once(self.source)
            .chain(self.hop_dst.iter().copied())
            .collect()
    }
}

// ── RouteOutcome ──────────────────────────────────────────────────────────────

/// Result of a valid query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    Found(Route),
    /// No chain of contacts leads from the source to the destination.
    Unreachable,
}

impl RouteOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(r) => Some(r),
            RouteOutcome::Unreachable => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(r) => Some(r),
            RouteOutcome::Unreachable => None,
        }
    }
}
