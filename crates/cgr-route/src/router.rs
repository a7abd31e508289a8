//! Routing trait and the earliest-arrival implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so applications can swap in
//! other contact graph routing variants (volume-aware, k-shortest) without
//! touching the plan or presentation code.
//!
//! # Algorithm
//!
//! Dijkstra over contacts, with arrival time as the cost:
//!
//! ```text
//! seed     arrival[source] = graph[source][0].start
//! pop      (t, u) with the smallest t; skip if stale
//! relax    for c in outgoing(u): arrival[c.dst] = min(arrival[c.dst], t + c.owlt)
//! stop     queue empty (or destination popped, with EarlyExit)
//! result   follow predecessor contacts back from the destination
//! ```
//!
//! Only the *first* contact listed for the source seeds the clock; the minimum
//! start over all of the source's contacts is not considered.
//!
//! Equal arrival times pop in ascending `NodeId` order, which decides between
//! equal-cost routes.
//!
//! Complexity is O((V + E) log V) with a binary heap.
//!
//! Every contact's `end + owlt` is finite (checked when the contact is
//! built), but a long enough chain could still sum past `f64::MAX`.  Such a
//! candidate is infinite, never beats an unreached label, and the node reads
//! as unreachable.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use cgr_core::{NodeId, Time};
use cgr_plan::ContactGraph;

use crate::{
    LabelMap, NoopObserver, Route, RouteError, RouteOutcome, RouteResult, RouterConfig,
    SearchObserver, Termination,
};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable contact graph routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  Search state is query-local, so a
/// router and a graph can be shared freely between callers.
pub trait Router: Send + Sync {
    /// Compute the route from `source` to `destination`.
    ///
    /// `Ok(RouteOutcome::Unreachable)` means the query was valid but no chain
    /// of contacts connects the two nodes.  `Err` is reserved for invalid
    /// queries.
    fn route(
        &self,
        graph:       &ContactGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RouteResult<RouteOutcome>;
}

/// Earliest-arrival search with the default [`RouterConfig`].
pub fn find_earliest_arrival(
    graph:       &ContactGraph,
    source:      NodeId,
    destination: NodeId,
) -> RouteResult<RouteOutcome> {
    EarliestArrivalRouter::default().route(graph, source, destination)
}

// ── EarliestArrivalRouter ─────────────────────────────────────────────────────

/// Dijkstra-style earliest-arrival router.  See the [module docs](self).
#[derive(Clone, Debug, Default)]
pub struct EarliestArrivalRouter {
    pub config: RouterConfig,
}

impl EarliestArrivalRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Like [`Router::route`], reporting search progress to `observer`.
    pub fn route_observed<O: SearchObserver>(
        &self,
        graph:       &ContactGraph,
        source:      NodeId,
        destination: NodeId,
        observer:    &mut O,
    ) -> RouteResult<RouteOutcome> {
        let seed = validate_query(graph, source, destination)?;
        debug!(
            "routing {source} -> {destination} from t={seed} ({:?}, {:?})",
            self.config.window, self.config.termination
        );

        if source == destination {
            observer.on_search_end(0);
            return Ok(RouteOutcome::Found(Route::trivial(source, seed)));
        }

        let labels = self.search(graph, source, destination, seed, observer);

        if labels.predecessor(destination).is_none() {
            debug!("{destination} unreachable from {source} ({} nodes reached)", labels.len());
            return Ok(RouteOutcome::Unreachable);
        }

        let route = reconstruct(&labels, source, destination);
        debug!(
            "{source} -> {destination}: {} hops, arrival {}",
            route.hop_count(),
            route.arrival
        );
        Ok(RouteOutcome::Found(route))
    }

    fn search<O: SearchObserver>(
        &self,
        graph:       &ContactGraph,
        source:      NodeId,
        destination: NodeId,
        seed:        Time,
        observer:    &mut O,
    ) -> LabelMap {
        let mut labels = LabelMap::new();
        labels.seed(source, seed);

        // Min-heap: (arrival, node). Reverse makes BinaryHeap (max) behave as min-heap.
        // Secondary key NodeId ensures deterministic tie-breaking.
        let mut heap: BinaryHeap<Reverse<(Time, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((seed, source)));

        let mut settled = 0usize;

        while let Some(Reverse((t, node))) = heap.pop() {
            // Skip stale heap entries.
            if t > labels.arrival(node) {
                observer.on_stale(node, t);
                continue;
            }

            settled += 1;
            observer.on_settle(node, t);
            trace!("settle {node} at {t}");

            if node == destination {
                match self.config.termination {
                    Termination::EarlyExit => break,
                    // Leaving the destination cannot improve its own label.
                    Termination::Exhaustive => continue,
                }
            }

            for contact in graph.outgoing(node) {
                let Some(candidate) = self.config.window.arrival_via(contact, t) else {
                    continue;
                };
                observer.on_relax(contact, candidate);

                if labels.improve(candidate, *contact) {
                    trace!("  {} improves {} to {candidate}", contact.id, contact.dst);
                    heap.push(Reverse((candidate, contact.dst)));
                }
            }
        }

        observer.on_search_end(settled);
        labels
    }
}

impl Router for EarliestArrivalRouter {
    fn route(
        &self,
        graph:       &ContactGraph,
        source:      NodeId,
        destination: NodeId,
    ) -> RouteResult<RouteOutcome> {
        self.route_observed(graph, source, destination, &mut NoopObserver)
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Check query preconditions and return the seed time for `source`.
fn validate_query(
    graph:       &ContactGraph,
    source:      NodeId,
    destination: NodeId,
) -> RouteResult<Time> {
    if !graph.contains_node(source) {
        return Err(RouteError::SourceNotInGraph(source));
    }
    let Some(first) = graph.first_contact(source) else {
        return Err(RouteError::SourceHasNoContacts(source));
    };
    if !graph.contains_node(destination) {
        return Err(RouteError::DestinationNotInGraph(destination));
    }
    Ok(first.start)
}

/// Walk predecessor contacts from `destination` back to `source`.
///
/// Every reached node other than the source has a predecessor, and labels
/// only ever decrease strictly, so the chain is acyclic and ends at `source`.
fn reconstruct(labels: &LabelMap, source: NodeId, destination: NodeId) -> Route {
    let mut contacts = Vec::new();
    let mut hop_src  = Vec::new();
    let mut hop_dst  = Vec::new();

    let mut cur = destination;
    while cur != source {
        let Some(c) = labels.predecessor(cur) else {
            break;
        };
        contacts.push(c.id);
        hop_src.push(c.src);
        hop_dst.push(c.dst);
        cur = c.src;
    }

    contacts.reverse();
    hop_src.reverse();
    hop_dst.reverse();

    Route {
        source,
        destination,
        contacts,
        hop_src,
        hop_dst,
        arrival: labels.arrival(destination),
    }
}
