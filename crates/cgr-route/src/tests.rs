//! Unit tests for cgr-route.
//!
//! Plans are built by hand, except in `brute_force`, which checks the router
//! against exhaustive path enumeration on small random plans.

#[cfg(test)]
mod helpers {
    use cgr_core::{ContactId, NodeId, Time};
    use cgr_plan::{Contact, ContactGraph};

    use crate::Route;

    pub fn contact(id: u32, start: f64, end: f64, src: u32, dst: u32, owlt: f64) -> Contact {
        Contact::new(ContactId(id), Time(start), Time(end), NodeId(src), NodeId(dst), owlt)
            .unwrap()
    }

    /// Three nodes A=1, B=2, C=3, all contacts open over [0, 10]:
    ///
    ///   1: A→B owlt 5
    ///   2: B→C owlt 3
    ///   3: A→C owlt 20
    ///
    /// A→C via B arrives at 8; the direct contact arrives at 20.
    pub fn abc_graph() -> ContactGraph {
        ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 5.0),
            contact(2, 0.0, 10.0, 2, 3, 3.0),
            contact(3, 0.0, 10.0, 1, 3, 20.0),
        ])
        .unwrap()
    }

    pub fn ids(v: &[u32]) -> Vec<ContactId> {
        v.iter().map(|&i| ContactId(i)).collect()
    }

    /// Assert that a route's hops form a connected chain that starts at
    /// `source`, ends at `destination`, and matches the graph's contacts.
    pub fn assert_chain(graph: &ContactGraph, route: &Route, source: NodeId, destination: NodeId) {
        assert_eq!(route.contacts.len(), route.hop_src.len());
        assert_eq!(route.contacts.len(), route.hop_dst.len());
        assert_eq!(route.source, source);
        assert_eq!(route.destination, destination);
        if route.is_trivial() {
            assert_eq!(source, destination);
            return;
        }
        assert_eq!(route.hop_src[0], source);
        assert_eq!(*route.hop_dst.last().unwrap(), destination);
        for w in route.hop_dst.iter().zip(route.hop_src.iter().skip(1)) {
            assert_eq!(w.0, w.1, "consecutive hops must share a node");
        }
        for ((&id, src), dst) in route.contacts.iter().zip(&route.hop_src).zip(&route.hop_dst) {
            let c = graph.contact(id).unwrap();
            assert_eq!((c.src, c.dst), (*src, *dst));
        }
    }
}

// ── Earliest-arrival routing ──────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use cgr_core::{NodeId, Time};
    use cgr_plan::ContactGraph;

    use crate::{find_earliest_arrival, RouteOutcome};
    use super::helpers::{abc_graph, assert_chain, contact, ids};

    #[test]
    fn relayed_path_beats_direct_contact() {
        let g = abc_graph();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(3))
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.contacts, ids(&[1, 2]));
        assert_eq!(route.arrival, Time(8.0));
        assert_eq!(route.hops().collect::<Vec<_>>(), vec![
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(3)),
        ]);
        assert_eq!(route.node_trace(), vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert_chain(&g, &route, NodeId(1), NodeId(3));
    }

    #[test]
    fn trivial_same_node() {
        let g = abc_graph();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(1))
            .unwrap()
            .into_route()
            .unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.arrival, Time(0.0));
        assert_eq!(route.node_trace(), vec![NodeId(1)]);
    }

    #[test]
    fn seed_uses_first_listed_contact_only() {
        // Node 1 lists a late contact first; the earlier one is ignored for seeding.
        let g = ContactGraph::from_contacts([
            contact(1, 5.0, 50.0, 1, 2, 1.0),
            contact(2, 0.0, 50.0, 1, 3, 1.0),
        ])
        .unwrap();
        let r = find_earliest_arrival(&g, NodeId(1), NodeId(2)).unwrap();
        assert_eq!(r.route().unwrap().arrival, Time(6.0));
        let r = find_earliest_arrival(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(r.route().unwrap().arrival, Time(6.0));
        let r = find_earliest_arrival(&g, NodeId(1), NodeId(1)).unwrap();
        assert_eq!(r.route().unwrap().arrival, Time(5.0));
    }

    #[test]
    fn no_route_disconnected() {
        // 3 is only a source; nothing reaches it from 1.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 1.0),
            contact(2, 0.0, 10.0, 3, 4, 1.0),
        ])
        .unwrap();
        let r = find_earliest_arrival(&g, NodeId(1), NodeId(4)).unwrap();
        assert_eq!(r, RouteOutcome::Unreachable);
        assert!(!r.is_reachable());
        assert!(r.route().is_none());
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let g = ContactGraph::from_contacts([contact(1, 0.0, 10.0, 1, 2, 1.0)]).unwrap();
        assert!(find_earliest_arrival(&g, NodeId(1), NodeId(2)).unwrap().is_reachable());
        // Node 2 exists but has no contacts to seed a search from.
        assert!(find_earliest_arrival(&g, NodeId(2), NodeId(1)).is_err());
    }

    #[test]
    fn destination_without_outgoing_contacts() {
        // Node 3 never appears as a source, so it has no first-contact slot.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 2.0),
            contact(2, 0.0, 10.0, 2, 3, 2.0),
        ])
        .unwrap();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(3))
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.contacts, ids(&[1, 2]));
        assert_eq!(route.arrival, Time(4.0));
    }

    #[test]
    fn dead_end_never_intermediate() {
        // 2 is reached first but has no way out; the route must go through 3.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 1.0),
            contact(2, 0.0, 10.0, 1, 3, 5.0),
            contact(3, 0.0, 10.0, 3, 4, 1.0),
        ])
        .unwrap();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(4))
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.contacts, ids(&[2, 3]));
        assert!(!route.node_trace().contains(&NodeId(2)));
    }

    #[test]
    fn equal_cost_ties_prefer_lower_node_id() {
        // 1→2→4 and 1→3→4 both arrive at 2.  Node 2 pops first.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 3, 1.0),
            contact(2, 0.0, 10.0, 1, 2, 1.0),
            contact(3, 0.0, 10.0, 3, 4, 1.0),
            contact(4, 0.0, 10.0, 2, 4, 1.0),
        ])
        .unwrap();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(4))
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.contacts, ids(&[2, 4]));
        assert_eq!(route.arrival, Time(2.0));
    }

    #[test]
    fn zero_owlt_cycle_terminates() {
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 0.0),
            contact(2, 0.0, 10.0, 2, 1, 0.0),
            contact(3, 0.0, 10.0, 2, 3, 0.0),
        ])
        .unwrap();
        let route = find_earliest_arrival(&g, NodeId(1), NodeId(3))
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.contacts, ids(&[1, 3]));
        assert_eq!(route.arrival, Time(0.0));
    }

    #[test]
    fn repeated_queries_share_no_state() {
        let g = abc_graph();
        let first = find_earliest_arrival(&g, NodeId(1), NodeId(3)).unwrap();
        let other = find_earliest_arrival(&g, NodeId(2), NodeId(3)).unwrap();
        let again = find_earliest_arrival(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(first, again);
        // 2→3 seeds at B's first contact start (0), not A's labels.
        assert_eq!(other.route().unwrap().arrival, Time(3.0));
    }

    #[test]
    fn identical_independent_graphs_agree() {
        let a = find_earliest_arrival(&abc_graph(), NodeId(1), NodeId(3)).unwrap();
        let b = find_earliest_arrival(&abc_graph(), NodeId(1), NodeId(3)).unwrap();
        assert_eq!(a, b);
    }
}

// ── Invalid queries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod invalid_query {
    use cgr_core::NodeId;
    use cgr_plan::{ContactGraph, ContactGraphBuilder};

    use crate::{find_earliest_arrival, RouteError};
    use super::helpers::{abc_graph, contact};

    #[test]
    fn unknown_source() {
        let r = find_earliest_arrival(&abc_graph(), NodeId(9), NodeId(3));
        assert_eq!(r, Err(RouteError::SourceNotInGraph(NodeId(9))));
    }

    #[test]
    fn unknown_destination() {
        let r = find_earliest_arrival(&abc_graph(), NodeId(1), NodeId(9));
        assert_eq!(r, Err(RouteError::DestinationNotInGraph(NodeId(9))));
    }

    #[test]
    fn declared_source_without_contacts() {
        let mut b = ContactGraphBuilder::new();
        b.add_node(NodeId(5));
        b.add_contact(contact(1, 0.0, 10.0, 1, 2, 1.0));
        let g = b.build().unwrap();
        let r = find_earliest_arrival(&g, NodeId(5), NodeId(2));
        assert_eq!(r, Err(RouteError::SourceHasNoContacts(NodeId(5))));
    }

    #[test]
    fn destination_only_node_as_source() {
        let g = ContactGraph::from_contacts([contact(1, 0.0, 10.0, 1, 2, 1.0)]).unwrap();
        let r = find_earliest_arrival(&g, NodeId(2), NodeId(1));
        assert_eq!(r, Err(RouteError::SourceHasNoContacts(NodeId(2))));
    }

    #[test]
    fn invalid_query_is_not_unreachable() {
        // Source validation runs before the trivial-route shortcut.
        let r = find_earliest_arrival(&abc_graph(), NodeId(9), NodeId(9));
        assert!(matches!(r, Err(RouteError::SourceNotInGraph(_))));
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use cgr_core::{NodeId, Time};
    use cgr_plan::ContactGraph;

    use crate::{
        EarliestArrivalRouter, Router, RouterConfig, RouteOutcome, SearchStats, Termination,
        WindowPolicy,
    };
    use super::helpers::{abc_graph, contact, ids};

    fn enforced() -> EarliestArrivalRouter {
        EarliestArrivalRouter::new(RouterConfig::default().with_window(WindowPolicy::Enforced))
    }

    #[test]
    fn defaults_match_relaxed_search() {
        let cfg = RouterConfig::default();
        assert_eq!(cfg.window, WindowPolicy::Unchecked);
        assert_eq!(cfg.termination, Termination::Exhaustive);
    }

    #[test]
    fn unchecked_ignores_closed_windows() {
        // 2→3 closes at t=3, before data reaches 2 at t=5.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 5.0),
            contact(2, 0.0, 3.0, 2, 3, 3.0),
            contact(3, 0.0, 100.0, 1, 3, 20.0),
        ])
        .unwrap();
        let unchecked = EarliestArrivalRouter::default()
            .route(&g, NodeId(1), NodeId(3))
            .unwrap();
        assert_eq!(unchecked.route().unwrap().contacts, ids(&[1, 2]));

        let strict = enforced().route(&g, NodeId(1), NodeId(3)).unwrap();
        let route = strict.route().unwrap();
        assert_eq!(route.contacts, ids(&[3]));
        assert_eq!(route.arrival, Time(20.0));
    }

    #[test]
    fn enforced_waits_for_window_to_open() {
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 5.0),
            contact(2, 12.0, 20.0, 2, 3, 3.0),
        ])
        .unwrap();
        let r = enforced().route(&g, NodeId(1), NodeId(3)).unwrap();
        assert_eq!(r.route().unwrap().arrival, Time(15.0));
    }

    #[test]
    fn enforced_can_be_unreachable() {
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 5.0),
            contact(2, 0.0, 4.0, 2, 3, 3.0),
        ])
        .unwrap();
        assert_eq!(enforced().route(&g, NodeId(1), NodeId(3)).unwrap(), RouteOutcome::Unreachable);
    }

    #[test]
    fn overrides_replace_only_what_is_set() {
        let loaded = RouterConfig::default().with_window(WindowPolicy::Enforced);
        assert_eq!(loaded.with_overrides(None, false), loaded);
        assert_eq!(
            loaded.with_overrides(Some(WindowPolicy::Unchecked), false),
            RouterConfig::default()
        );
        let early = loaded.with_overrides(None, true);
        assert_eq!(early.window, WindowPolicy::Enforced);
        assert_eq!(early.termination, Termination::EarlyExit);
    }

    #[test]
    fn window_policy_arrival_via() {
        let c = contact(1, 10.0, 20.0, 1, 2, 2.0);
        assert_eq!(WindowPolicy::Unchecked.arrival_via(&c, Time(25.0)), Some(Time(27.0)));
        assert_eq!(WindowPolicy::Enforced.arrival_via(&c, Time(5.0)), Some(Time(12.0)));
        assert_eq!(WindowPolicy::Enforced.arrival_via(&c, Time(20.0)), Some(Time(22.0)));
        assert_eq!(WindowPolicy::Enforced.arrival_via(&c, Time(20.5)), None);
    }

    #[test]
    fn early_exit_same_route_less_work() {
        // Everything past node 2 is irrelevant to a 1→2 query.
        let g = ContactGraph::from_contacts([
            contact(1, 0.0, 10.0, 1, 2, 1.0),
            contact(2, 0.0, 10.0, 2, 3, 1.0),
            contact(3, 0.0, 10.0, 1, 4, 10.0),
            contact(4, 0.0, 10.0, 4, 5, 1.0),
        ])
        .unwrap();

        let exhaustive = EarliestArrivalRouter::default();
        let early = EarliestArrivalRouter::new(
            RouterConfig::default().with_termination(Termination::EarlyExit),
        );

        let mut full_stats = SearchStats::default();
        let mut early_stats = SearchStats::default();
        let a = exhaustive.route_observed(&g, NodeId(1), NodeId(2), &mut full_stats).unwrap();
        let b = early.route_observed(&g, NodeId(1), NodeId(2), &mut early_stats).unwrap();

        assert_eq!(a, b);
        // Exhaustive settles 1, 2, 4, 5 (3 only hangs off the destination).
        assert_eq!(full_stats.settled, 4);
        assert_eq!(early_stats.settled, 2);
    }

    #[test]
    fn stats_count_stale_pops() {
        // Node 3 is pushed at 20, then improved to 8; the 20 entry goes stale.
        let mut stats = SearchStats::default();
        EarliestArrivalRouter::default()
            .route_observed(&abc_graph(), NodeId(1), NodeId(3), &mut stats)
            .unwrap();
        assert_eq!(stats.settled, 3);
        assert_eq!(stats.stale_pops, 1);
        assert_eq!(stats.relaxations, 3);
    }
}

// ── JSON configuration ────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod config_json {
    use crate::{RouterConfig, Termination, WindowPolicy};

    const SHIPPED: &str = include_str!("../../../demos/cgr-query/data/router.json");

    #[test]
    fn shipped_config_parses() {
        let cfg: RouterConfig = serde_json::from_str(SHIPPED).unwrap();
        assert_eq!(cfg.window, WindowPolicy::Enforced);
        assert_eq!(cfg.termination, Termination::Exhaustive);
    }

    #[test]
    fn snake_case_variant_names() {
        let cfg: RouterConfig =
            serde_json::from_str(r#"{"window":"unchecked","termination":"early_exit"}"#).unwrap();
        assert_eq!(cfg.window, WindowPolicy::Unchecked);
        assert_eq!(cfg.termination, Termination::EarlyExit);
        assert!(serde_json::from_str::<RouterConfig>(r#"{"window":"Enforced"}"#).is_err());
    }

    #[test]
    fn partial_object_fills_defaults() {
        let cfg: RouterConfig = serde_json::from_str(r#"{"window":"enforced"}"#).unwrap();
        assert_eq!(cfg, RouterConfig::default().with_window(WindowPolicy::Enforced));
        let empty: RouterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RouterConfig::default());
    }

    #[test]
    fn roundtrip_serialized_names() {
        let cfg = RouterConfig::default().with_termination(Termination::EarlyExit);
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(text, r#"{"window":"unchecked","termination":"early_exit"}"#);
    }
}

// ── Presenter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod present {
    use cgr_core::NodeId;

    use crate::{find_earliest_arrival, RouteOutcome, RouteReport};
    use super::helpers::abc_graph;

    #[test]
    fn found_route_report() {
        let r = find_earliest_arrival(&abc_graph(), NodeId(1), NodeId(3)).unwrap();
        let rule = "-".repeat(58);
        let expected = format!(
            "{rule}\n\
             ------------ The path of the Contact Graph is ------------\n\
             Optimal path ids: [1, 2]\n\
             {rule}\n\
             The traversal of the nodes in the path is as follows:\n\
             1 -> 2\n\
             2 -> 3\n\
             {rule}\n\
             Best arrival time: 8\n\
             {rule}\n"
        );
        assert_eq!(RouteReport(&r).to_string(), expected);
    }

    #[test]
    fn trivial_route_report() {
        let r = find_earliest_arrival(&abc_graph(), NodeId(1), NodeId(1)).unwrap();
        let text = RouteReport(&r).to_string();
        assert!(text.contains("Optimal path ids: []"));
        assert!(text.contains("no contacts needed"));
    }

    #[test]
    fn unreachable_report() {
        let text = RouteReport(&RouteOutcome::Unreachable).to_string();
        assert_eq!(text, "Destination is unreachable from the source\n");
    }
}

// ── Brute-force optimality ────────────────────────────────────────────────────

#[cfg(test)]
mod brute_force {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use cgr_core::{NodeId, Time};
    use cgr_plan::ContactGraph;

    use crate::{EarliestArrivalRouter, Router, RouterConfig, Termination, WindowPolicy};
    use super::helpers::{assert_chain, contact};

    const NODES: u32 = 6;
    const GRAPHS: usize = 200;

    /// Random plan over nodes 1..=NODES.  Node 1 always has an outgoing
    /// contact.  Integer-valued times keep float sums exact.
    fn random_graph(rng: &mut SmallRng) -> ContactGraph {
        let n_contacts = rng.gen_range(1..14);
        let contacts = (0..n_contacts).map(|i| {
            let src = if i == 0 { 1 } else { rng.gen_range(1..=NODES) };
            let dst = rng.gen_range(1..=NODES);
            let start = rng.gen_range(0..20) as f64;
            let end = start + rng.gen_range(0..20) as f64;
            let owlt = rng.gen_range(0..10) as f64;
            contact(i + 1, start, end, src, dst, owlt)
        });
        ContactGraph::from_contacts(contacts.collect::<Vec<_>>()).unwrap()
    }

    /// Earliest arrival over every simple contact chain from `source`.
    fn exhaustive_best(
        graph:  &ContactGraph,
        source: NodeId,
        dest:   NodeId,
        window: WindowPolicy,
    ) -> Option<Time> {
        let seed = graph.first_contact(source)?.start;
        if source == dest {
            return Some(seed);
        }
        let mut best = None;
        let mut on_path = vec![source];
        walk(graph, source, seed, dest, window, &mut on_path, &mut best);
        best
    }

    fn walk(
        graph:   &ContactGraph,
        node:    NodeId,
        t:       Time,
        dest:    NodeId,
        window:  WindowPolicy,
        on_path: &mut Vec<NodeId>,
        best:    &mut Option<Time>,
    ) {
        for c in graph.outgoing(node) {
            if on_path.contains(&c.dst) {
                continue;
            }
            let Some(arrival) = window.arrival_via(c, t) else {
                continue;
            };
            if c.dst == dest {
                *best = Some(best.map_or(arrival, |b| Ord::min(b, arrival)));
                continue;
            }
            on_path.push(c.dst);
            walk(graph, c.dst, arrival, dest, window, on_path, best);
            on_path.pop();
        }
    }

    fn check_policy(window: WindowPolicy, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let exhaustive = EarliestArrivalRouter::new(RouterConfig::default().with_window(window));
        let early = EarliestArrivalRouter::new(
            RouterConfig::default()
                .with_window(window)
                .with_termination(Termination::EarlyExit),
        );

        for _ in 0..GRAPHS {
            let graph = random_graph(&mut rng);
            let source = NodeId(1);
            for dest in graph.nodes().collect::<Vec<_>>() {
                let outcome = exhaustive.route(&graph, source, dest).unwrap();
                let expected = exhaustive_best(&graph, source, dest, window);

                match (outcome.route(), expected) {
                    (Some(route), Some(best)) => {
                        assert_eq!(route.arrival, best, "{window:?} {source}->{dest}");
                        assert_chain(&graph, route, source, dest);
                        // Intermediate nodes must have somewhere to go.
                        for node in &route.node_trace()[..route.hop_count()] {
                            assert!(!graph.outgoing(*node).is_empty());
                        }
                    }
                    (None, None) => {}
                    (got, want) => panic!("{window:?} {source}->{dest}: got {got:?}, want {want:?}"),
                }

                assert_eq!(early.route(&graph, source, dest).unwrap(), outcome);
            }
        }
    }

    #[test]
    fn unchecked_matches_exhaustive_search() {
        check_policy(WindowPolicy::Unchecked, 42);
    }

    #[test]
    fn enforced_matches_exhaustive_search() {
        check_policy(WindowPolicy::Enforced, 7);
    }
}
