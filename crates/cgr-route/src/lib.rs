//! `cgr-route` — earliest-arrival routing over a contact graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`router`]   | `Router` trait, `EarliestArrivalRouter`, `find_earliest_arrival` |
//! | [`config`]   | `RouterConfig`, `WindowPolicy`, `Termination`             |
//! | [`label`]    | `NodeLabel`, query-local `LabelMap`                       |
//! | [`route`]    | `Route`, `RouteOutcome`                                   |
//! | [`observer`] | `SearchObserver` trait, `NoopObserver`, `SearchStats`     |
//! | [`present`]  | `RouteReport` (human-readable `Display`)                  |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Outcomes
//!
//! A query has three possible results, and they never overlap:
//!
//! ```text
//! Ok(RouteOutcome::Found(route))   path exists
//! Ok(RouteOutcome::Unreachable)    valid query, no chain of contacts
//! Err(RouteError::..)              the query itself is invalid
//! ```
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the label map instead of SipHash.             |
//! | `serde`   | Derives `Serialize`/`Deserialize` on config and routes.  |
//!
//! # Quick-start
//!
//! ```
//! use cgr_core::{ContactId, NodeId, Time};
//! use cgr_plan::{Contact, ContactGraph};
//! use cgr_route::find_earliest_arrival;
//!
//! let c = |id, src, dst, owlt| {
//!     Contact::new(ContactId(id), Time(0.0), Time(10.0), NodeId(src), NodeId(dst), owlt).unwrap()
//! };
//! let graph = ContactGraph::from_contacts([c(1, 1, 2, 5.0), c(2, 2, 3, 3.0), c(3, 1, 3, 20.0)])
//!     .unwrap();
//!
//! let route = find_earliest_arrival(&graph, NodeId(1), NodeId(3))
//!     .unwrap()
//!     .into_route()
//!     .unwrap();
//! assert_eq!(route.contacts, vec![ContactId(1), ContactId(2)]);
//! assert_eq!(route.arrival, Time(8.0));
//! ```

pub mod config;
pub mod error;
pub mod label;
pub mod observer;
pub mod present;
pub mod route;
pub mod router;

#[cfg(test)]
mod tests;

pub use config::{RouterConfig, Termination, WindowPolicy};
pub use error::{RouteError, RouteResult};
pub use label::{LabelMap, NodeLabel};
pub use observer::{NoopObserver, SearchObserver, SearchStats};
pub use present::RouteReport;
pub use route::{Route, RouteOutcome};
pub use router::{EarliestArrivalRouter, Router, find_earliest_arrival};
