//! Routing error type.
//!
//! Only invalid queries are errors.  A valid query with no path is
//! [`RouteOutcome::Unreachable`](crate::RouteOutcome::Unreachable).

use thiserror::Error;

use cgr_core::NodeId;

/// Errors produced by `cgr-route`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid query: source {0} does not appear in the contact graph")]
    SourceNotInGraph(NodeId),

    #[error("invalid query: source {0} has no outgoing contacts to seed the search clock")]
    SourceHasNoContacts(NodeId),

    #[error("invalid query: destination {0} does not appear in the contact graph")]
    DestinationNotInGraph(NodeId),
}

pub type RouteResult<T> = Result<T, RouteError>;
