//! `cgr-core` — foundational types for the `cgr` contact-graph routing crates.
//!
//! This crate is a dependency of every other `cgr-*` crate.  It has no
//! `cgr-*` dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`ids`]    | `NodeId`, `ContactId`                       |
//! | [`time`]   | `Time` (total-ordered `f64` instant)        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ContactId, NodeId};
pub use time::Time;
