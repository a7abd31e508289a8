//! `cgr-plan` — contacts, the contact graph, and contact-plan loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`contact`] | `Contact` (validated, time-windowed directed edge)           |
//! | [`graph`]   | `ContactGraph`, `ContactGraphBuilder`                        |
//! | [`loader`]  | plain whitespace and CSV contact-plan readers                |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod contact;
pub mod error;
pub mod graph;
pub mod loader;


pub use contact::Contact;
pub use error::{PlanError, PlanResult};
pub use graph::{ContactGraph, ContactGraphBuilder};
pub use loader::{
    load_contacts_csv, load_contacts_csv_reader, load_contacts_plain, load_contacts_plain_reader,
};
