//! Strongly typed identifier wrappers.
//!
//! Node and contact identifiers come straight from the contact plan and are
//! arbitrary small integers, so they are not dense indices.  Graph storage
//! keys on the ID itself.

use std::fmt;
use std::str::FromStr;

/// Generate a typed ID wrapper around a `u32`, displayed as `"<label> <n>"`.
macro_rules! plan_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(n: u32) -> $name {
                $name(n)
            }
        }

        /// Parses the bare number, as written in a contact plan.
        impl FromStr for $name {
            type Err = std::num::ParseIntError;
            fn from_str(s: &str) -> Result<$name, Self::Err> {
                s.trim().parse::<u32>().map($name)
            }
        }
    };
}

plan_id! {
    /// Identifier of a network node (a DTN endpoint).
    pub struct NodeId => "node";
}

plan_id! {
    /// Identifier of a contact.  Opaque beyond equality and display.
    pub struct ContactId => "contact";
}
