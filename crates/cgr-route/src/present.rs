//! Human-readable route report.

use std::fmt;

use crate::RouteOutcome;

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "------------ The path of the Contact Graph is ------------";

/// `Display` adapter that renders a [`RouteOutcome`] for a terminal.
///
/// ```text
/// ----------------------------------------------------------
/// ------------ The path of the Contact Graph is ------------
/// Optimal path ids: [1, 2]
/// ----------------------------------------------------------
/// The traversal of the nodes in the path is as follows:
/// 1 -> 2
/// 2 -> 3
/// ----------------------------------------------------------
/// Best arrival time: 8
/// ----------------------------------------------------------
/// ```
pub struct RouteReport<'a>(pub &'a RouteOutcome);

impl fmt::Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RouteOutcome::Found(route) = self.0 else {
            return writeln!(f, "Destination is unreachable from the source");
        };

        let ids: Vec<String> = route.contacts.iter().map(|c| c.0.to_string()).collect();

        writeln!(f, "{RULE}")?;
        writeln!(f, "{BANNER}")?;
        writeln!(f, "Optimal path ids: [{}]", ids.join(", "))?;
        writeln!(f, "{RULE}")?;
        if route.is_trivial() {
            writeln!(f, "Source is the destination; no contacts needed.")?;
        } else {
            writeln!(f, "The traversal of the nodes in the path is as follows:")?;
            for (src, dst) in route.hops() {
                writeln!(f, "{} -> {}", src.0, dst.0)?;
            }
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Best arrival time: {}", route.arrival)?;
        writeln!(f, "{RULE}")
    }
}
