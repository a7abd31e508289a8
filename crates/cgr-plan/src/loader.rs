//! Contact-plan loaders.
//!
//! # Plain format
//!
//! One contact per line, six whitespace-separated numeric fields:
//!
//! ```text
//! # id start end src dst owlt
//! 1  0   10  1  2  5
//! 2  0   10  2  3  3.5
//! ```
//!
//! `id`, `src` and `dst` must be integral (`3.0` is accepted as `3`); the
//! other fields are real.  Blank lines and lines starting with `#` are
//! skipped.  Every error, including an invalid window or a repeated contact
//! id, is reported as [`PlanError::Parse`] with the 1-based line number.
//!
//! # CSV format
//!
//! ```csv
//! id,start,end,src,dst,owlt
//! 1,0,10,1,2,5
//! 2,0,10,2,3,3.5
//! ```
//!
//! Both loaders validate every contact (see [`Contact::new`]) and keep plan
//! order, which matters for seeding the router clock.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use cgr_core::{ContactId, NodeId, Time};

use crate::{Contact, ContactGraph, ContactGraphBuilder, PlanError, PlanResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ContactRecord {
    id:    u32,
    start: f64,
    end:   f64,
    src:   u32,
    dst:   u32,
    owlt:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a contact graph from a plain whitespace-separated file.
pub fn load_contacts_plain(path: &Path) -> PlanResult<ContactGraph> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_contacts_plain_reader(file)
}

/// Like [`load_contacts_plain`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded plans.
pub fn load_contacts_plain_reader<R: Read>(reader: R) -> PlanResult<ContactGraph> {
    let mut builder = ContactGraphBuilder::new();
    let mut skipped = 0usize;
    // ContactId → line it was declared on.
    let mut seen: HashMap<ContactId, usize> = HashMap::new();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            skipped += 1;
            continue;
        }
        let contact = parse_plain_line(trimmed, line_no)?;
        if let Some(first) = seen.insert(contact.id, line_no) {
            return Err(PlanError::Parse {
                line:    line_no,
                message: format!("{} already declared on line {first}", contact.id),
            });
        }
        builder.add_contact(contact);
    }

    debug!(
        "loaded {} contacts from plain plan ({skipped} blank/comment lines skipped)",
        builder.contact_count()
    );
    builder.build()
}

/// Load a contact graph from a CSV file with an `id,start,end,src,dst,owlt`
/// header.
pub fn load_contacts_csv(path: &Path) -> PlanResult<ContactGraph> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_contacts_csv_reader(file)
}

/// Like [`load_contacts_csv`] but accepts any `Read` source.
pub fn load_contacts_csv_reader<R: Read>(reader: R) -> PlanResult<ContactGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut builder = ContactGraphBuilder::new();

    for result in csv_reader.deserialize::<ContactRecord>() {
        let r = result.map_err(|e| PlanError::Csv(e.to_string()))?;
        builder.add_contact(Contact::new(
            ContactId(r.id),
            Time(r.start),
            Time(r.end),
            NodeId(r.src),
            NodeId(r.dst),
            r.owlt,
        )?);
    }

    debug!("loaded {} contacts from CSV plan", builder.contact_count());
    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_plain_line(line: &str, line_no: usize) -> PlanResult<Contact> {
    let parse_err = |message: String| PlanError::Parse { line: line_no, message };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(parse_err(format!(
            "expected 6 fields (id start end src dst owlt), found {}",
            fields.len()
        )));
    }

    let mut values = [0.0f64; 6];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse::<f64>()
            .map_err(|_| parse_err(format!("invalid number {field:?}")))?;
    }
    let [id, start, end, src, dst, owlt] = values;

    Contact::new(
        ContactId(integral(id, "id").map_err(parse_err)?),
        Time(start),
        Time(end),
        NodeId(integral(src, "src").map_err(parse_err)?),
        NodeId(integral(dst, "dst").map_err(parse_err)?),
        owlt,
    )
    .map_err(|e| parse_err(e.to_string()))
}

/// Convert a parsed number to a `u32` identifier, rejecting fractions,
/// negatives and values out of range.
fn integral(v: f64, field: &str) -> Result<u32, String> {
    if v.fract() != 0.0 || v < 0.0 || v > u32::MAX as f64 {
        return Err(format!("{field} must be a non-negative integer, found {v}"));
    }
    Ok(v as u32)
}
