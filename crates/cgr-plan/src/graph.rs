//! Contact graph representation and builder.
//!
//! # Data layout
//!
//! Contacts are grouped by source node:
//!
//! ```text
//! outgoing[src] = [contact, contact, ...]   // insertion order
//! ```
//!
//! Insertion order is preserved because the router seeds its clock from the
//! *first* contact listed for the query source.  Beyond that, order carries
//! no routing meaning.
//!
//! The graph is immutable once built.  Search state lives in a query-local
//! label map owned by the router, so one graph can serve any number of
//! back-to-back queries.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use cgr_core::{ContactId, NodeId};

use crate::{Contact, PlanError, PlanResult};

// ── ContactGraph ──────────────────────────────────────────────────────────────

/// Directed contact graph keyed by source node.
///
/// Do not construct directly; use [`ContactGraphBuilder`] or
/// [`ContactGraph::from_contacts`].
#[derive(Clone, Debug, Default)]
pub struct ContactGraph {
    /// Outgoing contacts per source node.  A key may map to an empty list
    /// when the node was declared with [`ContactGraphBuilder::add_node`].
    outgoing: BTreeMap<NodeId, Vec<Contact>>,

    /// Every node that appears as a key, a contact source, or a contact
    /// destination.
    nodes: BTreeSet<NodeId>,

    /// `ContactId → (src, position in outgoing[src])`.
    by_id: HashMap<ContactId, (NodeId, usize)>,
}

impl ContactGraph {
    /// Build a graph from contacts in plan order.
    pub fn from_contacts<I>(contacts: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut b = ContactGraphBuilder::new();
        for c in contacts {
            b.add_contact(c);
        }
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contact_count(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Outgoing contacts of `node` in plan order.  Empty for nodes that never
    /// appear as a source.
    #[inline]
    pub fn outgoing(&self, node: NodeId) -> &[Contact] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first contact listed for `node`, if any.
    #[inline]
    pub fn first_contact(&self, node: NodeId) -> Option<&Contact> {
        self.outgoing(node).first()
    }

    /// `true` if `node` appears anywhere in the plan.
    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Look up a contact by its plan identifier.
    pub fn contact(&self, id: ContactId) -> Option<&Contact> {
        let &(src, pos) = self.by_id.get(&id)?;
        self.outgoing.get(&src).and_then(|v| v.get(pos))
    }

    /// All known nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// All contacts, grouped by ascending source node, plan order within a
    /// source.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.outgoing.values().flatten()
    }
}

// ── ContactGraphBuilder ───────────────────────────────────────────────────────

/// Construct a [`ContactGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cgr_core::{ContactId, NodeId, Time};
/// use cgr_plan::{Contact, ContactGraphBuilder};
///
/// let mut b = ContactGraphBuilder::new();
/// b.add_contact(
///     Contact::new(ContactId(1), Time(0.0), Time(10.0), NodeId(1), NodeId(2), 5.0).unwrap(),
/// );
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.contact_count(), 1);
/// ```
pub struct ContactGraphBuilder {
    contacts: Vec<Contact>,
    declared: Vec<NodeId>,
}

impl ContactGraphBuilder {
    pub fn new() -> Self {
        Self { contacts: Vec::new(), declared: Vec::new() }
    }

    /// Append a contact.  Order of calls is the plan order.
    pub fn add_contact(&mut self, contact: Contact) -> &mut Self {
        self.contacts.push(contact);
        self
    }

    /// Declare `node` as a graph key even if it has no outgoing contacts.
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.declared.push(node);
        self
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Consume the builder and produce a [`ContactGraph`].
    ///
    /// Fails with [`PlanError::DuplicateContact`] if two contacts share an id.
    pub fn build(self) -> PlanResult<ContactGraph> {
        let mut outgoing: BTreeMap<NodeId, Vec<Contact>> = BTreeMap::new();
        let mut nodes = BTreeSet::new();
        let mut by_id = HashMap::with_capacity(self.contacts.len());

        for node in self.declared {
            outgoing.entry(node).or_default();
            nodes.insert(node);
        }

        for c in self.contacts {
            let list = outgoing.entry(c.src).or_default();
            if by_id.insert(c.id, (c.src, list.len())).is_some() {
                return Err(PlanError::DuplicateContact(c.id));
            }
            list.push(c);
            nodes.insert(c.src);
            nodes.insert(c.dst);
        }

        Ok(ContactGraph { outgoing, nodes, by_id })
    }
}

impl Default for ContactGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
