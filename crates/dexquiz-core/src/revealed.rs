//! Set of revealed entries.

use std::collections::HashSet;

use crate::EntryId;

/// Insertion-ordered set of revealed entry ids.
///
/// Only grows. Membership is checked through a hash set; the vector keeps the
/// order entries were found in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    order: Vec<EntryId>,
    members: HashSet<EntryId>,
}

impl RevealedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns `false` if it was already present.
    pub fn insert(&mut self, id: EntryId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Whether the id has been revealed.
    pub fn contains(&self, id: EntryId) -> bool {
        self.members.contains(&id)
    }

    /// Number of revealed entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been revealed yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in the order they were revealed.
    pub fn iter(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.order.iter().copied()
    }

    /// Most recently revealed id.
    pub fn last(&self) -> Option<EntryId> {
        self.order.last().copied()
    }
}
