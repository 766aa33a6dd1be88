//! Error types for roster construction and guess submission.

use thiserror::Error;

use crate::EntryId;

/// Reasons a roster cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster has no entries.
    #[error("roster is empty")]
    Empty,

    /// An entry uses the reserved id zero.
    #[error("entry {name:?} has id 0; ids start at 1")]
    ZeroId {
        /// Display name of the offending entry.
        name: String,
    },

    /// Two entries share an id.
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),

    /// An entry name or alias is empty after trimming.
    #[error("entry {0} has an empty name or alias")]
    EmptyName(EntryId),

    /// A normalized name or alias resolves to more than one entry.
    #[error("name {name:?} of entry {id} is already used by another entry")]
    DuplicateName {
        /// Normalized spelling that collided.
        name: String,
        /// Id of the entry that tried to claim it.
        id: EntryId,
    },
}

/// Reasons a guess is rejected before it reaches the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Input was empty or whitespace only.
    #[error("guess is empty")]
    Empty,
}
