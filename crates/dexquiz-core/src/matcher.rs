//! Guess normalization and judging.

use crate::{EntryId, RevealedSet, Roster};

/// Result of judging a non-empty guess against the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess names an entry that was not yet revealed.
    Correct(EntryId),
    /// Guess names an entry that is already revealed.
    AlreadyGuessed(EntryId),
    /// Guess names no entry.
    Incorrect,
}

impl GuessOutcome {
    /// Entry the guess resolved to, if any.
    pub fn entry_id(self) -> Option<EntryId> {
        match self {
            Self::Correct(id) | Self::AlreadyGuessed(id) => Some(id),
            Self::Incorrect => None,
        }
    }
}

/// Trim and lowercase raw input. `None` if nothing is left.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}

/// Judge a normalized guess. Does not mutate anything.
pub fn judge(roster: &Roster, revealed: &RevealedSet, normalized: &str) -> GuessOutcome {
    match roster.lookup(normalized) {
        Some(entry) if revealed.contains(entry.id) => GuessOutcome::AlreadyGuessed(entry.id),
        Some(entry) => GuessOutcome::Correct(entry.id),
        None => GuessOutcome::Incorrect,
    }
}
