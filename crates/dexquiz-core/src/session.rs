//! Explicit game session state.

use crate::{
    GuessError, GuessOutcome, RevealedSet, Roster,
    matcher::{judge, normalize},
};

/// Roster plus reveal state.
///
/// The only way to reveal an entry is [`Session::submit`], so the revealed
/// set is always a subset of the roster and grows by at most one per guess.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    revealed: RevealedSet,
}

impl Session {
    /// Start a session with nothing revealed.
    pub fn new(roster: Roster) -> Self {
        Self { roster, revealed: RevealedSet::new() }
    }

    /// Judge raw player input and reveal the entry on a correct guess.
    ///
    /// # Errors
    ///
    /// [`GuessError::Empty`] for blank input. State is unchanged.
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let normalized = normalize(raw).ok_or(GuessError::Empty)?;
        let outcome = judge(&self.roster, &self.revealed, &normalized);

        if let GuessOutcome::Correct(id) = outcome {
            self.revealed.insert(id);
        }

        tracing::debug!(
            guess = %normalized,
            ?outcome,
            revealed = self.revealed.len(),
            total = self.roster.len(),
            "judged guess"
        );
        Ok(outcome)
    }

    /// The roster being guessed.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Entries revealed so far.
    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    /// Entries not yet revealed.
    pub fn remaining(&self) -> usize {
        self.roster.len().saturating_sub(self.revealed.len())
    }

    /// Whether every roster entry has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed.len() == self.roster.len()
    }
}
