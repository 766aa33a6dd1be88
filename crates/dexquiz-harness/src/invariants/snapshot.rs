//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of a session at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use std::{collections::BTreeSet, ops::Sub, time::Duration};

use dexquiz_app::{App, Phase};
use dexquiz_core::EntryId;

/// Snapshot of one session.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Ids present in the roster.
    pub roster: BTreeSet<EntryId>,
    /// Revealed ids in reveal order.
    pub revealed: Vec<EntryId>,
    /// Revealed count at each earlier snapshot, oldest first.
    pub revealed_history: Vec<usize>,
    /// Session phase.
    pub phase: Phase,
    /// Whether the session clock is still counting.
    pub clock_running: bool,
}

impl SessionSnapshot {
    /// Snapshot of a fresh session over the given roster ids.
    pub fn new(roster: impl IntoIterator<Item = EntryId>) -> Self {
        Self {
            roster: roster.into_iter().collect(),
            revealed: Vec::new(),
            revealed_history: Vec::new(),
            phase: Phase::Playing,
            clock_running: true,
        }
    }

    /// Extract a snapshot from live App state.
    pub fn from_app<I>(app: &App<I>, history: &[usize]) -> Self
    where
        I: Copy + Sub<Output = Duration>,
    {
        let session = app.session();
        Self {
            roster: session.roster().entries().iter().map(|entry| entry.id).collect(),
            revealed: session.revealed().iter().collect(),
            revealed_history: history.to_vec(),
            phase: app.phase(),
            clock_running: app.is_clock_running(),
        }
    }

    /// Record a revealed id.
    #[must_use]
    pub fn with_revealed(mut self, id: EntryId) -> Self {
        self.revealed.push(id);
        self
    }

    /// Set the phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Set whether the clock is running.
    #[must_use]
    pub fn with_clock_running(mut self, running: bool) -> Self {
        self.clock_running = running;
        self
    }

    /// Set the revealed-count history.
    #[must_use]
    pub fn with_history(mut self, history: impl IntoIterator<Item = usize>) -> Self {
        self.revealed_history = history.into_iter().collect();
        self
    }
}
