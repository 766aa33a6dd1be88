//! Observable application state types.
//!
//! These structures are the "View Model" for the UI: the session phase, the
//! feedback line for the last turn and the end-of-run summary.

use std::{fmt, time::Duration};

use dexquiz_core::format_elapsed;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Guesses are accepted.
    Playing,
    /// Every entry has been revealed.
    Complete,
}

/// Category of feedback, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Guess revealed a new entry.
    Correct,
    /// Guess named an entry that was already revealed.
    AlreadyGuessed,
    /// Guess named no entry.
    Incorrect,
    /// Input was rejected before judging (blank).
    Invalid,
}

/// Feedback line shown after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Category.
    pub kind: FeedbackKind,
    /// Text shown to the player.
    pub message: String,
}

impl Feedback {
    /// Create feedback.
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Entries revealed.
    pub revealed: usize,
    /// Roster size.
    pub total: usize,
    /// Time from session start to completion (or quit).
    pub elapsed: Duration,
    /// Whether every entry was revealed.
    pub completed: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.completed { "Completed" } else { "Stopped at" };
        write!(f, "{verb} {}/{} in {}", self.revealed, self.total, format_elapsed(self.elapsed))
    }
}
